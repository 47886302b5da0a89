pub mod error;
pub mod extract;
pub mod geocode;

pub use error::IntakeError;
pub use extract::{PlainTextExtractor, TextExtractor};
pub use geocode::{GeoPoint, Geocoder, StaticGeocoder};
