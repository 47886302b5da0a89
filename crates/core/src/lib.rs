pub mod config;
pub mod error;
pub mod modes;
pub mod types;
pub mod utils;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use modes::ContractType;
pub use types::ScanInput;
