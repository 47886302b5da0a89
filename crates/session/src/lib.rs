pub mod checklist;
pub mod error;
pub mod events;
pub mod review;
pub mod state;

pub use checklist::{Checklist, ChecklistItem, CHECKLIST_ITEMS};
pub use error::SessionError;
pub use events::{apply_event, EventOutcome, SessionEvent};
pub use review::Review;
pub use state::{SessionId, SessionState, SessionStore, SessionSummary};
