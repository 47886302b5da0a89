use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown checklist item: {0}")]
    UnknownChecklistItem(String),
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
    #[error("review text is empty")]
    EmptyReview,
    #[error("review text exceeds {max} characters")]
    ReviewTooLong { max: usize },
}
