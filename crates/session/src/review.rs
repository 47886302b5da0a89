use serde::Serialize;

use crate::error::SessionError;

pub const MAX_REVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub rating: u8,
    pub text: String,
    pub created_ms: u64,
}

impl Review {
    pub fn new(rating: u8, text: &str, created_ms: u64) -> Result<Self, SessionError> {
        if !(1..=5).contains(&rating) {
            return Err(SessionError::InvalidRating(rating));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyReview);
        }
        if text.chars().count() > MAX_REVIEW_CHARS {
            return Err(SessionError::ReviewTooLong {
                max: MAX_REVIEW_CHARS,
            });
        }
        Ok(Self {
            rating,
            text: text.to_string(),
            created_ms,
        })
    }
}
