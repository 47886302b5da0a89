use std::path::Path;
use tracing::debug;

use crate::error::IntakeError;

/// Turns an uploaded document into memo text for the scorer.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, IntakeError>;

    fn extract_file(&self, path: &Path) -> Result<String, IntakeError> {
        let bytes = std::fs::read(path).map_err(|source| IntakeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), len = bytes.len(), "document read");
        self.extract(&bytes)
    }
}

/// UTF-8 text documents. Collapses whitespace runs and blank lines so
/// multi-word keywords still match across line wraps.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, IntakeError> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let text = std::str::from_utf8(bytes).map_err(|e| IntakeError::InvalidUtf8 {
            offset: e.valid_up_to(),
        })?;
        Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}
