use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("document is not valid UTF-8 (at byte {offset})")]
    InvalidUtf8 { offset: usize },
}
