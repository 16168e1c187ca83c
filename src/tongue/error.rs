use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TongueError {
    #[error("No vocabulary file at {}", .0.display())]
    MissingFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    /// A mistake in the user's input. Reported as guidance, not as a failure.
    #[error("{0}")]
    Usage(String),
}

impl TongueError {
    /// Whether the error should abort the process with a failure status.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, TongueError::Usage(_))
    }
}

pub type Result<T> = std::result::Result<T, TongueError>;
