//! Unified error type for PathCollector.
//!
//! Wraps the per-crate errors so applications handle a single type.

use pathcollector_core::SessionError;
use pathcollector_storage::RepositoryError;
use pathcollector_wire::MalformedTraceError;
use thiserror::Error;

/// All PathCollector errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Trace markup could not be decoded
    #[error("malformed trace: {0}")]
    Malformed(#[from] MalformedTraceError),

    /// Capture session used out of order
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// Repository pull/push failed as a whole
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(String),

    /// Invalid input from a caller
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for PathCollector operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a decoding failure, including one raised while pulling.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::Malformed(_) | Error::Repository(RepositoryError::Malformed { .. })
        )
    }

    /// Check if this is lifecycle misuse of a capture session.
    pub fn is_session_misuse(&self) -> bool {
        matches!(self, Error::Session(_))
    }
}

// Convert from TOML parse errors
impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
