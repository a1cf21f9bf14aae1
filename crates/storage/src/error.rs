//! Repository errors

use pathcollector_wire::MalformedTraceError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a whole repository operation
///
/// Per-file write failures during `push` are not errors at this level; they
/// are collected in the push report.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A directory or file listed during `pull` could not be read
    #[error("cannot read {}: {}", .path.display(), .source)]
    Read {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A trace file read during `pull` is not a valid trace
    #[error("malformed trace file {}: {}", .path.display(), .source)]
    Malformed {
        /// Offending file
        path: PathBuf,
        /// Decoder error
        source: MalformedTraceError,
    },

    /// The repository root could not be created during `push`
    #[error("cannot create repository root {}: {}", .path.display(), .source)]
    CreateRoot {
        /// Root directory
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

/// Result type for repository operations
pub type Result<T> = std::result::Result<T, RepositoryError>;
