//! Error types for source and sink operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for I/O collaborator operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading the input or producing pieces.
#[derive(Debug, Error)]
pub enum IoError {
    /// An underlying I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A piece output target already exists.
    ///
    /// Pieces are created exclusively; colliding with an existing file
    /// aborts the run instead of truncating it.
    #[error("output file already exists: {path}")]
    AlreadyExists {
        /// The path that could not be created.
        path: PathBuf,
    },
}
