//! Error types for the split engine.

use std::io;
use thiserror::Error;

/// Result type for split operations.
pub type SplitResult<T> = Result<T, SplitError>;

/// Errors that can occur during a split run.
///
/// Nothing here is retried: a run either completes fully or stops at
/// the first error. Pieces already finalized before the failure are
/// left in place.
#[derive(Debug, Error)]
pub enum SplitError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An input source or piece sink failed.
    #[error("piece I/O error: {0}")]
    Piece(#[from] recsplit_io::IoError),

    /// The input delivered fewer bytes than its declared length implies.
    #[error("read {actual} bytes from the input, expected {expected} (is it a regular file?)")]
    ShortRead {
        /// Bytes requested.
        expected: usize,
        /// Bytes obtained.
        actual: usize,
    },

    /// A piece accepted fewer bytes than requested.
    #[error("wrote {actual} bytes to a piece, expected {expected} (is it a regular storage device?)")]
    ShortWrite {
        /// Bytes requested.
        expected: usize,
        /// Bytes accepted.
        actual: usize,
    },

    /// A full window contained no record boundary.
    ///
    /// The configured chunk size is smaller than some record in the
    /// input; the run cannot proceed without splitting that record.
    #[error("no record boundary found inside a window: chunk size {chunk_size} must exceed the largest record")]
    ChunkTooSmall {
        /// The configured chunk size in bytes.
        chunk_size: usize,
    },

    /// The input ran out before the requested number of pieces.
    #[error("could not produce the requested {requested} pieces, only {produced} were written")]
    InputExhausted {
        /// Pieces requested.
        requested: u64,
        /// Pieces actually written.
        produced: u64,
    },

    /// The configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },
}

impl SplitError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
