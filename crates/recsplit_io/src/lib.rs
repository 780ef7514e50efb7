//! # Recsplit I/O
//!
//! Byte-stream collaborators for the recsplit engine.
//!
//! The split engine consumes one sequential input stream of known total
//! length and produces a series of independently created output pieces.
//! This crate defines those two seams and their implementations:
//!
//! - [`InputSource`] - a readable byte stream of known length
//! - [`PieceSink`] / [`PieceFactory`] - creation and finalization of
//!   output pieces
//!
//! ## Design Principles
//!
//! - Sources and sinks move opaque bytes; they never interpret records
//! - Every call reports the obtained byte count back so the engine can
//!   enforce its byte accounting
//! - Piece creation is exclusive: an existing output file is an error,
//!   never a silent overwrite
//!
//! ## Available Implementations
//!
//! - [`FileSource`] / [`FilePieceFactory`] - OS files, for the CLI
//! - [`MemorySource`] / [`MemoryPieceFactory`] - in-memory doubles for tests

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod file;
mod memory;
mod sink;
mod source;

pub use error::{IoError, IoResult};
pub use file::{FilePieceFactory, FilePieceSink, FileSource};
pub use memory::{MemoryPieceFactory, MemoryPieceSink, MemorySource};
pub use sink::{PieceFactory, PieceSink};
pub use source::InputSource;
