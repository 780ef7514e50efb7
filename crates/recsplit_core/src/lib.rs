//! # Recsplit Core
//!
//! Splits one record-structured input stream into N output pieces of
//! roughly equal size such that no record is divided between pieces.
//!
//! The crate is built from three layers:
//!
//! - [`locate_boundary`] - given a window of buffered bytes and a
//!   desired cut offset, finds the nearest true record boundary
//! - [`compute_transfer_len`] - decides how many buffered bytes the
//!   engine may emit to the current piece in one step
//! - [`split`] - the streaming transfer engine: owns a double-sized
//!   working buffer, refills it from the input, writes decided spans to
//!   piece sinks, and keeps the window aligned across refills
//!
//! What counts as a "record" is a pluggable policy behind
//! [`RecordFormat`]; [`FastaFormat`] recognizes the reference grammar
//! (`>` starts a record, each record carries exactly two newlines).
//!
//! ## Example
//!
//! ```rust
//! use recsplit_core::{split, FastaFormat, SplitConfig};
//! use recsplit_io::{MemoryPieceFactory, MemorySource};
//!
//! let mut source = MemorySource::with_data(b">a\nAC\n>b\nGT\n".to_vec());
//! let mut pieces = MemoryPieceFactory::new();
//! let config = SplitConfig::new(2).chunk_size(1024);
//!
//! let report = split(&mut source, &mut pieces, &config, &FastaFormat).unwrap();
//! assert_eq!(report.pieces.len(), 2);
//! assert_eq!(pieces.pieces()[0], b">a\nAC\n");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod bound;
mod boundary;
mod config;
mod engine;
mod error;
mod format;
mod window;

pub use bound::compute_transfer_len;
pub use boundary::{locate_boundary, Boundary};
pub use config::{SplitConfig, DEFAULT_CHUNK_SIZE};
pub use engine::{split, PieceInfo, SplitReport};
pub use error::{SplitError, SplitResult};
pub use format::{FastaFormat, RecordFormat};
