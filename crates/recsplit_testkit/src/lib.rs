//! # recsplit Testkit
//!
//! Test utilities for recsplit.
//!
//! This crate provides:
//! - FASTA fixtures and in-memory split helpers
//! - Property-based test generators using proptest
//! - Cross-crate integration tests driving the whole pipeline
//!
//! ## Usage
//!
//! ```rust,ignore
//! use recsplit_testkit::prelude::*;
//!
//! #[test]
//! fn splits_cleanly() {
//!     let input = fasta_of(10);
//!     let pieces = split_in_memory(&input, 3, 64).unwrap();
//!     assert_clean_split(&input, &pieces);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod integration;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
