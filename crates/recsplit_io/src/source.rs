//! Input source trait definition.

use crate::error::IoResult;

/// A sequential input stream of known total length.
///
/// Sources are **opaque byte streams**. The engine reads them strictly
/// front to back in chunks it sizes itself; sources never interpret
/// record structure.
///
/// # Invariants
///
/// - `total_len` is fixed for the lifetime of the source
/// - `read_chunk` returns the count obtained, short only at the end of
///   the stream; whether a short count is acceptable is the caller's
///   decision
pub trait InputSource {
    /// Returns the total length of the input in bytes.
    fn total_len(&self) -> u64;

    /// Reads the next bytes of the stream into `buf`.
    ///
    /// Returns the number of bytes obtained, which may be less than
    /// `buf.len()`. The caller decides whether a short read is fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn read_chunk(&mut self, buf: &mut [u8]) -> IoResult<usize>;
}
