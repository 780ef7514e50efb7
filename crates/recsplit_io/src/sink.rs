//! Piece sink and factory trait definitions.

use crate::error::IoResult;

/// An append-sequential output stream for one piece.
///
/// # Invariants
///
/// - `write_chunk` returns the count accepted; the caller verifies it
///   against the requested span
/// - `finalize` durably persists the piece and reports its final size;
///   a piece that was never finalized carries no durability guarantee
pub trait PieceSink {
    /// Appends bytes to the piece.
    ///
    /// Returns the number of bytes actually written.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    fn write_chunk(&mut self, data: &[u8]) -> IoResult<usize>;

    /// Flushes the piece to durable storage and closes it.
    ///
    /// Returns the final size of the piece in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing or syncing fails.
    fn finalize(self) -> IoResult<u64>;
}

/// Creates the output target for each piece of a run.
pub trait PieceFactory {
    /// The sink type produced by this factory.
    type Sink: PieceSink;

    /// Creates the output target for piece `index` (0-based).
    ///
    /// Creation is exclusive: if the target already exists the factory
    /// must fail rather than truncate or overwrite it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::IoError::AlreadyExists`] on collision, or an
    /// I/O error if creation fails.
    fn create_piece(&mut self, index: u64) -> IoResult<Self::Sink>;
}
