//! In-memory source and sinks for testing.

use crate::error::IoResult;
use crate::sink::{PieceFactory, PieceSink};
use crate::source::InputSource;
use parking_lot::Mutex;
use std::sync::Arc;

/// An in-memory input source.
///
/// Suitable for unit and integration tests that exercise the engine
/// without touching the file system.
///
/// # Example
///
/// ```rust
/// use recsplit_io::{InputSource, MemorySource};
///
/// let mut source = MemorySource::with_data(b">a\nAC\n".to_vec());
/// assert_eq!(source.total_len(), 6);
/// ```
#[derive(Debug, Default)]
pub struct MemorySource {
    data: Vec<u8>,
    pos: usize,
}

impl MemorySource {
    /// Creates an empty in-memory source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory source over the given bytes.
    #[must_use]
    pub fn with_data(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }
}

impl InputSource for MemorySource {
    fn total_len(&self) -> u64 {
        self.data.len() as u64
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        let remaining = self.data.len() - self.pos;
        let take = buf.len().min(remaining);
        buf[..take].copy_from_slice(&self.data[self.pos..self.pos + take]);
        self.pos += take;
        Ok(take)
    }
}

/// Shared store collecting finalized in-memory pieces in order.
type PieceStore = Arc<Mutex<Vec<Vec<u8>>>>;

/// An in-memory piece factory.
///
/// Finalized pieces are collected into a shared store that remains
/// readable after the run, so tests can inspect the produced pieces.
#[derive(Debug, Default)]
pub struct MemoryPieceFactory {
    store: PieceStore,
}

impl MemoryPieceFactory {
    /// Creates a factory with an empty piece store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all finalized pieces, in creation order.
    #[must_use]
    pub fn pieces(&self) -> Vec<Vec<u8>> {
        self.store.lock().clone()
    }
}

impl PieceFactory for MemoryPieceFactory {
    type Sink = MemoryPieceSink;

    fn create_piece(&mut self, _index: u64) -> IoResult<Self::Sink> {
        Ok(MemoryPieceSink {
            buf: Vec::new(),
            store: Arc::clone(&self.store),
        })
    }
}

/// An in-memory piece being written.
#[derive(Debug)]
pub struct MemoryPieceSink {
    buf: Vec<u8>,
    store: PieceStore,
}

impl PieceSink for MemoryPieceSink {
    fn write_chunk(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn finalize(self) -> IoResult<u64> {
        let size = self.buf.len() as u64;
        self.store.lock().push(self.buf);
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_reads_sequentially() {
        let mut source = MemorySource::with_data(b"hello world".to_vec());
        assert_eq!(source.total_len(), 11);

        let mut buf = [0u8; 5];
        assert_eq!(source.read_chunk(&mut buf).unwrap(), 5);
        assert_eq!(&buf, b"hello");

        let mut buf = [0u8; 10];
        assert_eq!(source.read_chunk(&mut buf).unwrap(), 6);
        assert_eq!(&buf[..6], b" world");

        // Exhausted source yields zero bytes.
        assert_eq!(source.read_chunk(&mut buf).unwrap(), 0);
    }

    #[test]
    fn memory_source_empty() {
        let mut source = MemorySource::new();
        assert_eq!(source.total_len(), 0);

        let mut buf = [0u8; 4];
        assert_eq!(source.read_chunk(&mut buf).unwrap(), 0);
    }

    #[test]
    fn memory_pieces_collected_in_order() {
        let mut factory = MemoryPieceFactory::new();

        let mut first = factory.create_piece(0).unwrap();
        first.write_chunk(b">a\n").unwrap();
        first.write_chunk(b"AC\n").unwrap();
        assert_eq!(first.finalize().unwrap(), 6);

        let mut second = factory.create_piece(1).unwrap();
        second.write_chunk(b">b\nGT\n").unwrap();
        assert_eq!(second.finalize().unwrap(), 6);

        let pieces = factory.pieces();
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0], b">a\nAC\n");
        assert_eq!(pieces[1], b">b\nGT\n");
    }

    #[test]
    fn unfinalized_piece_is_not_collected() {
        let mut factory = MemoryPieceFactory::new();
        let mut sink = factory.create_piece(0).unwrap();
        sink.write_chunk(b"data").unwrap();
        drop(sink);

        assert!(factory.pieces().is_empty());
    }
}
