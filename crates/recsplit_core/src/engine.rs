//! Streaming transfer engine.
//!
//! Drives the whole split: for each piece, repeatedly refill the
//! working buffer from the input, decide how many buffered bytes may be
//! emitted, write them to the piece sink, and realign the buffer for
//! the next step.
//!
//! The buffer rules are:
//!
//! 1. input data always lands in the upper half of the double-sized
//!    buffer, one chunk at a time
//! 2. transfers leave from the front of the active window
//! 3. residual bytes slide to the tail of the lower half so the upper
//!    half stays free, keeping the active window one continuous span of
//!    the input stream
//! 4. a refill happens only once the upper half is fully drained

use crate::bound::compute_transfer_len;
use crate::config::SplitConfig;
use crate::error::{SplitError, SplitResult};
use crate::format::RecordFormat;
use crate::window::SlideBuffer;
use recsplit_io::{InputSource, PieceFactory, PieceSink};
use serde::Serialize;
use tracing::{debug, info};

/// Size record for one finalized piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceInfo {
    /// 0-based piece index.
    pub index: u64,
    /// Final durable size of the piece in bytes.
    pub bytes: u64,
}

/// Summary of a completed split run.
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    /// Per-piece sizes, in piece order.
    pub pieces: Vec<PieceInfo>,
    /// Total input bytes distributed over the pieces.
    pub total_bytes: u64,
}

/// Splits the input stream into `config.num_pieces` pieces.
///
/// Piece `k` of `n` receives a target budget of
/// `ceil(remaining_bytes / remaining_pieces)`, so the remaining data is
/// re-balanced at every piece start and targets shrink monotonically.
/// Each piece is cut on a record boundary as decided by
/// [`compute_transfer_len`]; the last piece absorbs all remaining bytes.
///
/// # Errors
///
/// - [`SplitError::InvalidConfig`] for a contradictory configuration
/// - [`SplitError::InputExhausted`] when the input runs out before the
///   requested number of pieces
/// - [`SplitError::ChunkTooSmall`] when a record exceeds the chunk size
/// - [`SplitError::ShortRead`] / [`SplitError::ShortWrite`] when the
///   byte accounting of a collaborator does not add up
pub fn split<R, P, F>(
    source: &mut R,
    pieces: &mut P,
    config: &SplitConfig,
    format: &F,
) -> SplitResult<SplitReport>
where
    R: InputSource,
    P: PieceFactory,
    F: RecordFormat,
{
    config.validate()?;

    let chunk = config.chunk_size;
    let mut window = SlideBuffer::new(chunk)?;
    let mut bytes_available = source.total_len();
    let mut bytes_not_read = bytes_available;

    let mut report = SplitReport {
        pieces: Vec::with_capacity(config.num_pieces as usize),
        total_bytes: bytes_available,
    };

    info!(
        total_bytes = bytes_available,
        num_pieces = config.num_pieces,
        chunk_size = chunk,
        format = format.name(),
        "starting split"
    );

    for piece_num in 0..config.num_pieces {
        // Divide the remaining data equally between the remaining pieces.
        let remaining_pieces = config.num_pieces - piece_num;
        let mut to_read = bytes_available.div_ceil(remaining_pieces);

        if to_read == 0 {
            return Err(SplitError::InputExhausted {
                requested: config.num_pieces,
                produced: piece_num,
            });
        }

        let mut sink = pieces.create_piece(piece_num)?;
        let mut is_first_block = true;
        let is_last_piece = piece_num + 1 == config.num_pieces;
        debug!(piece = piece_num, target = to_read, "starting piece");

        while to_read > 0 {
            if window.needs_refill() {
                // Reads always cover a full chunk, except the final read
                // of the input. Bytes that overshoot the current piece
                // stay in the window and seed the next piece.
                let want = bytes_not_read.min(chunk as u64) as usize;
                if want > 0 {
                    let got = source.read_chunk(window.refill_target(want))?;
                    if got != want {
                        return Err(SplitError::ShortRead {
                            expected: want,
                            actual: got,
                        });
                    }
                    window.extend_filled(got);
                    bytes_not_read -= got as u64;
                    debug!(piece = piece_num, bytes = got, "refilled window");
                }
            }

            let emit = compute_transfer_len(
                window.active(),
                chunk,
                to_read,
                is_first_block,
                bytes_not_read == 0,
                is_last_piece,
                format,
            )?;

            if emit == 0 {
                // The window begins exactly on a record start; the piece
                // already ends on a boundary.
                to_read = 0;
            } else {
                let span = emit as u64;
                // A cut shifted past the projected bound overshoots the
                // budget; the piece closes either way.
                to_read = if span >= to_read { 0 } else { to_read - span };

                let written = sink.write_chunk(&window.active()[..emit])?;
                if written != emit {
                    return Err(SplitError::ShortWrite {
                        expected: emit,
                        actual: written,
                    });
                }

                bytes_available -= span;
                window.consume(emit);
                is_first_block = false;
            }

            window.realign(bytes_available == 0 && bytes_not_read == 0);
        }

        let bytes = sink.finalize()?;
        info!(piece = piece_num, bytes, "piece written");
        report.pieces.push(PieceInfo {
            index: piece_num,
            bytes,
        });
    }

    debug_assert_eq!(bytes_available, 0);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FastaFormat;
    use recsplit_io::{IoResult, MemoryPieceFactory, MemorySource};

    fn run(input: &[u8], num_pieces: u64, chunk_size: usize) -> SplitResult<Vec<Vec<u8>>> {
        let mut source = MemorySource::with_data(input.to_vec());
        let mut pieces = MemoryPieceFactory::new();
        let config = SplitConfig::new(num_pieces).chunk_size(chunk_size);
        split(&mut source, &mut pieces, &config, &FastaFormat)?;
        Ok(pieces.pieces())
    }

    const INPUT: &[u8] = b">a\nAC\n>b\nGT\n";

    #[test]
    fn two_pieces_whole_file_buffered() {
        let pieces = run(INPUT, 2, 1024).unwrap();
        assert_eq!(pieces, vec![b">a\nAC\n".to_vec(), b">b\nGT\n".to_vec()]);
    }

    #[test]
    fn chunking_does_not_move_the_cut() {
        // Chunk of 5 forces multiple refills and window slides, yet the
        // piece contents must not change.
        let pieces = run(INPUT, 2, 5).unwrap();
        assert_eq!(pieces, vec![b">a\nAC\n".to_vec(), b">b\nGT\n".to_vec()]);
    }

    #[test]
    fn report_carries_piece_sizes() {
        let mut source = MemorySource::with_data(INPUT.to_vec());
        let mut pieces = MemoryPieceFactory::new();
        let config = SplitConfig::new(2).chunk_size(1024);
        let report = split(&mut source, &mut pieces, &config, &FastaFormat).unwrap();

        assert_eq!(report.total_bytes, 12);
        assert_eq!(
            report.pieces,
            vec![
                PieceInfo { index: 0, bytes: 6 },
                PieceInfo { index: 1, bytes: 6 },
            ]
        );
    }

    #[test]
    fn more_pieces_than_records_is_an_error() {
        let result = run(INPUT, 5, 1024);
        assert!(matches!(
            result,
            Err(SplitError::InputExhausted { requested: 5, .. })
        ));
    }

    #[test]
    fn record_larger_than_chunk_is_an_error() {
        // First record far exceeds the chunk while unread input remains
        // behind it, so no window can ever show a boundary.
        let mut input = Vec::new();
        input.extend_from_slice(b">x\n");
        input.extend_from_slice(&[b'A'; 35]);
        input.extend_from_slice(b"\n>b\nGT\n");

        let result = run(&input, 2, 8);
        assert!(matches!(result, Err(SplitError::ChunkTooSmall { chunk_size: 8 })));
    }

    #[test]
    fn last_piece_absorbs_remainder() {
        // Three equal records over two pieces: the first piece takes one
        // record, the last takes both remaining ones verbatim.
        let input = b">a\nAC\n>b\nGT\n>c\nTT\n";
        let pieces = run(input, 2, 1024).unwrap();
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0], b">a\nAC\n");
        assert_eq!(pieces[1], b">b\nGT\n>c\nTT\n");
    }

    #[test]
    fn uniform_records_get_equal_budgets() {
        // Eight records of 13 bytes over four pieces: every rebalanced
        // budget lands exactly on a record boundary, so piece sizes
        // come out equal and the budget sequence never grows.
        let mut input = Vec::new();
        for i in 0..8 {
            input.extend_from_slice(format!(">s{i}\nACGTACGT\n").as_bytes());
        }

        let mut source = MemorySource::with_data(input.clone());
        let mut pieces = MemoryPieceFactory::new();
        let config = SplitConfig::new(4).chunk_size(1024);
        let report = split(&mut source, &mut pieces, &config, &FastaFormat).unwrap();

        assert!(report.pieces.iter().all(|piece| piece.bytes == 26));

        let mut available = input.len() as u64;
        let mut previous_budget = u64::MAX;
        for (k, piece) in report.pieces.iter().enumerate() {
            let budget = available.div_ceil(4 - k as u64);
            assert!(budget <= previous_budget, "budget grew at piece {k}");
            previous_budget = budget;
            available -= piece.bytes;
        }
    }

    #[test]
    fn empty_input_is_exhausted_immediately() {
        let result = run(b"", 2, 16);
        assert!(matches!(
            result,
            Err(SplitError::InputExhausted { produced: 0, .. })
        ));
    }

    #[test]
    fn invalid_config_is_rejected_before_any_piece() {
        let mut source = MemorySource::with_data(INPUT.to_vec());
        let mut pieces = MemoryPieceFactory::new();
        let config = SplitConfig::new(1).chunk_size(16);
        let result = split(&mut source, &mut pieces, &config, &FastaFormat);
        assert!(matches!(result, Err(SplitError::InvalidConfig { .. })));
        assert!(pieces.pieces().is_empty());
    }

    /// Source that claims more bytes than it can deliver.
    struct LyingSource {
        inner: MemorySource,
        claimed: u64,
    }

    impl InputSource for LyingSource {
        fn total_len(&self) -> u64 {
            self.claimed
        }

        fn read_chunk(&mut self, buf: &mut [u8]) -> IoResult<usize> {
            self.inner.read_chunk(buf)
        }
    }

    #[test]
    fn short_read_is_fatal() {
        let mut source = LyingSource {
            inner: MemorySource::with_data(INPUT.to_vec()),
            claimed: 64,
        };
        let mut pieces = MemoryPieceFactory::new();
        let config = SplitConfig::new(2).chunk_size(16);
        let result = split(&mut source, &mut pieces, &config, &FastaFormat);
        assert!(matches!(result, Err(SplitError::ShortRead { .. })));
    }

    /// Sink that accepts only part of every write.
    struct StingySink;
    struct StingyFactory;

    impl PieceSink for StingySink {
        fn write_chunk(&mut self, data: &[u8]) -> IoResult<usize> {
            Ok(data.len().saturating_sub(1))
        }

        fn finalize(self) -> IoResult<u64> {
            Ok(0)
        }
    }

    impl PieceFactory for StingyFactory {
        type Sink = StingySink;

        fn create_piece(&mut self, _index: u64) -> IoResult<Self::Sink> {
            Ok(StingySink)
        }
    }

    #[test]
    fn short_write_is_fatal() {
        let mut source = MemorySource::with_data(INPUT.to_vec());
        let mut factory = StingyFactory;
        let config = SplitConfig::new(2).chunk_size(16);
        let result = split(&mut source, &mut factory, &config, &FastaFormat);
        assert!(matches!(result, Err(SplitError::ShortWrite { .. })));
    }
}
