//! Transfer bound decision.
//!
//! Sits between the engine loop and the boundary search: given the
//! currently buffered (active) bytes and the piece's remaining byte
//! budget, decides how many bytes the engine may emit in one step.

use crate::boundary::{locate_boundary, Boundary};
use crate::error::{SplitError, SplitResult};
use crate::format::RecordFormat;

/// Decides how many bytes of `active` to transfer to the current piece.
///
/// `projected_max` is the piece's remaining byte budget. When it
/// exceeds the buffered data, whole chunks are emitted without any
/// boundary search and the remainder is deferred to the next refill.
/// Only when the budget falls inside the buffered data is the boundary
/// search consulted to align the cut on a record boundary.
///
/// Returns the number of bytes to emit from the front of `active`.
/// Zero means the piece closes without taking anything from the window,
/// which is only legal once the piece holds at least one block.
///
/// # Errors
///
/// Returns [`SplitError::ChunkTooSmall`] when a full window holds no
/// record boundary and more input remains.
pub fn compute_transfer_len<F: RecordFormat>(
    active: &[u8],
    chunk_size: usize,
    projected_max: u64,
    is_first_block: bool,
    is_end_of_input: bool,
    is_last_piece: bool,
    format: &F,
) -> SplitResult<usize> {
    debug_assert!(active.len() <= 2 * chunk_size);
    debug_assert!(projected_max > 0);

    // The budget reaches past the buffered data: emit a full chunk if
    // one is buffered, otherwise everything, and let the caller refill.
    if projected_max > active.len() as u64 {
        if active.len() >= chunk_size {
            return Ok(chunk_size);
        }
        return Ok(active.len());
    }

    // The last piece absorbs all remaining bytes verbatim; searching
    // for a boundary could only misplace data.
    if is_last_piece {
        debug_assert_eq!(projected_max, active.len() as u64);
        return Ok(active.len());
    }

    let projected_bound = (projected_max - 1) as usize;
    match locate_boundary(active, projected_bound, is_first_block, format) {
        Some(Boundary::At(offset)) => Ok(offset + 1),
        Some(Boundary::BeforeWindow) => {
            debug_assert!(!is_first_block);
            Ok(0)
        }
        // No boundary, but no more input either: flush what is left.
        None if is_end_of_input => Ok(active.len()),
        None => {
            debug_assert!(active.len() >= chunk_size);
            Err(SplitError::ChunkTooSmall { chunk_size })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FastaFormat;

    const FMT: FastaFormat = FastaFormat;

    #[test]
    fn emits_full_chunk_when_budget_exceeds_buffered() {
        let active = vec![b'A'; 10];
        let len = compute_transfer_len(&active, 8, 20, true, false, false, &FMT).unwrap();
        assert_eq!(len, 8);
    }

    #[test]
    fn emits_everything_when_less_than_chunk_buffered() {
        let active = vec![b'A'; 5];
        let len = compute_transfer_len(&active, 8, 20, true, false, false, &FMT).unwrap();
        assert_eq!(len, 5);
    }

    #[test]
    fn last_piece_skips_boundary_search() {
        // A clean boundary exists mid-window, but the last piece must
        // take everything anyway.
        let active = b">a\nAC\n>b\nGT\n";
        let len =
            compute_transfer_len(active, 16, active.len() as u64, true, true, true, &FMT).unwrap();
        assert_eq!(len, active.len());
    }

    #[test]
    fn aligns_cut_on_found_boundary() {
        let active = b">a\nAC\n>b\nGT\n";
        // Budget of 6 projects exactly onto the first record's end.
        let len = compute_transfer_len(active, 16, 6, true, false, false, &FMT).unwrap();
        assert_eq!(len, 6);
    }

    #[test]
    fn boundary_before_window_closes_piece_empty_handed() {
        let active = b">b\nGT\n";
        let len = compute_transfer_len(active, 16, 1, false, false, false, &FMT).unwrap();
        assert_eq!(len, 0);
    }

    #[test]
    fn flushes_remainder_at_end_of_input() {
        let active = b"GTGT";
        let len =
            compute_transfer_len(active, 4, active.len() as u64, false, true, false, &FMT).unwrap();
        assert_eq!(len, 4);
    }

    #[test]
    fn missing_boundary_with_input_left_is_fatal() {
        let active = b"GTGT";
        let result =
            compute_transfer_len(active, 4, active.len() as u64, false, false, false, &FMT);
        assert!(matches!(result, Err(SplitError::ChunkTooSmall { chunk_size: 4 })));
    }
}
