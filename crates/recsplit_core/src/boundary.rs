//! Record boundary search.
//!
//! Given a window of buffered input bytes and a projected cut offset,
//! [`locate_boundary`] finds the record boundary closest to that
//! offset. The search expands a symmetric radius around the projected
//! offset, probing one byte to the left and one byte to the right per
//! step. The left probe is evaluated first at every radius: when two
//! boundaries are equally close, the current piece is closed early
//! rather than late, because later pieces absorb residual imbalance
//! and the final piece is conventionally the smaller one.

use crate::format::RecordFormat;

/// Outcome of a successful boundary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The window begins exactly at a record start: close the current
    /// piece without taking any window byte.
    ///
    /// Only produced when the piece already holds at least one block;
    /// a piece may never be closed empty.
    BeforeWindow,

    /// Offset of the last byte of a record, relative to the window
    /// start. Emitting the window up to and including this byte leaves
    /// the cut on a true record boundary.
    At(usize),
}

/// Finds the record boundary nearest to `projected_bound`.
///
/// `projected_bound` is the desired offset of the last byte the current
/// piece would take from `window`; it must lie inside the window.
/// `is_first_block` indicates that nothing has been written to the
/// current piece yet, which forbids closing it with zero bytes.
///
/// Returns `None` when the window contains no boundary at all, which
/// means the window is too small relative to the records inside it.
///
/// This function performs no I/O and never mutates the window.
pub fn locate_boundary<F: RecordFormat>(
    window: &[u8],
    projected_bound: usize,
    is_first_block: bool,
    format: &F,
) -> Option<Boundary> {
    debug_assert!(projected_bound < window.len());

    let distance_to_left = projected_bound + 1;
    let distance_to_right = window.len() - projected_bound;
    let per_record = format.terminators_per_record();
    let mut terminators = 0u32;

    for radius in 0..distance_to_left.max(distance_to_right) {
        // Probes past either window edge never match anything.
        let left = (radius < distance_to_left).then(|| window[projected_bound - radius]);
        let right = (radius < distance_to_right).then(|| window[projected_bound + radius]);

        if let Some(byte) = left {
            if format.is_record_start(byte)
                && (radius + 1 < distance_to_left || !is_first_block)
            {
                // The byte before the record start ends the previous
                // record. A marker at window offset 0 means the piece is
                // already whole, which is only acceptable once the piece
                // holds data; otherwise keep scanning for a later cut.
                return Some(if radius == projected_bound {
                    Boundary::BeforeWindow
                } else {
                    Boundary::At(projected_bound - radius - 1)
                });
            }
        }

        if radius != 0 {
            if let Some(byte) = right {
                if format.is_record_start(byte) {
                    return Some(Boundary::At(projected_bound + radius - 1));
                }
            }
        }

        if left.is_some_and(|byte| format.is_terminator(byte)) {
            terminators += 1;
        }
        // The pivot byte was already counted by the left probe.
        if radius != 0 && right.is_some_and(|byte| format.is_terminator(byte)) {
            terminators += 1;
        }

        // A full record's worth of terminators, the right probe at the
        // window edge, and the window ending on a terminator: the window
        // ends exactly on a record boundary.
        if terminators == per_record
            && radius + 1 >= distance_to_right
            && format.is_terminator(window[window.len() - 1])
        {
            return Some(Boundary::At(window.len() - 1));
        }

        debug_assert!(terminators <= per_record);
    }

    None
}
