//! The double-sized working buffer.
//!
//! The engine streams the input through a buffer of `2 x chunk_size`
//! bytes. Refills always land in the upper half; emitted bytes leave
//! from the front of the active window; whatever survives a transfer is
//! slid to the tail of the lower half so the upper half is free for the
//! next refill. The active window is tracked as an index pair
//! (`start`, exclusive `end`) into the buffer.

use crate::error::{SplitError, SplitResult};

/// Working buffer with a sliding active window.
///
/// Invariants, maintained across all operations:
/// - at most `2 x chunk` active bytes at any time
/// - between refills, `start <= chunk` and `end >= chunk`
/// - the canonical empty state is `start == end == chunk`, leaving the
///   upper half as the refill target
#[derive(Debug)]
pub(crate) struct SlideBuffer {
    buf: Vec<u8>,
    chunk: usize,
    start: usize,
    /// Exclusive end of the active window.
    end: usize,
}

impl SlideBuffer {
    /// Allocates a buffer of twice the chunk size, empty.
    pub fn new(chunk_size: usize) -> SplitResult<Self> {
        let total = chunk_size
            .checked_mul(2)
            .ok_or_else(|| SplitError::invalid_config("chunk size overflows the working buffer"))?;

        Ok(Self {
            buf: vec![0u8; total],
            chunk: chunk_size,
            start: chunk_size,
            end: chunk_size,
        })
    }

    /// The currently buffered, not-yet-emitted bytes.
    pub fn active(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    pub fn active_len(&self) -> usize {
        self.end - self.start
    }

    /// True when the upper half is fully drained and may be refilled.
    pub fn needs_refill(&self) -> bool {
        self.end == self.chunk
    }

    /// The upper-half slice a refill should read into.
    pub fn refill_target(&mut self, want: usize) -> &mut [u8] {
        debug_assert!(self.needs_refill());
        debug_assert!(want <= self.chunk);
        &mut self.buf[self.chunk..self.chunk + want]
    }

    /// Extends the active window over `got` freshly read bytes.
    pub fn extend_filled(&mut self, got: usize) {
        self.end += got;
        debug_assert!(self.end <= 2 * self.chunk);
        debug_assert!(self.active_len() <= 2 * self.chunk);
    }

    /// Drops `n` emitted bytes from the front of the active window.
    pub fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.active_len());
        self.start += n;
    }

    /// Restores the window shape after a transfer.
    ///
    /// Residual bytes that have moved entirely into the upper half are
    /// slid to the tail of the lower half, right edge on the buffer
    /// midpoint, so the upper half is free for the next refill without
    /// breaking continuity of the undelivered bytes. An emptied window
    /// snaps back to the canonical empty state; `input_drained` asserts
    /// the only two situations in which that may happen.
    pub fn realign(&mut self, input_drained: bool) {
        if self.start >= self.chunk && self.end > self.start {
            let active = self.end - self.start;
            self.buf.copy_within(self.start..self.end, self.chunk - active);
            self.start = self.chunk - active;
            self.end = self.chunk;
        }

        if self.start == self.end {
            debug_assert!(self.start == 2 * self.chunk || input_drained);
            self.start = self.chunk;
            self.end = self.chunk;
        }
    }
}
