//! Split run configuration.

use crate::error::{SplitError, SplitResult};

/// Default chunk size: 4 MiB.
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024 * 1024;

/// Configuration for one split run.
///
/// Data moves in chunks of `chunk_size` bytes (except possibly the last
/// read and the last write); the engine's working buffer is twice that
/// size. The run works best when the chunk size is much larger than any
/// single record.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Number of output pieces to produce. Must be at least 2.
    pub num_pieces: u64,

    /// Read/write chunk size in bytes.
    pub chunk_size: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            num_pieces: 2,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SplitConfig {
    /// Creates a configuration for the given number of pieces.
    #[must_use]
    pub fn new(num_pieces: u64) -> Self {
        Self {
            num_pieces,
            ..Self::default()
        }
    }

    /// Sets the chunk size.
    #[must_use]
    pub const fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Checks the configuration for contradictions.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidConfig`] if fewer than two pieces
    /// are requested, the chunk size is zero, or the doubled working
    /// buffer would not be addressable.
    pub fn validate(&self) -> SplitResult<()> {
        if self.num_pieces < 2 {
            return Err(SplitError::invalid_config(
                "number of pieces must be greater than 1",
            ));
        }
        if self.chunk_size == 0 {
            return Err(SplitError::invalid_config("chunk size must be non-zero"));
        }
        if self.chunk_size.checked_mul(2).is_none() {
            return Err(SplitError::invalid_config(
                "chunk size overflows the working buffer",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SplitConfig::default();
        assert_eq!(config.num_pieces, 2);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_pattern() {
        let config = SplitConfig::new(8).chunk_size(1024);
        assert_eq!(config.num_pieces, 8);
        assert_eq!(config.chunk_size, 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_single_piece() {
        let config = SplitConfig::new(1);
        assert!(matches!(
            config.validate(),
            Err(SplitError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_zero_chunk_size() {
        let config = SplitConfig::new(2).chunk_size(0);
        assert!(matches!(
            config.validate(),
            Err(SplitError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_unaddressable_buffer() {
        let config = SplitConfig::new(2).chunk_size(usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(SplitError::InvalidConfig { .. })
        ));
    }
}
