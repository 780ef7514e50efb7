//! Chunk size argument parsing.

/// Parses a chunk size with an optional B/K/M/G unit suffix.
///
/// Bare integers are bytes. Leading signs are rejected, as are values
/// whose doubled working buffer would overflow.
pub fn parse_chunk_size(raw: &str) -> Result<u64, String> {
    let raw = raw.trim();

    let (digits, shift) = match raw.chars().last() {
        Some(c) if c.is_ascii_digit() => (raw, 0u32),
        Some('b' | 'B') => (&raw[..raw.len() - 1], 0),
        Some('k' | 'K') => (&raw[..raw.len() - 1], 10),
        Some('m' | 'M') => (&raw[..raw.len() - 1], 20),
        Some('g' | 'G') => (&raw[..raw.len() - 1], 30),
        Some(other) => return Err(format!("unexpected units identifier {other:?}")),
        None => return Err("an integer with optional B/K/M/G units is expected".into()),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("an integer with optional B/K/M/G units is expected".into());
    }

    let value: u64 = digits
        .parse()
        .map_err(|_| "chunk size is out of range".to_string())?;

    if value == 0 {
        return Err("chunk size must be greater than zero".into());
    }

    // The engine allocates a buffer of double chunk size.
    value
        .checked_shl(shift)
        .filter(|scaled| scaled >> shift == value && *scaled <= u64::MAX / 2)
        .ok_or_else(|| format!("chunk size is too big; maximum is {} bytes", u64::MAX / 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_integer_is_bytes() {
        assert_eq!(parse_chunk_size("4096").unwrap(), 4096);
    }

    #[test]
    fn unit_suffixes() {
        assert_eq!(parse_chunk_size("512B").unwrap(), 512);
        assert_eq!(parse_chunk_size("512b").unwrap(), 512);
        assert_eq!(parse_chunk_size("4K").unwrap(), 4096);
        assert_eq!(parse_chunk_size("4M").unwrap(), 4 * 1024 * 1024);
        assert_eq!(parse_chunk_size("1g").unwrap(), 1024 * 1024 * 1024);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_chunk_size("").is_err());
        assert!(parse_chunk_size("M").is_err());
        assert!(parse_chunk_size("4X").is_err());
        assert!(parse_chunk_size("4.5M").is_err());
        assert!(parse_chunk_size("-4M").is_err());
        assert!(parse_chunk_size("+4M").is_err());
    }

    #[test]
    fn rejects_zero() {
        assert!(parse_chunk_size("0").is_err());
        assert!(parse_chunk_size("0K").is_err());
    }

    #[test]
    fn rejects_overflowing_double_buffer() {
        assert!(parse_chunk_size(&u64::MAX.to_string()).is_err());
        assert!(parse_chunk_size("17179869184G").is_err());
    }
}
