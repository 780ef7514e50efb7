//! FASTA fixtures and split helpers.
//!
//! Provides convenience functions for building single-line FASTA
//! inputs and running splits against in-memory collaborators.

use recsplit_core::{split, FastaFormat, SplitConfig, SplitResult};
use recsplit_io::{MemoryPieceFactory, MemorySource};

/// Builds one single-line FASTA record.
pub fn record(id: &str, seq: &str) -> Vec<u8> {
    format!(">{id}\n{seq}\n").into_bytes()
}

/// Builds an input of `n` records with distinct identifiers and
/// mildly varying sequence lengths.
pub fn fasta_of(n: usize) -> Vec<u8> {
    let mut input = Vec::new();
    for i in 0..n {
        let seq = "ACGT".repeat(1 + i % 5);
        input.extend_from_slice(&record(&format!("seq{i}"), &seq));
    }
    input
}

/// Runs a split over an in-memory source and collects the pieces.
pub fn split_in_memory(input: &[u8], num_pieces: u64, chunk_size: usize) -> SplitResult<Vec<Vec<u8>>> {
    let mut source = MemorySource::with_data(input.to_vec());
    let mut pieces = MemoryPieceFactory::new();
    let config = SplitConfig::new(num_pieces).chunk_size(chunk_size);
    split(&mut source, &mut pieces, &config, &FastaFormat)?;
    Ok(pieces.pieces())
}

/// Asserts that `pieces` is a clean split of `input`.
///
/// Clean means lossless (the pieces concatenate back to the input) and
/// record-preserving (every piece after the first starts on a record
/// marker, every piece before the last ends on a record terminator).
pub fn assert_clean_split(input: &[u8], pieces: &[Vec<u8>]) {
    let rejoined: Vec<u8> = pieces.concat();
    assert_eq!(
        rejoined, input,
        "pieces must concatenate back to the original input"
    );

    for (i, piece) in pieces.iter().enumerate() {
        assert!(!piece.is_empty(), "piece {i} is empty");
        if i > 0 {
            assert_eq!(piece[0], b'>', "piece {i} does not start on a record");
        }
        if i + 1 < pieces.len() {
            assert_eq!(
                *piece.last().expect("piece is non-empty"),
                b'\n',
                "piece {i} does not end on a record terminator"
            );
        }
    }
}
