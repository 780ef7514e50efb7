//! Cross-crate integration tests.
//!
//! Drives the full pipeline over both in-memory and file-backed
//! collaborators and checks the record-preserving split contract
//! end to end.

use recsplit_core::{split, FastaFormat, SplitConfig, SplitReport, SplitResult};
use recsplit_io::{FilePieceFactory, FileSource};
use std::fs;
use std::path::Path;

/// Splits `input` through real files in `dir` and returns the report.
///
/// The input is written to `dir/input.fa` first; pieces land next to it
/// as `out.<number>`.
pub fn split_through_files(
    dir: &Path,
    input: &[u8],
    num_pieces: u64,
    chunk_size: usize,
) -> SplitResult<SplitReport> {
    let input_path = dir.join("input.fa");
    fs::write(&input_path, input).expect("Failed to write input fixture");

    let mut source = FileSource::open(&input_path).expect("Failed to open input fixture");
    let mut pieces = FilePieceFactory::new(dir, "out".to_string(), num_pieces);
    let config = SplitConfig::new(num_pieces).chunk_size(chunk_size);
    split(&mut source, &mut pieces, &config, &FastaFormat)
}

/// Reads back the pieces written by [`split_through_files`].
pub fn read_pieces(dir: &Path, report: &SplitReport, num_pieces: u64) -> Vec<Vec<u8>> {
    let naming = FilePieceFactory::new(dir, "out".to_string(), num_pieces);
    report
        .pieces
        .iter()
        .map(|piece| fs::read(naming.piece_path(piece.index)).expect("Failed to read piece file"))
        .collect()
}
