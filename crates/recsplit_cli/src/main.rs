//! recsplit CLI
//!
//! Splits a file of records into pieces of roughly equivalent sizes.
//! Each piece contains a whole number of records; no record is ever
//! divided between two pieces. The reference grammar is single-line
//! FASTA (`>IDENTIFIER\n` followed by `SEQUENCE\n`).
//!
//! Pieces are written as `<name>.<number>` into the output directory,
//! where `<name>` defaults to the input file name.

mod report;
mod size;

use clap::Parser;
use recsplit_core::{split, FastaFormat, RecordFormat, SplitConfig};
use recsplit_io::{FilePieceFactory, FileSource};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Split a record-structured file into pieces of roughly equal size.
#[derive(Parser)]
#[command(name = "recsplit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the file to split
    input: PathBuf,

    /// Number of pieces to produce; each becomes a separate file named
    /// "<name>.<number>"
    #[arg(short = 'n', long = "num-pieces", value_name = "N")]
    num_pieces: u64,

    /// Output directory
    #[arg(long = "od", value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Basis for output file names; defaults to the input file name
    #[arg(long = "of", value_name = "NAME")]
    output_name: Option<String>,

    /// Chunk size for reads and writes; accepts B/K/M/G units
    /// (e.g. 512B, 64K, 8M, 1G), bare integers are bytes
    #[arg(long = "cs", value_name = "SIZE", default_value = "4M",
          value_parser = size::parse_chunk_size)]
    chunk_size: u64,

    /// Output format for the run report (text, json)
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let base = match cli.output_name {
        Some(name) => name,
        None => cli
            .input
            .file_name()
            .ok_or("input path has no file name")?
            .to_string_lossy()
            .into_owned(),
    };

    let chunk_size =
        usize::try_from(cli.chunk_size).map_err(|_| "chunk size does not fit in memory")?;
    let config = SplitConfig::new(cli.num_pieces).chunk_size(chunk_size);

    let grammar = FastaFormat;
    let mut source = FileSource::open(&cli.input)?;
    let mut pieces = FilePieceFactory::new(&cli.output_dir, base, cli.num_pieces);

    tracing::debug!(format = grammar.name(), input = %cli.input.display(), "splitting");
    let report = split(&mut source, &mut pieces, &config, &grammar)?;

    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => report::print_text(&report),
    }

    Ok(())
}
