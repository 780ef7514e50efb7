//! Human-readable run report.

use recsplit_core::SplitReport;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Prints a per-piece size summary to stdout.
pub fn print_text(report: &SplitReport) {
    for piece in &report.pieces {
        println!("Piece {} written. Size: {}", piece.index + 1, human_size(piece.bytes));
    }
    println!(
        "{} pieces, {} total",
        report.pieces.len(),
        human_size(report.total_bytes)
    );
}

/// Formats a byte count with a G/M/K unit where one applies.
fn human_size(bytes: u64) -> String {
    let (divisor, unit) = if bytes >= GIB {
        (GIB, 'G')
    } else if bytes >= MIB {
        (MIB, 'M')
    } else if bytes >= KIB {
        (KIB, 'K')
    } else {
        return format!("{bytes} bytes");
    };

    let value = bytes as f64 / divisor as f64;
    format!("{value:.1}{unit} ({bytes} bytes)")
}
