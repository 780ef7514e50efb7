//! Record grammar policy.
//!
//! The boundary search is agnostic of what a "record" is. It only
//! needs two byte predicates (record start, line terminator) and the
//! number of terminators each record carries. Supporting a different
//! record-structured format means implementing [`RecordFormat`] with
//! different predicates; the search algorithm itself never changes.

/// Byte-level recognition rules for one record grammar.
pub trait RecordFormat {
    /// Short human-readable name of the format, used in help text.
    fn name(&self) -> &'static str;

    /// Returns true if `byte` marks the start of a new record.
    fn is_record_start(&self, byte: u8) -> bool;

    /// Returns true if `byte` is a line terminator.
    fn is_terminator(&self, byte: u8) -> bool;

    /// Number of line terminators each complete record carries.
    fn terminators_per_record(&self) -> u32;
}

/// The reference grammar: simple single-line FASTA.
///
/// ```text
/// >IDENTIFIER\n
/// SEQUENCE\n
/// ```
///
/// Every record starts with `>` and carries exactly two newlines. The
/// marker byte must not occur inside identifiers or sequence data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastaFormat;

impl RecordFormat for FastaFormat {
    fn name(&self) -> &'static str {
        "FASTA"
    }

    fn is_record_start(&self, byte: u8) -> bool {
        byte == b'>'
    }

    fn is_terminator(&self, byte: u8) -> bool {
        byte == b'\n'
    }

    fn terminators_per_record(&self) -> u32 {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fasta_predicates() {
        let format = FastaFormat;
        assert!(format.is_record_start(b'>'));
        assert!(!format.is_record_start(b'A'));
        assert!(format.is_terminator(b'\n'));
        assert!(!format.is_terminator(b'\r'));
        assert_eq!(format.terminators_per_record(), 2);
        assert_eq!(format.name(), "FASTA");
    }
}
