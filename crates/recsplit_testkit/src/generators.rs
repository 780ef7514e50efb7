//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random single-line FASTA inputs
//! and split configurations.

use proptest::prelude::*;

/// Strategy for generating valid record identifiers.
pub fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_.|-]{0,24}").expect("Invalid regex")
}

/// Strategy for generating sequence lines.
///
/// Sequences never contain `>` or `\n`, so a generated input is always
/// a well-formed single-line FASTA stream.
pub fn sequence_strategy(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['A', 'C', 'G', 'T', 'N']), 1..=max_len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for generating one complete record.
pub fn record_strategy(max_seq_len: usize) -> impl Strategy<Value = Vec<u8>> {
    (identifier_strategy(), sequence_strategy(max_seq_len))
        .prop_map(|(id, seq)| format!(">{id}\n{seq}\n").into_bytes())
}

/// Strategy for generating a whole input of 1 to `max_records` records.
pub fn fasta_input_strategy(max_records: usize, max_seq_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(record_strategy(max_seq_len), 1..=max_records)
        .prop_map(|records| records.concat())
}

/// Proptest configuration for quick local runs.
pub fn quick_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    }
}

/// Proptest configuration for thorough runs.
pub fn thorough_config() -> ProptestConfig {
    ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(quick_config())]

        #[test]
        fn generated_inputs_are_well_formed(input in fasta_input_strategy(8, 32)) {
            prop_assert_eq!(input[0], b'>');
            prop_assert_eq!(*input.last().unwrap(), b'\n');
            // Every marker opens a line.
            for (i, &b) in input.iter().enumerate() {
                if b == b'>' {
                    prop_assert!(i == 0 || input[i - 1] == b'\n');
                }
            }
        }
    }
}
