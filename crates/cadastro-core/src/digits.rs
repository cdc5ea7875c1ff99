//! # Digit Handling
//!
//! The first stages of the pipeline: strip punctuation, guard against
//! repeated-digit runs, and turn the cleaned string into numeric digits.
//!
//! Only ASCII `0-9` count as digits. Other Unicode decimal digits (e.g.
//! Arabic-Indic) are stripped like any other punctuation.

/// Strip every character that is not an ASCII decimal digit.
///
/// Never fails. Empty or fully non-numeric input yields `""`, which the
/// length check downstream rejects.
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Returns `true` if every character equals the first one.
///
/// Sequences such as `"00000000000"` or `"99999999999999"` satisfy the
/// modulo-11 check by construction but are never issued. The empty string
/// is vacuously a repeated sequence.
pub fn is_repeated_sequence(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => true,
    }
}

/// Convert a digit string into its numeric digits, in order.
///
/// Characters that are not decimal digits are skipped rather than aborting
/// the conversion.
pub fn to_digits(digits: &str) -> Vec<u8> {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}
