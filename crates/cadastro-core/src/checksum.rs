//! # Weighted Modulo-11 Check Digits
//!
//! Both CPF and CNPJ append two check digits computed the same way:
//!
//! ```text
//! total     = Σ digit[i] * weight[i]
//! remainder = total mod 11
//! digit     = 0            if remainder < 2
//!           = 11 - remainder otherwise
//! ```
//!
//! The first pass runs over the body; the second over the body plus the
//! first check digit, with a weight table one element longer. Remainders 0
//! and 1 both clamp to `0`.

use serde::Serialize;

/// CPF weights for the first check digit (9 body digits).
pub const CPF_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CPF weights for the second check digit (body + first check digit).
pub const CPF_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ weights for the first check digit (12 body digits).
pub const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ weights for the second check digit (body + first check digit).
pub const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute one check digit from `digits` and the positional `weights`.
///
/// Digits and weights are paired positionally; any surplus on either side
/// is ignored.
pub fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let total: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&digit, &weight)| u32::from(digit) * weight)
        .sum();
    let remainder = total % 11;
    if remainder < 2 {
        0
    } else {
        // remainder in 2..=10, so the result is a single digit.
        (11 - remainder) as u8
    }
}

/// The pair of check digits that terminates a CPF or CNPJ.
///
/// Each digit is in `0..=9`. Values come from [`check_digit`] or the checked
/// [`CheckDigits::new`]; there is no deserializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CheckDigits {
    pub(crate) first: u8,
    pub(crate) second: u8,
}

impl CheckDigits {
    /// Pair two decimal digits, or `None` if either is above 9.
    pub fn new(first: u8, second: u8) -> Option<Self> {
        (first <= 9 && second <= 9).then_some(Self { first, second })
    }

    /// First check digit (position 10 of a CPF, 13 of a CNPJ).
    pub fn first(&self) -> u8 {
        self.first
    }

    /// Second check digit (the final position).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Both digits as decimal characters, for comparison against the
    /// trailing characters of a normalized identifier.
    pub fn as_chars(&self) -> (char, char) {
        (digit_char(self.first), digit_char(self.second))
    }
}

impl std::fmt::Display for CheckDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

// Out-of-range digits map to U+FFFD, which never equals an input digit.
fn digit_char(d: u8) -> char {
    char::from_digit(u32::from(d), 10).unwrap_or(char::REPLACEMENT_CHARACTER)
}
