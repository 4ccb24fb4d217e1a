//! Weighted modulus-11 account number check
use crate::error::Result;
use crate::models::{AccountNumber, DIGIT_COUNT};

const MODULUS: u32 = 11;

/// Weight of each position: 9 for the most significant digit down to 1.
pub const WEIGHTS: [u32; DIGIT_COUNT] = [9, 8, 7, 6, 5, 4, 3, 2, 1];

/// `Σ weight[i] * digit[i]`
pub fn weighted_sum(digits: &[u8; DIGIT_COUNT]) -> u32 {
    digits
        .iter()
        .zip(WEIGHTS)
        .map(|(&digit, weight)| weight * digit as u32)
        .sum()
}

pub fn is_valid_digits(digits: &[u8; DIGIT_COUNT]) -> bool {
    weighted_sum(digits) % MODULUS == 0
}

/// Check a 9-digit string.
///
/// Returns `Ok(false)` for a well-formed number that fails the check and
/// `Err(MalformedAccountNumber)` when the input is not nine ASCII digits.
pub fn is_valid(account_number: &str) -> Result<bool> {
    Ok(AccountNumber::parse(account_number)?.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OcrError;

    #[test]
    fn test_weighted_sum() {
        assert_eq!(weighted_sum(&[0; 9]), 0);
        assert_eq!(weighted_sum(&[1; 9]), 45);
        assert_eq!(weighted_sum(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 165);
        assert_eq!(weighted_sum(&[0, 0, 0, 0, 0, 0, 0, 5, 1]), 11);
    }

    #[test]
    fn test_is_valid() {
        assert_eq!(is_valid("000000000"), Ok(true));
        assert_eq!(is_valid("111111111"), Ok(false));
        assert_eq!(is_valid("123456789"), Ok(true));
        assert_eq!(is_valid("000000051"), Ok(true));
        assert_eq!(is_valid("490067715"), Ok(false));
        assert_eq!(is_valid("345882865"), Ok(true));
    }

    #[test]
    fn test_weights_are_not_reversed() {
        // 100000002: 9*1 + 1*2 = 11, reversed weights would give 1 + 18 = 19.
        assert_eq!(is_valid("100000002"), Ok(true));
        assert_eq!(is_valid("200000001"), Ok(false));
    }

    #[test]
    fn test_malformed_is_not_false() {
        assert!(matches!(
            is_valid("12345678"),
            Err(OcrError::MalformedAccountNumber { .. })
        ));
        assert!(matches!(
            is_valid("12345678?"),
            Err(OcrError::MalformedAccountNumber { .. })
        ));
    }
}
