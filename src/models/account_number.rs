use std::fmt;
use std::str::FromStr;

use super::DIGIT_COUNT;
use crate::decoder::checksum;
use crate::error::{OcrError, Result};

/// Nine-digit account number, most significant digit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountNumber {
    digits: [u8; DIGIT_COUNT],
}

impl AccountNumber {
    /// Parse exactly nine ASCII digits.
    pub fn parse(text: &str) -> Result<Self> {
        let malformed = |reason: String| OcrError::MalformedAccountNumber {
            input: text.to_string(),
            reason,
        };

        let actual = text.chars().count();
        if actual != DIGIT_COUNT {
            return Err(malformed(format!(
                "expected {} digits, got {} characters",
                DIGIT_COUNT, actual
            )));
        }

        let mut digits = [0u8; DIGIT_COUNT];
        for (position, ch) in text.chars().enumerate() {
            let value = ch.to_digit(10).ok_or_else(|| {
                malformed(format!("{:?} at position {} is not a digit", ch, position))
            })?;
            digits[position] = value as u8;
        }
        Ok(Self { digits })
    }

    /// Build from digit values (each 0..=9).
    pub fn from_digits(digits: [u8; DIGIT_COUNT]) -> Option<Self> {
        if digits.iter().all(|&d| d <= 9) {
            Some(Self { digits })
        } else {
            None
        }
    }

    /// Digits produced by glyph table lookup are always in range.
    pub(crate) fn from_table_digits(digits: [u8; DIGIT_COUNT]) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 9));
        Self { digits }
    }

    /// Digit values, position 0 = most significant.
    pub fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.digits
    }

    /// Weighted sum used by the modulus-11 check.
    pub fn checksum(&self) -> u32 {
        checksum::weighted_sum(&self.digits)
    }

    /// Whether the weighted sum is divisible by 11.
    pub fn is_valid(&self) -> bool {
        checksum::is_valid_digits(&self.digits)
    }
}

impl FromStr for AccountNumber {
    type Err = OcrError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Result of decoding one OCR block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedAccount {
    /// The nine decoded digits
    pub number: AccountNumber,
    /// Checksum outcome; `false` is a normal result, not an error
    pub valid: bool,
}

impl DecodedAccount {
    pub(crate) fn new(number: AccountNumber) -> Self {
        Self {
            valid: number.is_valid(),
            number,
        }
    }

    /// The account number as a 9-character string.
    pub fn account_number(&self) -> String {
        self.number.to_string()
    }
}

impl fmt::Display for DecodedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{} ERR", self.number)
        }
    }
}
