//! bank_ocr - account number OCR decoding
//!
//! Reads nine-digit bank account numbers drawn as 3x3 ASCII-art glyphs made of
//! `' '`, `'_'` and `'|'`, and validates them with a weighted modulus-11
//! checksum.
//!
//! ```
//! let block = concat!(
//!     "    _  _     _  _  _  _  _ ",
//!     "  | _| _||_||_ |_   ||_||_|",
//!     "  ||_  _|  | _||_|  ||_| _|",
//! );
//! let decoded = bank_ocr::decode(block).unwrap();
//! assert_eq!(decoded.account_number(), "123456789");
//! assert!(decoded.valid);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Glyph lookup, segmentation, checksum and the decoding pipeline
pub mod decoder;
/// Error types shared across the crate
#[allow(missing_docs)]
pub mod error;
/// Core data structures (OcrBlock, GlyphCell, AccountNumber)
#[allow(missing_docs)]
pub mod models;

pub use decoder::{AccountDecoder, DecoderConfig, GlyphTable};
pub use error::{OcrError, Result, UnreadableGlyph};
pub use models::{AccountNumber, DecodedAccount, GlyphCell, OcrBlock};

/// Decode an 81-character OCR block (three concatenated 27-column rows)
///
/// # Returns
/// The nine digits and their checksum outcome. A failed checksum is
/// `Ok` with `valid == false`.
///
/// # Errors
/// * malformed input (length other than 81, foreign characters)
/// * [`OcrError::UnrecognizedGlyph`] listing every unreadable position
pub fn decode(block: &str) -> Result<DecodedAccount> {
    AccountDecoder::new().decode(block)
}

/// Check a 9-digit account number string against the modulus-11 checksum
///
/// Input that is not nine ASCII digits is an error, never `Ok(false)`.
pub fn is_valid(account_number: &str) -> Result<bool> {
    decoder::checksum::is_valid(account_number)
}
