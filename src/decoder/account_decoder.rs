use tracing::{debug, trace};

use super::config::DecoderConfig;
use super::segment::segment;
use super::tables::GlyphTable;
use crate::error::{OcrError, Result, UnreadableGlyph};
use crate::models::{AccountNumber, DIGIT_COUNT, DecodedAccount, OcrBlock};

/// Turns OCR blocks into account numbers with their checksum outcome.
///
/// Decoding is pure; one decoder can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountDecoder {
    config: DecoderConfig,
}

impl AccountDecoder {
    /// Create a decoder with environment-derived settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode the 81-character flattened block.
    pub fn decode(&self, text: &str) -> Result<DecodedAccount> {
        let block = OcrBlock::parse(text)?;
        self.decode_block(&block)
    }

    /// Decode a stored entry given as 3 or 4 lines.
    pub fn decode_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<DecodedAccount> {
        let block = OcrBlock::from_lines(lines, self.config.strict_trailer)?;
        self.decode_block(&block)
    }

    /// Decode the 108-character flattened entry (pixel rows + trailer).
    pub fn decode_entry(&self, text: &str) -> Result<DecodedAccount> {
        let block = OcrBlock::from_entry(text, self.config.strict_trailer)?;
        self.decode_block(&block)
    }

    /// Resolve every cell of an already validated block.
    ///
    /// All unreadable positions are collected before failing so callers can
    /// point at each one.
    pub fn decode_block(&self, block: &OcrBlock) -> Result<DecodedAccount> {
        let cells = segment(block);
        let mut digits = [0u8; DIGIT_COUNT];
        let mut unreadable = Vec::new();

        for (position, cell) in cells.iter().enumerate() {
            match GlyphTable::lookup_cell(cell) {
                Some(digit) => {
                    trace!(position, digit, "resolved glyph");
                    digits[position] = digit;
                }
                None => {
                    debug!(position, pattern = cell.as_str(), "unrecognized glyph");
                    unreadable.push(UnreadableGlyph {
                        position,
                        pattern: cell.as_str().to_string(),
                    });
                }
            }
        }

        if !unreadable.is_empty() {
            return Err(OcrError::UnrecognizedGlyph { glyphs: unreadable });
        }

        let decoded = DecodedAccount::new(AccountNumber::from_table_digits(digits));
        debug!(account = %decoded.number, valid = decoded.valid, "decoded account number");
        Ok(decoded)
    }
}
