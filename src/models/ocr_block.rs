use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::{AccountNumber, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::decoder::tables::GlyphTable;
use crate::error::{OcrError, Result};

/// Digits per account number
pub const DIGIT_COUNT: usize = 9;
/// Columns in one pixel row (9 glyphs x 3 columns)
pub const ROW_WIDTH: usize = DIGIT_COUNT * GLYPH_WIDTH;
/// Characters in a flattened block (3 pixel rows)
pub const BLOCK_LEN: usize = ROW_WIDTH * GLYPH_HEIGHT;
/// Lines in a stored entry: 3 pixel rows plus a blank trailer
pub const ENTRY_LINES: usize = GLYPH_HEIGHT + 1;
/// Characters in a flattened entry including its trailer row
pub const ENTRY_LEN: usize = ROW_WIDTH * ENTRY_LINES;

/// Whether `ch` belongs to the pixel alphabet.
pub fn is_pixel(ch: char) -> bool {
    matches!(ch, ' ' | '_' | '|')
}

/// Validated 3x27 pixel block, stored row-major.
///
/// Every byte is one of `b' '`, `b'_'` or `b'|'`, so the block can always be
/// viewed as a `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OcrBlock {
    pixels: [u8; BLOCK_LEN],
}

impl OcrBlock {
    /// Parse the 81-character flattened form (row 1, row 2, row 3).
    pub fn parse(text: &str) -> Result<Self> {
        let actual = text.chars().count();
        if actual != BLOCK_LEN {
            debug!(expected = BLOCK_LEN, actual, "rejecting OCR block with bad length");
            return Err(OcrError::InvalidLength {
                expected: BLOCK_LEN,
                actual,
            });
        }

        let mut pixels = [b' '; BLOCK_LEN];
        for (offset, ch) in text.chars().enumerate() {
            pixels[offset] = pixel_byte(ch, offset)?;
        }
        Ok(Self { pixels })
    }

    /// Build a block from the lines of one stored entry.
    ///
    /// Accepts the three pixel rows alone or followed by the trailer row.
    /// With `strict_trailer` the trailer must be blank.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], strict_trailer: bool) -> Result<Self> {
        if lines.len() != GLYPH_HEIGHT && lines.len() != ENTRY_LINES {
            debug!(lines = lines.len(), "rejecting OCR entry with bad line count");
            return Err(OcrError::InvalidLineCount(lines.len()));
        }

        let mut pixels = [b' '; BLOCK_LEN];
        for (line, text) in lines.iter().enumerate() {
            let text = text.as_ref();
            let width = text.chars().count();
            if width != ROW_WIDTH {
                debug!(line, width, "rejecting OCR entry with bad line width");
                return Err(OcrError::InvalidLineWidth {
                    line,
                    width,
                    expected: ROW_WIDTH,
                });
            }

            for (column, ch) in text.chars().enumerate() {
                let offset = line * ROW_WIDTH + column;
                let byte = pixel_byte(ch, offset)?;
                if line < GLYPH_HEIGHT {
                    pixels[offset] = byte;
                } else if strict_trailer && byte != b' ' {
                    debug!(column, "rejecting OCR entry with non-blank trailer");
                    return Err(OcrError::NonBlankTrailer { column });
                }
            }
        }
        Ok(Self { pixels })
    }

    /// Parse the 108-character flattened entry (3 pixel rows + trailer row).
    pub fn from_entry(text: &str, strict_trailer: bool) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != ENTRY_LEN {
            debug!(
                expected = ENTRY_LEN,
                actual = chars.len(),
                "rejecting OCR entry with bad length"
            );
            return Err(OcrError::InvalidLength {
                expected: ENTRY_LEN,
                actual: chars.len(),
            });
        }

        let lines: Vec<String> = chars
            .chunks(ROW_WIDTH)
            .map(|row| row.iter().collect())
            .collect();
        Self::from_lines(&lines, strict_trailer)
    }

    /// Draw the canonical glyphs of `account`.
    pub fn render(account: &AccountNumber) -> Self {
        let mut pixels = [b' '; BLOCK_LEN];
        for (position, &digit) in account.digits().iter().enumerate() {
            let pattern = GlyphTable::pattern(digit).unwrap_or("         ").as_bytes();
            for row in 0..GLYPH_HEIGHT {
                let dst = row * ROW_WIDTH + position * GLYPH_WIDTH;
                let src = row * GLYPH_WIDTH;
                pixels[dst..dst + GLYPH_WIDTH].copy_from_slice(&pattern[src..src + GLYPH_WIDTH]);
            }
        }
        Self { pixels }
    }

    /// The flattened 81-character form.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.pixels).unwrap_or_default()
    }

    /// One 27-character pixel row (0..3). Out of range rows are empty.
    pub fn row(&self, row: usize) -> &str {
        if row >= GLYPH_HEIGHT {
            return "";
        }
        &self.as_str()[row * ROW_WIDTH..(row + 1) * ROW_WIDTH]
    }

    /// Raw pixel bytes, row-major.
    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.pixels
    }
}

fn pixel_byte(ch: char, offset: usize) -> Result<u8> {
    if is_pixel(ch) {
        Ok(ch as u8)
    } else {
        debug!(offset, found = ?ch, "rejecting character outside pixel alphabet");
        Err(OcrError::InvalidCharacter { offset, found: ch })
    }
}

impl FromStr for OcrBlock {
    type Err = OcrError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for OcrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GLYPH_HEIGHT {
            if row > 0 {
                writeln!(f)?;
            }
            f.write_str(self.row(row))?;
        }
        Ok(())
    }
}
