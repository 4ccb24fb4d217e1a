use crate::models::{GLYPH_LEN, GlyphCell};

// Index: digit value. Each pattern is top row + middle row + bottom row.
const GLYPH_PATTERNS: [&str; 10] = [
    " _ | ||_|", // 0
    "     |  |", // 1
    " _  _||_ ", // 2
    " _  _| _|", // 3
    "   |_|  |", // 4
    " _ |_  _|", // 5
    " _ |_ |_|", // 6
    " _   |  |", // 7
    " _ |_||_|", // 8
    " _ |_| _|", // 9
];

/// Static pattern-to-digit table for the ten canonical glyphs.
pub struct GlyphTable;

impl GlyphTable {
    /// Digit value for a 9-character pattern, or `None` if no glyph matches.
    pub fn lookup(pattern: &str) -> Option<u8> {
        if pattern.len() != GLYPH_LEN {
            return None;
        }
        GLYPH_PATTERNS
            .iter()
            .position(|&known| known == pattern)
            .map(|digit| digit as u8)
    }

    /// Digit character for a pattern ('0'..='9').
    pub fn lookup_char(pattern: &str) -> Option<char> {
        Self::lookup(pattern).map(|digit| char::from(b'0' + digit))
    }

    pub fn lookup_cell(cell: &GlyphCell) -> Option<u8> {
        Self::lookup(cell.as_str())
    }

    /// Canonical pattern for a digit value.
    pub fn pattern(digit: u8) -> Option<&'static str> {
        GLYPH_PATTERNS.get(digit as usize).copied()
    }

    /// All `(pattern, digit)` pairs in digit order.
    pub fn entries() -> impl Iterator<Item = (&'static str, u8)> {
        GLYPH_PATTERNS
            .iter()
            .enumerate()
            .map(|(digit, &pattern)| (pattern, digit as u8))
    }
}
