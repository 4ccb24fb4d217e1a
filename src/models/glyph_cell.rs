use std::fmt;

/// Columns per glyph
pub const GLYPH_WIDTH: usize = 3;
/// Pixel rows per glyph
pub const GLYPH_HEIGHT: usize = 3;
/// Characters in a flattened glyph pattern
pub const GLYPH_LEN: usize = GLYPH_WIDTH * GLYPH_HEIGHT;

/// 3x3 pixel pattern for one digit position, flattened row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphCell {
    pixels: [u8; GLYPH_LEN],
}

impl GlyphCell {
    /// Pixels must come from a validated block.
    pub(crate) fn from_pixels(pixels: [u8; GLYPH_LEN]) -> Self {
        Self { pixels }
    }

    /// The 9-character pattern, e.g. `" _ | ||_|"` for zero.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.pixels).unwrap_or_default()
    }

    /// One 3-character row (0..3). Out of range rows are empty.
    pub fn row(&self, row: usize) -> &str {
        if row >= GLYPH_HEIGHT {
            return "";
        }
        &self.as_str()[row * GLYPH_WIDTH..(row + 1) * GLYPH_WIDTH]
    }
}

impl fmt::Display for GlyphCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.row(0), self.row(1), self.row(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rows() {
        let cell = GlyphCell::from_pixels(*b" _ |_||_|");
        assert_eq!(cell.as_str(), " _ |_||_|");
        assert_eq!(cell.row(0), " _ ");
        assert_eq!(cell.row(1), "|_|");
        assert_eq!(cell.row(2), "|_|");
        assert_eq!(cell.row(3), "");
        assert_eq!(cell.to_string(), " _ \n|_|\n|_|");
    }
}
