//! Splits a pixel block into its nine glyph cells

use crate::error::Result;
use crate::models::{
    DIGIT_COUNT, GLYPH_HEIGHT, GLYPH_LEN, GLYPH_WIDTH, GlyphCell, OcrBlock, ROW_WIDTH,
};

/// Cut `block` into 9 cells, position 0 = leftmost (most significant).
///
/// Cell `d` is columns `d*3..d*3+3` of row 1, then of row 2 (+27), then of
/// row 3 (+54).
pub fn segment(block: &OcrBlock) -> [GlyphCell; DIGIT_COUNT] {
    let pixels = block.as_bytes();
    std::array::from_fn(|digit| {
        let mut cell = [b' '; GLYPH_LEN];
        for row in 0..GLYPH_HEIGHT {
            let start = row * ROW_WIDTH + digit * GLYPH_WIDTH;
            cell[row * GLYPH_WIDTH..(row + 1) * GLYPH_WIDTH]
                .copy_from_slice(&pixels[start..start + GLYPH_WIDTH]);
        }
        GlyphCell::from_pixels(cell)
    })
}

/// Validate the 81-character flattened form and segment it.
pub fn segment_str(text: &str) -> Result<[GlyphCell; DIGIT_COUNT]> {
    let block = OcrBlock::parse(text)?;
    Ok(segment(&block))
}
