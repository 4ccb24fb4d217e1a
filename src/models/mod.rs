pub mod account_number;
pub mod glyph_cell;
pub mod ocr_block;

pub use account_number::{AccountNumber, DecodedAccount};
pub use glyph_cell::{GLYPH_HEIGHT, GLYPH_LEN, GLYPH_WIDTH, GlyphCell};
pub use ocr_block::{BLOCK_LEN, DIGIT_COUNT, ENTRY_LEN, ENTRY_LINES, OcrBlock, ROW_WIDTH, is_pixel};
