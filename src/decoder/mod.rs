//! Account number decoding
//!
//! This module contains all the logic for turning a pixel block into digits:
//! - Glyph table lookup
//! - Segmentation of a block into glyph cells
//! - Weighted modulus-11 checksum
//! - The decoder that orchestrates the pipeline

/// Decoder that orchestrates segmentation, lookup and checksum
pub mod account_decoder;
/// Weighted modulus-11 checksum
pub mod checksum;
pub mod config;
/// Block segmentation into 3x3 glyph cells
pub mod segment;
/// Static glyph pattern table
pub mod tables;

pub use account_decoder::AccountDecoder;
pub use config::DecoderConfig;
pub use tables::GlyphTable;
