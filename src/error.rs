use std::fmt;

use thiserror::Error;

/// A glyph cell that matched none of the ten known digit patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableGlyph {
    /// Digit position, 0 = most significant.
    pub position: usize,
    /// The 9-character pixel pattern found at that position.
    pub pattern: String,
}

impl fmt::Display for UnreadableGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position {} ({:?})", self.position, self.pattern)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OcrError {
    /// Block or line has the wrong number of characters.
    #[error("malformed OCR input: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Character outside the ' ', '_', '|' pixel alphabet.
    #[error("malformed OCR input: invalid character {found:?} at offset {offset}")]
    InvalidCharacter { offset: usize, found: char },

    /// Multi-line entry with neither 3 nor 4 lines.
    #[error("malformed OCR entry: expected 3 or 4 lines, got {0}")]
    InvalidLineCount(usize),

    /// One line of a multi-line entry is not 27 characters wide.
    #[error("malformed OCR entry: line {line} is {width} characters wide, expected {expected}")]
    InvalidLineWidth {
        line: usize,
        width: usize,
        expected: usize,
    },

    /// The separator row of an entry carries pixels.
    #[error("malformed OCR entry: trailer row is not blank at column {column}")]
    NonBlankTrailer { column: usize },

    /// One or more cells could not be read.
    #[error("unrecognized glyph at {}", join_glyphs(.glyphs))]
    UnrecognizedGlyph { glyphs: Vec<UnreadableGlyph> },

    /// Checksum input that is not exactly nine ASCII digits.
    #[error("malformed account number {input:?}: {reason}")]
    MalformedAccountNumber { input: String, reason: String },
}

impl OcrError {
    /// True for every variant that rejects the raw OCR text before segmentation.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            OcrError::InvalidLength { .. }
                | OcrError::InvalidCharacter { .. }
                | OcrError::InvalidLineCount(_)
                | OcrError::InvalidLineWidth { .. }
                | OcrError::NonBlankTrailer { .. }
        )
    }

    /// Positions of the cells that failed lookup, empty for other errors.
    pub fn unreadable_positions(&self) -> Vec<usize> {
        match self {
            OcrError::UnrecognizedGlyph { glyphs } => glyphs.iter().map(|g| g.position).collect(),
            _ => Vec::new(),
        }
    }
}

fn join_glyphs(glyphs: &[UnreadableGlyph]) -> String {
    glyphs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, OcrError>;
