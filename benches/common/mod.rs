use bank_ocr::{AccountNumber, OcrBlock};

/// Rendered blocks for a spread of account numbers.
pub fn sample_blocks() -> Vec<String> {
    [
        "000000000",
        "111111111",
        "123456789",
        "000000051",
        "490067715",
        "345882865",
        "888888888",
        "987654321",
    ]
    .iter()
    .filter_map(|text| AccountNumber::parse(text).ok())
    .map(|account| OcrBlock::render(&account).as_str().to_string())
    .collect()
}
