//! Integration tests for account number decoding
//!
//! These tests pin the decoded digits and checksum outcome for the reference
//! entries, and the error classes callers branch on.

use bank_ocr::{AccountDecoder, DecoderConfig, OcrError, decode, is_valid};
use rayon::prelude::*;

const TRAILER: &str = "                           ";

/// Reference entries: expected number, then the three pixel rows.
const CASES: [(&str, [&str; 3]); 4] = [
    (
        "000000000",
        [
            " _  _  _  _  _  _  _  _  _ ",
            "| || || || || || || || || |",
            "|_||_||_||_||_||_||_||_||_|",
        ],
    ),
    (
        "111111111",
        [
            "                           ",
            "  |  |  |  |  |  |  |  |  |",
            "  |  |  |  |  |  |  |  |  |",
        ],
    ),
    (
        "123456789",
        [
            "    _  _     _  _  _  _  _ ",
            "  | _| _||_||_ |_   ||_||_|",
            "  ||_  _|  | _||_|  ||_| _|",
        ],
    ),
    (
        "000000051",
        [
            " _  _  _  _  _  _  _  _    ",
            "| || || || || || || ||_   |",
            "|_||_||_||_||_||_||_| _|  |",
        ],
    ),
];

fn block(expected: &str) -> String {
    let (_, rows) = CASES
        .iter()
        .find(|(number, _)| *number == expected)
        .expect("unknown fixture");
    rows.concat()
}

#[test]
fn test_all_zeros_is_valid() {
    let decoded = decode(&block("000000000")).unwrap();
    assert_eq!(decoded.account_number(), "000000000");
    assert!(decoded.valid);
}

#[test]
fn test_all_ones_fails_checksum() {
    let decoded = decode(&block("111111111")).unwrap();
    assert_eq!(decoded.account_number(), "111111111");
    assert!(!decoded.valid, "45 mod 11 = 1, should be invalid");
}

#[test]
fn test_ascending_digits_are_valid() {
    let decoded = decode(&block("123456789")).unwrap();
    assert_eq!(decoded.account_number(), "123456789");
    assert!(decoded.valid);
    assert_eq!(decoded.number.checksum(), 165);
}

#[test]
fn test_trailing_five_one_is_valid() {
    let decoded = decode(&block("000000051")).unwrap();
    assert_eq!(decoded.account_number(), "000000051");
    assert!(decoded.valid);
    assert_eq!(decoded.number.checksum(), 11);
}

#[test]
fn test_decoded_number_always_has_nine_digits() {
    for (expected, rows) in CASES {
        let decoded = decode(&rows.concat()).unwrap();
        let text = decoded.account_number();
        assert_eq!(text.len(), 9);
        assert!(text.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(text, expected);
    }
}

#[test]
fn test_entry_format_with_trailer() {
    let decoder = AccountDecoder::new();
    for (expected, rows) in CASES {
        let entry = format!("{}{}", rows.concat(), TRAILER);
        assert_eq!(entry.len(), 108);
        let decoded = decoder.decode_entry(&entry).unwrap();
        assert_eq!(decoded.account_number(), expected);

        let lines = [rows[0], rows[1], rows[2], TRAILER];
        assert_eq!(decoder.decode_lines(&lines).unwrap(), decoded);
    }
}

#[test]
fn test_entry_is_not_accepted_as_block() {
    let entry = format!("{}{}", block("123456789"), TRAILER);
    assert_eq!(
        decode(&entry),
        Err(OcrError::InvalidLength {
            expected: 81,
            actual: 108
        })
    );
}

#[test]
fn test_off_by_one_lengths_are_malformed() {
    let full = block("123456789");
    let short = &full[..80];
    let long = format!("{} ", full);

    for input in [short, long.as_str()] {
        let err = decode(input).unwrap_err();
        assert!(err.is_malformed_input(), "{:?}", err);
        assert!(err.unreadable_positions().is_empty());
    }
}

#[test]
fn test_foreign_character_is_malformed() {
    let mut text = block("000000000");
    text.replace_range(40..41, "#");
    assert_eq!(
        decode(&text),
        Err(OcrError::InvalidCharacter {
            offset: 40,
            found: '#'
        })
    );
}

#[test]
fn test_unrecognized_glyph_is_distinct_from_checksum_failure() {
    // Drop the bottom stroke of the leading zero: " _ | |   " is not a digit.
    let mut text = block("000000000");
    text.replace_range(54..57, "   ");
    let err = decode(&text).unwrap_err();
    assert!(!err.is_malformed_input());
    assert_eq!(err.unreadable_positions(), vec![0]);
    match err {
        OcrError::UnrecognizedGlyph { glyphs } => {
            assert_eq!(glyphs.len(), 1);
            assert_eq!(glyphs[0].pattern, " _ | |   ");
        }
        other => panic!("expected UnrecognizedGlyph, got {other:?}"),
    }
}

#[test]
fn test_decode_is_deterministic() {
    let text = block("123456789");
    let first = decode(&text).unwrap();
    for _ in 0..10 {
        assert_eq!(decode(&text).unwrap(), first);
    }
}

#[test]
fn test_parallel_decodes_share_the_table() {
    let decoder = AccountDecoder::with_config(DecoderConfig::lenient());
    let results: Vec<_> = (0..256)
        .into_par_iter()
        .map(|i| {
            let (expected, rows) = CASES[i % CASES.len()];
            (expected, decoder.decode(&rows.concat()))
        })
        .collect();

    for (expected, result) in results {
        assert_eq!(result.unwrap().account_number(), expected);
    }
}

#[test]
fn test_checksum_entry_point() {
    assert_eq!(is_valid("000000000"), Ok(true));
    assert_eq!(is_valid("111111111"), Ok(false));
    assert_eq!(is_valid("123456789"), Ok(true));
    assert_eq!(is_valid("000000051"), Ok(true));
    assert!(matches!(
        is_valid("00000005"),
        Err(OcrError::MalformedAccountNumber { .. })
    ));
}
