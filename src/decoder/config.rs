use std::sync::OnceLock;

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static STRICT_TRAILER: OnceLock<bool> = OnceLock::new();

/// `OCR_STRICT_TRAILER`: require the 4th line of an entry to be blank.
pub(crate) fn strict_trailer() -> bool {
    *STRICT_TRAILER.get_or_init(|| parse_env_bool_u8("OCR_STRICT_TRAILER", true))
}

/// Decoder tunables. `Default` reads the environment once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Reject entries whose separator row carries pixels
    pub strict_trailer: bool,
}

impl DecoderConfig {
    /// Accept any pixel characters in the separator row.
    pub fn lenient() -> Self {
        Self {
            strict_trailer: false,
        }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            strict_trailer: strict_trailer(),
        }
    }
}
