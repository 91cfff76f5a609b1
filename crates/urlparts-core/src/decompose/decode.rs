//! Percent-decoding of the raw URL text.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Decoding knobs (the `[decode]` section in config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Treat `+` as an encoded space (form encoding). An encoded `%2B` always
    /// decodes to a literal `+`.
    pub plus_as_space: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            plus_as_space: true,
        }
    }
}

/// Percent-decodes `raw` as UTF-8.
///
/// Never fails: a `%` not followed by two hex digits is kept verbatim, and
/// escapes that decode to invalid UTF-8 become U+FFFD.
pub fn decode_url<'a>(raw: &'a str, opts: &DecodeOptions) -> Cow<'a, str> {
    if opts.plus_as_space && raw.contains('+') {
        let spaced = raw.replace('+', " ");
        return Cow::Owned(percent_decode_str(&spaced).decode_utf8_lossy().into_owned());
    }
    percent_decode_str(raw).decode_utf8_lossy()
}
