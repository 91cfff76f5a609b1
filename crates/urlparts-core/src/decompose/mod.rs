//! URL decomposition.
//!
//! Turns one raw URL into scheme, domain, path, fragment and query parameters.
//! Scheme, fragment and query are cut from the percent-decoded text with plain
//! delimiter splitting; domain and path come from URL parsing of the original,
//! undecoded text. Malformed input never fails, it just leaves fields empty.
//!
//! Decoding happens before splitting, so an escaped `&`, `=`, `?` or `#`
//! inside a value acts as a delimiter once decoded.

mod authority;
mod decode;
mod query;
mod split;

pub use authority::{host_and_path, Authority};
pub use decode::{decode_url, DecodeOptions};
pub use query::parse_query;
pub use split::{split_decoded, DecodedParts};

use crate::record::QueryParam;

/// The structural pieces of one URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecomposedUrl {
    pub scheme: Option<String>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub fragment: Option<String>,
    pub query_params: Vec<QueryParam>,
}

/// Decomposes `raw_url` with default decoding.
///
/// # Examples
///
/// - `decompose("https://a.com/p?a=1#f")` → scheme `https`, domain `a.com`,
///   path `/p`, fragment `f`, params `[a=1]`
/// - `decompose("a.com")` → everything empty
pub fn decompose(raw_url: &str) -> DecomposedUrl {
    decompose_with(raw_url, &DecodeOptions::default())
}

pub fn decompose_with(raw_url: &str, opts: &DecodeOptions) -> DecomposedUrl {
    let decoded = decode_url(raw_url, opts);
    let parts = split_decoded(&decoded);
    let Authority { host, path } = host_and_path(raw_url);

    DecomposedUrl {
        scheme: parts.scheme.map(str::to_string),
        domain: host,
        path,
        fragment: parts.fragment.map(str::to_string),
        query_params: parse_query(parts.query),
    }
}
