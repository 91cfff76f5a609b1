//! Delimiter splitting on the decoded URL text.

/// Borrowed pieces of a decoded URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedParts<'a> {
    /// Text before the first `:`.
    pub scheme: Option<&'a str>,
    /// Text after the first `#`, including any later `#`.
    pub fragment: Option<&'a str>,
    /// Text after the first `?` that precedes the fragment.
    pub query: Option<&'a str>,
}

/// Splits `decoded` on its first `:`, `#` and `?`.
///
/// This is plain text splitting. A `:` inside a path or query still ends the
/// scheme when no earlier `:` exists.
pub fn split_decoded(decoded: &str) -> DecodedParts<'_> {
    let scheme = decoded.split_once(':').map(|(scheme, _)| scheme);

    let (before_fragment, fragment) = match decoded.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment)),
        None => (decoded, None),
    };

    let query = before_fragment.split_once('?').map(|(_, query)| query);

    DecodedParts {
        scheme,
        fragment,
        query,
    }
}
