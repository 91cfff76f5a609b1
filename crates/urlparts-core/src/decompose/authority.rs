//! Host and path extraction from the undecoded URL.

/// Host and path as reported by WHATWG URL parsing of the raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authority {
    pub host: Option<String>,
    pub path: Option<String>,
}

/// Parses `raw_url` (not the decoded form) with the `url` crate.
///
/// Returns both fields empty when the text is not an absolute URL. Existing
/// percent escapes in the path are kept as-is; characters the parser must
/// escape (such as a raw space) come back percent-encoded. Hosts of special
/// schemes are lowercased. An empty host is reported as missing.
pub fn host_and_path(raw_url: &str) -> Authority {
    let Ok(parsed) = url::Url::parse(raw_url) else {
        return Authority::default();
    };
    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .map(str::to_string);
    Authority {
        host,
        path: Some(parsed.path().to_string()),
    }
}
