use axum::http::Uri;

/// Read-only view of the request a pagination strip is rendered for.
///
/// Only consulted when the page number was not set explicitly, and when the
/// URL builder needs the live query string.
pub trait RequestContext {
    /// Path part of the request URL, e.g. `/books/page3`.
    fn request_path(&self) -> &str;
    /// Raw query string without the leading `?`.
    fn query_string(&self) -> &str;
}

/// A request described by plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRequest {
    pub path: String,
    pub query: String,
}

impl StaticRequest {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
        }
    }

    /// Split `/path?query` into its parts.
    pub fn from_url(url: &str) -> Self {
        match url.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(url, ""),
        }
    }
}

impl RequestContext for StaticRequest {
    fn request_path(&self) -> &str {
        &self.path
    }

    fn query_string(&self) -> &str {
        &self.query
    }
}

impl RequestContext for Uri {
    fn request_path(&self) -> &str {
        self.path()
    }

    fn query_string(&self) -> &str {
        self.query().unwrap_or("")
    }
}

/// No request at all: root path, empty query.
impl RequestContext for () {
    fn request_path(&self) -> &str {
        "/"
    }

    fn query_string(&self) -> &str {
        ""
    }
}

/// Decode a query string into ordered key/value pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(query).unwrap_or_else(|e| {
        tracing::warn!("ignoring undecodable query string: {}", e);
        Vec::new()
    })
}

/// Encode ordered key/value pairs as a query string.
pub fn encode_query(params: &[(String, String)]) -> String {
    serde_urlencoded::to_string(params).unwrap_or_else(|e| {
        tracing::warn!("failed to encode query string: {}", e);
        String::new()
    })
}

/// Page number written in a request, floored to a whole page.
///
/// Accepts an optional sign and a decimal fraction. Digit strings too large
/// for a `u64` saturate so the caller's upper clamp still applies, and
/// negative values come back as 0. Anything else is `None`.
pub fn parse_page_number(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !digits(whole) || !digits(fraction) {
        return None;
    }
    if negative || whole.is_empty() {
        return Some(0);
    }
    Some(whole.parse().unwrap_or(u64::MAX))
}

/// Page number carried by a `{variable}{digits}` path segment, if any.
pub fn path_token(path: &str, variable: &str) -> Option<u64> {
    path.split('/')
        .find(|segment| is_page_segment(segment, variable))
        .and_then(|segment| parse_page_number(&segment[variable.len()..]))
}

/// Whether a single path segment is `{variable}` followed by one or more digits.
pub(crate) fn is_page_segment(segment: &str, variable: &str) -> bool {
    segment
        .strip_prefix(variable)
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Raw value of the `variable` query parameter, if present.
pub fn query_token(query: &str, variable: &str) -> Option<String> {
    parse_query(query)
        .into_iter()
        .find(|(k, _)| k == variable)
        .map(|(_, v)| v)
}
