use serde::Deserialize;

use super::Propagation;
use super::request::{RequestContext, encode_query, is_page_segment, parse_query};

/// How page links are addressed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Whether the page travels in the path or in the query string.
    pub method: Propagation,
    pub variable_name: String,
    /// Path the links point at. `None` means the current request path.
    pub base_url: Option<String>,
    /// Query parameters captured at configuration time.
    pub base_query: Vec<(String, String)>,
    /// Carry the live request's query parameters into every link.
    pub preserve_query_string: bool,
    /// Path mode only.
    pub trailing_slash: bool,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            method: Propagation::Query,
            variable_name: "page".to_string(),
            base_url: None,
            base_query: Vec::new(),
            preserve_query_string: true,
            trailing_slash: true,
        }
    }
}

/// Builds the target URL of every page link in one strip.
pub struct UrlBuilder<'a> {
    config: &'a UrlConfig,
    base_path: String,
    query: Vec<(String, String)>,
    canonical_page: u64,
    avoid_duplicate_content: bool,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(
        config: &'a UrlConfig,
        request: &dyn RequestContext,
        canonical_page: u64,
        avoid_duplicate_content: bool,
    ) -> Self {
        let base_path = config
            .base_url
            .clone()
            .unwrap_or_else(|| request.request_path().to_string());
        let query = if config.preserve_query_string {
            parse_query(request.query_string())
        } else {
            config.base_query.clone()
        };
        Self {
            config,
            base_path,
            query,
            canonical_page,
            avoid_duplicate_content,
        }
    }

    fn omits_token(&self, page: u64) -> bool {
        self.avoid_duplicate_content && page == self.canonical_page
    }

    /// URL of the given page.
    pub fn url_for(&self, page: u64) -> String {
        match self.config.method {
            Propagation::Query => self.query_url(page),
            Propagation::Path => self.path_url(page),
        }
    }

    fn query_url(&self, page: u64) -> String {
        let mut params = self.query.clone();
        let variable = &self.config.variable_name;
        if self.omits_token(page) {
            params.retain(|(k, _)| k != variable);
        } else if let Some(slot) = params.iter_mut().find(|(k, _)| k == variable) {
            slot.1 = page.to_string();
            // Later duplicates of the key would shadow the new value.
            let mut seen = false;
            params.retain(|(k, _)| {
                if k != variable {
                    return true;
                }
                let keep = !seen;
                seen = true;
                keep
            });
        } else {
            params.push((variable.clone(), page.to_string()));
        }
        with_query(&self.base_path, &params)
    }

    fn path_url(&self, page: u64) -> String {
        let variable = &self.config.variable_name;
        let token = format!("{variable}{page}");
        let omit = self.omits_token(page);

        let mut segments: Vec<&str> = self.base_path.split('/').collect();
        let existing = segments
            .iter()
            .position(|segment| is_page_segment(segment, variable));
        match existing {
            Some(index) if omit => {
                segments.remove(index);
            }
            Some(index) => segments[index] = token.as_str(),
            None if omit => {}
            None => {
                if segments.last().is_some_and(|s| s.is_empty()) {
                    segments.pop();
                }
                segments.push(token.as_str());
            }
        }

        let mut path = collapse_slashes(&segments.join("/"));
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        if self.config.trailing_slash {
            if !path.ends_with('/') {
                path.push('/');
            }
        } else if path.len() > 1 && path.ends_with('/') {
            path.pop();
        }

        let params: Vec<(String, String)> = self
            .query
            .iter()
            .filter(|(k, _)| k != variable)
            .cloned()
            .collect();
        with_query(&path, &params)
    }
}

fn with_query(path: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", encode_query(params))
    }
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}
