pub mod plan;
pub mod request;
pub mod url;
pub mod window;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigurationError;

pub use plan::{INERT_HREF, Link, LinkPlan, NavLabel};
pub use request::{RequestContext, StaticRequest};
pub use url::{UrlBuilder, UrlConfig};
pub use window::{WindowItem, compute_window};

/// Where the previous/next links sit relative to the page numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPosition {
    /// Both before the page numbers.
    Left,
    /// Both after the page numbers.
    Right,
    /// Previous before, next after.
    #[default]
    Outside,
}

impl FromStr for NavigationPosition {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "outside" => Ok(Self::Outside),
            other => Err(ConfigurationError::UnknownNavigationPosition(other.to_string())),
        }
    }
}

/// How the page number travels between requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Propagation {
    /// `?page=3`
    #[default]
    Query,
    /// `/list/page3/`
    Path,
}

impl FromStr for Propagation {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" | "get" => Ok(Self::Query),
            "path" | "url" => Ok(Self::Path),
            other => Err(ConfigurationError::UnknownPropagation(other.to_string())),
        }
    }
}

impl fmt::Display for Propagation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Path => "path",
        })
    }
}

/// Settings of one pagination strip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Record count, when known up front.
    pub records: Option<u64>,
    pub records_per_page: u64,
    /// Numbered links shown at once, not counting previous/next and ellipses.
    pub selectable_pages: u64,
    /// Show the last page first.
    pub reverse: bool,
    /// Show previous/next even when every page already fits in the window.
    pub always_show_navigation: bool,
    /// Drop the page token from the canonical page's URL.
    pub avoid_duplicate_content: bool,
    pub navigation_position: NavigationPosition,
    /// Zero-pad page numbers to the width of the last page number.
    pub padding: bool,
    pub url: UrlConfig,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            records: None,
            records_per_page: 10,
            selectable_pages: 11,
            reverse: false,
            always_show_navigation: true,
            avoid_duplicate_content: true,
            navigation_position: NavigationPosition::Outside,
            padding: false,
            url: UrlConfig::default(),
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.records_per_page == 0 {
            return Err(ConfigurationError::InvalidPageSize);
        }
        if self.selectable_pages == 0 {
            return Err(ConfigurationError::InvalidSelectablePages);
        }
        Ok(())
    }

    /// Number of pages needed for the configured records.
    pub fn total_pages(&self) -> u64 {
        self.records
            .unwrap_or(0)
            .div_ceil(self.records_per_page.max(1))
    }
}

/// Pagination state for a single render pass.
pub struct Pagination<'r> {
    config: PaginationConfig,
    request: &'r dyn RequestContext,
    page: u64,
    explicitly_set: bool,
}

impl<'r> Pagination<'r> {
    /// Fails if the configuration carries a zero page size or window.
    ///
    /// A record count present in the configuration counts as set.
    pub fn new(
        config: PaginationConfig,
        request: &'r dyn RequestContext,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            config,
            request,
            page: 1,
            explicitly_set: false,
        })
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn set_records(&mut self, records: u64) {
        self.config.records = Some(records);
    }

    pub fn with_records(mut self, records: u64) -> Self {
        self.set_records(records);
        self
    }

    pub fn set_records_per_page(&mut self, per_page: u64) -> Result<(), ConfigurationError> {
        if per_page == 0 {
            return Err(ConfigurationError::InvalidPageSize);
        }
        self.config.records_per_page = per_page;
        Ok(())
    }

    pub fn with_records_per_page(mut self, per_page: u64) -> Result<Self, ConfigurationError> {
        self.set_records_per_page(per_page)?;
        Ok(self)
    }

    pub fn set_selectable_pages(&mut self, pages: u64) -> Result<(), ConfigurationError> {
        if pages == 0 {
            return Err(ConfigurationError::InvalidSelectablePages);
        }
        self.config.selectable_pages = pages;
        Ok(())
    }

    /// Force the current page. Values below 1 become 1; the upper bound is
    /// applied when the page is read.
    pub fn set_page(&mut self, page: i64) {
        self.page = page.max(1) as u64;
        self.explicitly_set = true;
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.set_page(page);
        self
    }

    pub fn total_pages(&self) -> u64 {
        self.config.total_pages()
    }

    /// The current page, clamped into `1..=total_pages`.
    ///
    /// Unless a page was forced with [`set_page`](Self::set_page), the first
    /// call reads it from the request. Under reverse order a request without a
    /// page token starts at the last page, which requires the record count to
    /// be known beforehand, through the configuration or
    /// [`set_records`](Self::set_records). The page size always has a value.
    pub fn current_page(&mut self) -> Result<u64, ConfigurationError> {
        if !self.explicitly_set {
            if self.config.reverse && self.config.records.is_none() {
                return Err(ConfigurationError::ReverseWithoutTotals);
            }
            self.page = match self.requested_page() {
                Some(page) => page,
                None if self.config.reverse => self.total_pages().max(1),
                None => 1,
            };
            self.explicitly_set = true;
            tracing::debug!(
                page = self.page,
                method = %self.config.url.method,
                "resolved current page from request"
            );
        }

        let total = self.total_pages();
        if total > 0 {
            self.page = self.page.clamp(1, total);
        }
        Ok(self.page)
    }

    /// Page number named by the request, if it names a usable one.
    fn requested_page(&self) -> Option<u64> {
        let variable = &self.config.url.variable_name;
        let parsed = match self.config.url.method {
            // Segments only match when they carry digits.
            Propagation::Path => request::path_token(self.request.request_path(), variable)?,
            Propagation::Query => {
                let raw = request::query_token(self.request.query_string(), variable)?;
                let Some(page) = request::parse_page_number(&raw) else {
                    tracing::warn!(variable = %variable, value = %raw, "ignoring unparsable page number in request");
                    return None;
                };
                page
            }
        };
        Some(parsed.max(1))
    }

    /// Build the navigation strip for the current state.
    pub fn plan(&mut self) -> Result<LinkPlan, ConfigurationError> {
        let current = self.current_page()?;
        Ok(plan::build(&self.config, self.request, current))
    }
}
