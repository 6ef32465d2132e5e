use serde::Serialize;

use super::request::RequestContext;
use super::url::UrlBuilder;
use super::window::{WindowItem, compute_window};
use super::{NavigationPosition, PaginationConfig};

/// Target of navigation links that lead nowhere.
pub const INERT_HREF: &str = "javascript:void(0)";

/// Which caption a navigation link carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavLabel {
    Previous,
    Next,
}

/// One entry of the navigation strip.
///
/// `Previous` is the navigation link placed before the page numbers and
/// `Next` the one placed after them. Under reverse order they point to the
/// higher and lower page respectively and their captions swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Link {
    Page {
        number: u64,
        text: String,
        active: bool,
        url: String,
    },
    Ellipsis,
    Previous {
        label: NavLabel,
        disabled: bool,
        url: String,
    },
    Next {
        label: NavLabel,
        disabled: bool,
        url: String,
    },
}

impl Link {
    pub fn url(&self) -> Option<&str> {
        match self {
            Link::Page { url, .. } | Link::Previous { url, .. } | Link::Next { url, .. } => {
                Some(url.as_str())
            }
            Link::Ellipsis => None,
        }
    }
}

/// Ordered navigation strip, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkPlan {
    pub links: Vec<Link>,
    pub current_page: u64,
    pub total_pages: u64,
    pub reverse: bool,
}

impl LinkPlan {
    /// Page numbers in display order.
    pub fn pages(&self) -> impl Iterator<Item = u64> + '_ {
        self.links.iter().filter_map(|link| match link {
            Link::Page { number, .. } => Some(*number),
            _ => None,
        })
    }

    pub fn active(&self) -> Option<u64> {
        self.links.iter().find_map(|link| match link {
            Link::Page {
                number,
                active: true,
                ..
            } => Some(*number),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

pub(crate) fn build(
    config: &PaginationConfig,
    request: &dyn RequestContext,
    current: u64,
) -> LinkPlan {
    let total = config.total_pages();
    let reverse = config.reverse;
    let canonical = if reverse { total.max(1) } else { 1 };
    let urls = UrlBuilder::new(
        &config.url,
        request,
        canonical,
        config.avoid_duplicate_content,
    );
    let width = if config.padding {
        total.to_string().len()
    } else {
        0
    };

    let pages = compute_window(total, config.selectable_pages, current, reverse)
        .into_iter()
        .map(|item| match item {
            WindowItem::Page(number) => Link::Page {
                number,
                text: format!("{number:0width$}"),
                active: number == current,
                url: urls.url_for(number),
            },
            WindowItem::Ellipsis => Link::Ellipsis,
        });

    let mut links = Vec::new();
    if config.always_show_navigation || total > config.selectable_pages {
        let (previous, next) = navigation(total, current, reverse, &urls);
        match config.navigation_position {
            NavigationPosition::Left => {
                links.push(previous);
                links.push(next);
                links.extend(pages);
            }
            NavigationPosition::Right => {
                links.extend(pages);
                links.push(previous);
                links.push(next);
            }
            NavigationPosition::Outside => {
                links.push(previous);
                links.extend(pages);
                links.push(next);
            }
        }
    } else {
        links.extend(pages);
    }

    tracing::debug!(
        current,
        total,
        links = links.len(),
        "built pagination plan"
    );

    LinkPlan {
        links,
        current_page: current,
        total_pages: total,
        reverse,
    }
}

fn navigation(total: u64, current: u64, reverse: bool, urls: &UrlBuilder<'_>) -> (Link, Link) {
    let lower = (total > 0 && current > 1).then(|| current - 1);
    let higher = (current < total).then(|| current + 1);
    let (before, after) = if reverse {
        (higher, lower)
    } else {
        (lower, higher)
    };
    let (before_label, after_label) = if reverse {
        (NavLabel::Next, NavLabel::Previous)
    } else {
        (NavLabel::Previous, NavLabel::Next)
    };

    let target = |page: Option<u64>| match page {
        Some(p) => (false, urls.url_for(p)),
        None => (true, INERT_HREF.to_string()),
    };
    let (disabled, url) = target(before);
    let previous = Link::Previous {
        label: before_label,
        disabled,
        url,
    };
    let (disabled, url) = target(after);
    let next = Link::Next {
        label: after_label,
        disabled,
        url,
    };
    (previous, next)
}
