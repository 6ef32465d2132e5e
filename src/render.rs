//! HTML rendering of a [`LinkPlan`] through Tera.

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

use crate::error::ConfigurationError;
use crate::pagination::{Link, LinkPlan, NavLabel};

const PAGINATION_TEMPLATE: &str = include_str!("../templates/pagination.html");
const TEMPLATE_NAME: &str = "pagination.html";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// CSS classes of the list container, its items and the anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleHooks {
    pub list: String,
    pub list_item: String,
    pub anchor: String,
}

impl Default for StyleHooks {
    fn default() -> Self {
        Self {
            list: "pagination".to_string(),
            list_item: "page-item".to_string(),
            anchor: "page-link".to_string(),
        }
    }
}

impl StyleHooks {
    /// Set one hook by name. Only `list`, `list_item` and `anchor` exist.
    pub fn set(&mut self, key: &str, class: impl Into<String>) -> Result<(), ConfigurationError> {
        let slot = match key {
            "list" => &mut self.list,
            "list_item" => &mut self.list_item,
            "anchor" => &mut self.anchor,
            other => return Err(ConfigurationError::UnknownStyleHook(other.to_string())),
        };
        *slot = class.into();
        Ok(())
    }
}

/// Captions of the navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub previous: String,
    pub next: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            previous: "«".to_string(),
            next: "»".to_string(),
        }
    }
}

impl Labels {
    pub fn text(&self, label: NavLabel) -> &str {
        match label {
            NavLabel::Previous => &self.previous,
            NavLabel::Next => &self.next,
        }
    }
}

/// Flattened link for the template.
#[derive(Debug, Serialize)]
struct LinkView<'a> {
    kind: &'static str,
    text: &'a str,
    href: &'a str,
    active: bool,
    disabled: bool,
    rel: Option<&'static str>,
}

pub struct HtmlRenderer {
    tera: Tera,
    hooks: StyleHooks,
    labels: Labels,
}

impl HtmlRenderer {
    pub fn new(hooks: StyleHooks, labels: Labels) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, PAGINATION_TEMPLATE)?;
        Ok(Self {
            tera,
            hooks,
            labels,
        })
    }

    pub fn hooks(&self) -> &StyleHooks {
        &self.hooks
    }

    /// Render the plan as a `<ul>` list.
    pub fn render(&self, plan: &LinkPlan) -> Result<String, RenderError> {
        let links: Vec<LinkView<'_>> = plan.links.iter().map(|l| self.view(l)).collect();
        let mut ctx = Context::new();
        ctx.insert("hooks", &self.hooks);
        ctx.insert("links", &links);
        Ok(self.tera.render(TEMPLATE_NAME, &ctx)?)
    }

    fn view<'a>(&'a self, link: &'a Link) -> LinkView<'a> {
        match link {
            Link::Page {
                text, active, url, ..
            } => LinkView {
                kind: "page",
                text,
                href: url,
                active: *active,
                disabled: false,
                rel: None,
            },
            Link::Ellipsis => LinkView {
                kind: "ellipsis",
                text: "…",
                href: "",
                active: false,
                disabled: false,
                rel: None,
            },
            Link::Previous {
                label,
                disabled,
                url,
            } => LinkView {
                kind: "previous",
                text: self.labels.text(*label),
                href: url,
                active: false,
                disabled: *disabled,
                rel: (!disabled).then_some("prev"),
            },
            Link::Next {
                label,
                disabled,
                url,
            } => LinkView {
                kind: "next",
                text: self.labels.text(*label),
                href: url,
                active: false,
                disabled: *disabled,
                rel: (!disabled).then_some("next"),
            },
        }
    }
}
