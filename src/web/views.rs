use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use serde::Serialize;

use crate::error::AppError;
use crate::pagination::Pagination;
use crate::state::AppState;

/// Slice of the synthetic list shown on one page.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageSlice {
    pub first_index: u64,
    pub items: Vec<String>,
}

/// Items `(page - 1) * per_page + 1 ..` of a list of `total` items.
pub fn page_slice(page: u64, per_page: u64, total: u64) -> PageSlice {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(total);
    let end = start.saturating_add(per_page).min(total);
    PageSlice {
        first_index: start + 1,
        items: (start + 1..=end).map(|i| format!("Item {i}")).collect(),
    }
}

/// GET {base_path}[/...] — the demo list with its pagination strip.
pub async fn items(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, AppError> {
    render_items(&state, &uri)
}

fn render_items(state: &AppState, uri: &Uri) -> Result<Html<String>, AppError> {
    let config = &state.config;
    let total_items = config.demo_records();
    let per_page = config.pagination.records_per_page;

    let mut pagination = Pagination::new(config.pagination.clone(), uri)?.with_records(total_items);
    let plan = pagination.plan()?;
    let nav = state.renderer.render(&plan)?;
    let slice = page_slice(plan.current_page, per_page, total_items);

    let mut ctx = tera::Context::new();
    ctx.insert("title", "Items");
    ctx.insert("total_items", &total_items);
    ctx.insert("current_page", &plan.current_page);
    ctx.insert("total_pages", &plan.total_pages);
    ctx.insert("first_index", &slice.first_index);
    ctx.insert("items", &slice.items);
    ctx.insert("pagination", &nav);

    state
        .tera
        .render("items.html", &ctx)
        .map(Html)
        .map_err(|e| {
            tracing::error!("Template render error (items.html): {}", e);
            AppError::Render(e.into())
        })
}
