pub mod config;
pub mod error;
pub mod pagination;
pub mod render;
pub mod state;
pub mod web;

use axum::Router;
use axum::response::Json;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use crate::error::ConfigurationError;
pub use crate::pagination::{Link, LinkPlan, Pagination, PaginationConfig, RequestContext};
pub use crate::render::HtmlRenderer;

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(web::router(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
