pub mod views;

use axum::Router;
use axum::routing::get;

use crate::render::RenderError;
use crate::state::AppState;

const ITEMS_TEMPLATE: &str = include_str!("../../templates/items.html");

/// Tera instance holding the demo page templates.
pub fn load_templates() -> Result<tera::Tera, RenderError> {
    let mut tera = tera::Tera::default();
    tera.add_raw_template("items.html", ITEMS_TEMPLATE)?;
    Ok(tera)
}

/// Routes of the demo list. Path-mode page tokens may sit at any depth
/// below the base path.
pub fn router(state: &AppState) -> Router<AppState> {
    let base = state.config.demo.base_path.trim_end_matches('/').to_string();
    let base = if base.is_empty() { "/".to_string() } else { base };

    let mut router = Router::new().route(&base, get(views::items));
    if base != "/" {
        router = router.route(&format!("{base}/"), get(views::items));
    }
    router.route(
        &format!("{}/{{*rest}}", base.trim_end_matches('/')),
        get(views::items),
    )
}
