mod plan_tests;

use axum::Router;
use axum::body::Body;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pagelinks::config::Config;
use pagelinks::render::HtmlRenderer;
use pagelinks::state::AppState;
use pagelinks::web;

/// Build a Config from a TOML fragment on top of the defaults.
pub fn test_config(extra: &str) -> Config {
    let toml_str = format!(
        r#"
[server]
log_level = "debug"

[demo]
total_items = 1000
base_path = "/items"

{extra}
"#
    );
    toml::from_str(&toml_str).expect("test config should parse")
}

/// Build an AppState with the embedded templates.
pub fn test_app_state(config: Config) -> AppState {
    let tera = web::load_templates().expect("templates should load");
    let renderer = HtmlRenderer::new(config.style.clone(), config.labels.clone())
        .expect("pagination template should load");
    AppState::new(config, tera, renderer)
}

/// Build a full Router from a config.
pub fn test_router(config: Config) -> Router {
    pagelinks::build_router(test_app_state(config))
}

/// Send a GET request and return the response.
pub async fn get(app: Router, path: &str) -> axum::response::Response {
    let req = axum::http::Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

/// Extract response body as a String.
pub async fn body_string(response: axum::response::Response) -> String {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Response body as HTML with Tera's escaped slashes turned back into `/`,
/// so links compare as plain URLs.
pub async fn html_body(response: axum::response::Response) -> String {
    body_string(response).await.replace("&#x2F;", "/")
}
