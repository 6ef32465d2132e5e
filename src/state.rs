use std::sync::Arc;

use crate::config::Config;
use crate::render::HtmlRenderer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tera: Arc<tera::Tera>,
    pub renderer: Arc<HtmlRenderer>,
}

impl AppState {
    pub fn new(config: Config, tera: tera::Tera, renderer: HtmlRenderer) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            renderer: Arc::new(renderer),
        }
    }
}
