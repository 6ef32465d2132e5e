use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Invalid pagination settings or call order.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("reverse order needs the record count and page size before the current page is read")]
    ReverseWithoutTotals,

    #[error("records per page must be at least 1")]
    InvalidPageSize,

    #[error("selectable pages must be at least 1")]
    InvalidSelectablePages,

    #[error("unknown style hook: {0} (expected list, list_item or anchor)")]
    UnknownStyleHook(String),

    #[error("unknown navigation position: {0} (expected left, right or outside)")]
    UnknownNavigationPosition(String),

    #[error("unknown page propagation method: {0} (expected query or path)")]
    UnknownPropagation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pagination(#[from] ConfigurationError),

    #[error(transparent)]
    Render(#[from] crate::render::RenderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Pagination(_) => StatusCode::BAD_REQUEST,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("{self}");
        }
        (status, self.to_string()).into_response()
    }
}
