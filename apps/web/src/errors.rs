use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render::render_error_page;

/// Errors that reach the application boundary.
///
/// Validation and GitHub failures are handled inside their own modules and
/// never show up here. Whatever does is rendered as the error page, so a
/// handler failure never leaves the browser with a bare body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::NotFound(path) => {
                tracing::debug!("No route for {path}");
                (StatusCode::NOT_FOUND, "Not Found".to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Html(render_error_page(&detail))).into_response()
    }
}
