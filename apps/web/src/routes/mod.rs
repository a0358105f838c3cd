pub mod health;

use std::any::Any;

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::AppError;
use crate::home::handlers::{handle_home, handle_submit};
use crate::profile::handlers::handle_resume;
use crate::render::render_error_page;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// A panic anywhere below the router still answers with the error page.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(render_error_page("Internal Server Error")),
    )
        .into_response()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // `_` is outside the username grammar, so this never shadows a resume page
        .route("/_health", get(health::health_handler))
        .route("/", get(handle_home).post(handle_submit))
        .route("/:username", get(handle_resume))
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
}
