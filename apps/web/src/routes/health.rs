use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /_health
///
/// Liveness only: reports which GitHub API this instance talks to but never
/// calls it. Mounted under `_`, which no GitHub username can contain, so it
/// cannot shadow a resume page.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "github_api": state.config.github_api_url,
        "timeout_secs": state.config.http_timeout.as_secs()
    }))
}
