use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};

use crate::errors::AppError;
use crate::profile::{load_profile, FetchState, ProfileView};
use crate::render::render_resume;
use crate::state::AppState;

/// GET /:username
///
/// The path segment is used as-is; the home form already validated it, and
/// anything GitHub does not know ends up in the `Failed` view.
pub async fn handle_resume(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let mut view = ProfileView::new();

    if !load_profile(&mut view, state.github.as_ref(), &username).await {
        return Err(AppError::Internal(anyhow::anyhow!(
            "fetch for {username} completed against a different view"
        )));
    }

    let fetch_state = view
        .into_state()
        .ok_or_else(|| anyhow::anyhow!("resume view for {username} has no state"))?;

    let status = match fetch_state {
        FetchState::Failed(_) => StatusCode::NOT_FOUND,
        FetchState::Loading | FetchState::Loaded(_) => StatusCode::OK,
    };

    Ok((status, Html(render_resume(&username, &fetch_state))))
}
