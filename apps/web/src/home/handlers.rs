use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::home::{HomeForm, PendingRedirect};
use crate::render::render_home;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub username: String,
}

/// GET /
pub async fn handle_home() -> Html<String> {
    Html(render_home(&HomeForm::default()))
}

/// POST /
///
/// Valid username → 303 to `/{username}`. Invalid → the form again with the
/// inline error (422); nothing is navigated.
pub async fn handle_submit(Form(request): Form<SubmitRequest>) -> Result<Response, AppError> {
    let mut form = HomeForm::new(request.username);
    let mut redirect = PendingRedirect::default();

    if !form.submit(&mut redirect) {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(render_home(&form))).into_response());
    }

    let target = redirect
        .into_target()
        .ok_or_else(|| anyhow::anyhow!("accepted username without a navigation target"))?;
    info!("Navigating to {target}");

    Ok(Redirect::to(&target).into_response())
}
