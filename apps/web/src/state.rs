use std::sync::Arc;

use crate::config::Config;
use crate::github::GitHubApi;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// GitHub lookups. `GitHubClient` in production, an in-memory double in tests.
    pub github: Arc<dyn GitHubApi>,
}
