use tracing::{info, warn};

use crate::github::GitHubApi;
use crate::profile::state::{FetchState, ProfileView, Resume};
use crate::profile::tally::LanguageTally;

/// The only failure message the resume view shows, whatever went wrong.
pub const USER_NOT_FOUND: &str = "User not found";

/// Runs the resume lookup for one username.
///
/// 1. profile lookup; on any error → `Failed`, repositories are never requested
/// 2. repository listing (sorted by last update); on any error → `Failed`
/// 3. language tally over the full listing
///
/// Errors never escape: both lookups collapse into `Failed(USER_NOT_FOUND)`.
pub async fn fetch_resume(api: &dyn GitHubApi, username: &str) -> FetchState {
    let profile = match api.get_user(username).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Profile lookup for {username} failed: {e}");
            return FetchState::Failed(USER_NOT_FOUND.to_string());
        }
    };

    let repos = match api.list_repos(username).await {
        Ok(repos) => repos,
        Err(e) => {
            warn!("Repository listing for {username} failed: {e}");
            return FetchState::Failed(USER_NOT_FOUND.to_string());
        }
    };

    let tally = LanguageTally::from_repositories(&repos);

    info!(
        "Loaded resume for {username}: {} repositories, {} languages",
        repos.len(),
        tally.iter().count()
    );

    FetchState::Loaded(Resume {
        profile,
        repos,
        tally,
    })
}

/// Points `view` at `username`, fetches, and applies the result if the view
/// still belongs to that username when the fetch finishes.
pub async fn load_profile(view: &mut ProfileView, api: &dyn GitHubApi, username: &str) -> bool {
    let ticket = view.load(username);
    let state = fetch_resume(api, username).await;
    view.complete(ticket, state)
}
