//! GitHub client: the only module that talks to the GitHub REST API.
//!
//! Handlers depend on the [`GitHubApi`] trait, never on reqwest directly, so the
//! resume flow can be driven by an in-memory double in tests.
//!
//! Both calls are unauthenticated, read only the first page, and are never retried.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[cfg(test)]
pub mod fake;
pub mod models;

pub use models::{Repository, UserProfile};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

/// The two read-only lookups the resume view needs.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    async fn get_user(&self, username: &str) -> Result<UserProfile, GitHubError>;

    /// Repositories sorted by last update, most recent first (first page only).
    async fn list_repos(&self, username: &str) -> Result<Vec<Repository>, GitHubError>;
}

#[derive(Debug, Deserialize)]
struct GitHubErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self, GitHubError> {
        let base_url = Url::parse(&config.github_api_url)
            .map_err(|e| GitHubError::InvalidUrl(format!("{}: {e}", config.github_api_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(GitHubError::InvalidUrl(config.github_api_url.clone()));
        }

        let client = Client::builder()
            .user_agent(config.github_user_agent.as_str())
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Appends `segments` to the base URL, percent-encoding each one, so a
    /// username taken straight from the route can never alter the path or query.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GitHubError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GitHubError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, GitHubError> {
        let response = self
            .client
            .get(url.clone())
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .query(query)
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GitHubError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GitHubErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        debug!("GitHub GET {url} -> {status} ({} bytes)", body.len());

        serde_json::from_slice(&body).map_err(GitHubError::Parse)
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_user(&self, username: &str) -> Result<UserProfile, GitHubError> {
        let url = self.endpoint(&["users", username])?;
        self.get_json(url, &[]).await
    }

    async fn list_repos(&self, username: &str) -> Result<Vec<Repository>, GitHubError> {
        let url = self.endpoint(&["users", username, "repos"])?;
        self.get_json(url, &[("sort", "updated")]).await
    }
}
