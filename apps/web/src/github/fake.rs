//! In-memory `GitHubApi` used by handler and fetcher tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use super::{GitHubApi, GitHubError, Repository, UserProfile};

#[derive(Default)]
pub struct FakeGitHub {
    users: HashMap<String, UserProfile>,
    repos: HashMap<String, Vec<Repository>>,
    delays: HashMap<String, Duration>,
    repo_calls: AtomicUsize,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, profile: UserProfile, repos: Vec<Repository>) -> Self {
        self.repos.insert(profile.login.clone(), repos);
        self.users.insert(profile.login.clone(), profile);
        self
    }

    /// A user whose profile resolves but whose repository listing fails.
    pub fn with_user_without_repos(mut self, profile: UserProfile) -> Self {
        self.users.insert(profile.login.clone(), profile);
        self
    }

    pub fn with_delay(mut self, username: &str, delay: Duration) -> Self {
        self.delays.insert(username.to_string(), delay);
        self
    }

    pub fn repo_calls(&self) -> usize {
        self.repo_calls.load(Ordering::SeqCst)
    }

    async fn wait(&self, username: &str) {
        if let Some(delay) = self.delays.get(username) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn get_user(&self, username: &str) -> Result<UserProfile, GitHubError> {
        self.wait(username).await;
        self.users
            .get(username)
            .cloned()
            .ok_or_else(|| GitHubError::NotFound(format!("/users/{username}")))
    }

    async fn list_repos(&self, username: &str) -> Result<Vec<Repository>, GitHubError> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);
        self.wait(username).await;
        self.repos
            .get(username)
            .cloned()
            .ok_or_else(|| GitHubError::Api {
                status: 502,
                message: "Bad Gateway".to_string(),
            })
    }
}

pub fn profile(login: &str, name: Option<&str>) -> UserProfile {
    UserProfile {
        login: login.to_string(),
        avatar_url: format!("https://avatars.githubusercontent.com/{login}"),
        name: name.map(str::to_string),
        public_repos: 3,
        created_at: Utc.with_ymd_and_hms(2015, 3, 9, 14, 30, 0).unwrap(),
    }
}

pub fn repo(owner: &str, name: &str, language: Option<&str>, day: u32) -> Repository {
    Repository {
        name: name.to_string(),
        html_url: format!("https://github.com/{owner}/{name}"),
        updated_at: Utc.with_ymd_and_hms(2024, 6, day, 9, 0, 0).unwrap(),
        language: language.map(str::to_string),
    }
}
