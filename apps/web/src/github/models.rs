use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The subset of `GET /users/{username}` the resume view consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub avatar_url: String,
    pub name: Option<String>,
    pub public_repos: u32,
    pub created_at: DateTime<Utc>,
}

/// One item of `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub updated_at: DateTime<Utc>,
    pub language: Option<String>,
}
