use std::fmt;

use thiserror::Error;

/// GitHub caps usernames at 39 characters.
pub const MAX_USERNAME_LEN: usize = 39;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid GitHub username")]
    Invalid,
}

/// Checks a candidate against GitHub's username grammar:
/// - 1 to 39 characters
/// - ASCII alphanumerics or hyphens only
/// - no leading or trailing hyphen
/// - no two consecutive hyphens
pub fn is_valid_username(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();

    if bytes.is_empty() || bytes.len() > MAX_USERNAME_LEN {
        return false;
    }

    if !bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-') {
        return false;
    }

    if candidate.starts_with('-') || candidate.ends_with('-') {
        return false;
    }

    !candidate.contains("--")
}

/// A username that has passed [`is_valid_username`].
///
/// The character set never needs percent-encoding, so the value can be
/// embedded directly into a path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn parse(candidate: &str) -> Result<Self, ValidationError> {
        if is_valid_username(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(ValidationError::Invalid)
        }
    }

    /// Path of the resume view for this user.
    pub fn resume_path(&self) -> String {
        format!("/{}", self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
