//! Resume view state machine.
//!
//! A `ProfileView` moves between `Loading`, `Loaded` and `Failed` only when a
//! fetch completes. Every fetch is issued a [`FetchTicket`] carrying the username
//! and a monotonic generation; a completion whose ticket no longer matches the
//! view is dropped, so a slow answer for an old username can never overwrite
//! the state of the current one.

#![allow(dead_code)]

use tracing::debug;

use crate::github::{Repository, UserProfile};
use crate::profile::tally::LanguageTally;

/// Everything the loaded resume view displays.
#[derive(Debug, Clone, PartialEq)]
pub struct Resume {
    pub profile: UserProfile,
    /// In the order returned by the API (last updated first).
    pub repos: Vec<Repository>,
    pub tally: LanguageTally,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Loaded(Resume),
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Identity of one issued fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    username: String,
    generation: u64,
}

impl FetchTicket {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct ProfileView {
    username: Option<String>,
    generation: u64,
    state: Option<FetchState>,
}

impl ProfileView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the view at `username` and resets it to `Loading`.
    ///
    /// Any ticket handed out before this call becomes stale.
    pub fn load(&mut self, username: &str) -> FetchTicket {
        self.generation += 1;
        self.username = Some(username.to_string());
        self.state = Some(FetchState::Loading);

        FetchTicket {
            username: username.to_string(),
            generation: self.generation,
        }
    }

    /// Applies a completed fetch. Returns `false` (and leaves the view
    /// untouched) when the ticket is stale.
    pub fn complete(&mut self, ticket: FetchTicket, state: FetchState) -> bool {
        let current = self.generation == ticket.generation
            && self.username.as_deref() == Some(ticket.username.as_str());

        if !current {
            debug!(
                "Discarding stale fetch for {} (generation {}, current {})",
                ticket.username, ticket.generation, self.generation
            );
            return false;
        }

        self.state = Some(state);
        true
    }

    /// Invalidates the outstanding ticket when the view goes away.
    pub fn teardown(&mut self) {
        self.generation += 1;
        self.username = None;
        self.state = None;
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// `None` until [`ProfileView::load`] has been called.
    pub fn state(&self) -> Option<&FetchState> {
        self.state.as_ref()
    }

    pub fn into_state(self) -> Option<FetchState> {
        self.state
    }
}
