use tracing::debug;

use crate::username::Username;

/// Where a successful submit sends the browser.
pub trait Navigator {
    fn navigate(&mut self, path: String);
}

/// Navigator that just remembers the last target; the HTTP handler turns it
/// into a redirect.
#[derive(Debug, Default)]
pub struct PendingRedirect {
    target: Option<String>,
}

impl PendingRedirect {
    pub fn into_target(self) -> Option<String> {
        self.target
    }
}

impl Navigator for PendingRedirect {
    fn navigate(&mut self, path: String) {
        self.target = Some(path);
    }
}

/// State of the entry form: the text in the box and the inline error, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeForm {
    pub username: String,
    pub error: Option<String>,
}

impl HomeForm {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            error: None,
        }
    }

    /// Validates the current value. An invalid value sets the inline error and
    /// never navigates; a valid one clears the error and navigates exactly once
    /// to the resume path.
    pub fn submit(&mut self, navigator: &mut dyn Navigator) -> bool {
        match Username::parse(&self.username) {
            Ok(username) => {
                self.error = None;
                navigator.navigate(username.resume_path());
                true
            }
            Err(e) => {
                debug!("Rejected username submission {:?}", self.username);
                self.error = Some(e.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, path: String) {
            self.visits.push(path);
        }
    }

    #[test]
    fn test_valid_username_navigates_once() {
        let mut form = HomeForm::new("john-doe");
        let mut nav = RecordingNavigator::default();

        assert!(form.submit(&mut nav));
        assert_eq!(nav.visits, ["/john-doe"]);
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_invalid_username_shows_error_and_stays() {
        let mut form = HomeForm::new("-abc");
        let mut nav = RecordingNavigator::default();

        assert!(!form.submit(&mut nav));
        assert!(nav.visits.is_empty());
        assert_eq!(form.error.as_deref(), Some("Invalid GitHub username"));
    }

    #[test]
    fn test_empty_submission_is_invalid() {
        let mut form = HomeForm::default();
        let mut nav = RecordingNavigator::default();

        assert!(!form.submit(&mut nav));
        assert!(nav.visits.is_empty());
    }

    #[test]
    fn test_valid_submit_after_invalid_clears_error() {
        let mut form = HomeForm::new("ab--c");
        let mut nav = RecordingNavigator::default();

        form.submit(&mut nav);
        assert!(form.error.is_some());

        form.username = "abc".to_string();
        assert!(form.submit(&mut nav));
        assert_eq!(form.error, None);
        assert_eq!(nav.visits, ["/abc"]);
    }

    #[test]
    fn test_pending_redirect_keeps_target() {
        let mut form = HomeForm::new("octocat");
        let mut redirect = PendingRedirect::default();

        form.submit(&mut redirect);
        assert_eq!(redirect.into_target().as_deref(), Some("/octocat"));
    }
}
