// Resume view: fetch a user's profile and repositories, tally languages,
// and track which username the view currently belongs to.

pub mod fetcher;
pub mod handlers;
pub mod state;
pub mod tally;

pub use fetcher::load_profile;
pub use state::{FetchState, ProfileView, Resume};
