// Entry view: username form and the validation gate in front of the resume view.

pub mod gate;
pub mod handlers;

pub use gate::{HomeForm, PendingRedirect};
