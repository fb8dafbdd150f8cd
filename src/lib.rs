//! Core crate exports for the `pillpick` multi-select user picker.
//!
//! The root module re-exports the widget, the user model, and the search
//! client so that embedders can wire a picker to their own directory without
//! digging through the module hierarchy.

pub mod app_dirs;
pub mod logging;
mod search;
pub mod ui;
pub mod users;

pub use ui::{App, Focus, SelectionOutcome, Theme, UiLabels, run};
pub use users::{HttpUserSource, SearchError, SearchOptions, User, UserSource};
