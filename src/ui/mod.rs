//! Interactive terminal UI for picking users.
//!
//! [`App`] is the widget: it owns the search term, suggestions, and selection
//! and implements the keyboard/mouse behaviour. Supporting modules partition
//! the implementation into focused pieces: input handling, rendering, search
//! coordination, and the event loop.

mod actions;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
mod search;
mod selection;
mod state;
pub mod style;

pub use config::UiLabels;
pub use input::QueryInput;
pub use runtime::run;
pub use selection::Selection;
pub use state::{App, Focus, SelectionOutcome};
pub use style::{StyleConfig, Theme};

#[cfg(test)]
mod tests;
