//! Visual styling utilities.
//!
//! Themes represent the colour schemes applied to the picker; [`StyleConfig`]
//! is where any non-colour knobs would sit alongside them.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};

#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	pub theme: Theme,
}
