mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED, default_theme};
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

/// Look up a built-in theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtin_themes()
		.into_iter()
		.find(|registration| registration.answers_to(name))
		.map(|registration| registration.theme)
}

/// Canonical names of every built-in theme, in registration order.
#[must_use]
pub fn names() -> Vec<String> {
	builtin_themes()
		.into_iter()
		.map(|registration| registration.name)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
