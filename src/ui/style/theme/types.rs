use ratatui::style::Style;

/// Colour scheme applied to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Block titles and borders of the focused pane.
	pub header: Style,
	/// The keyboard-focused suggestion row.
	pub row_highlight: Style,
	/// Input text and prompt chrome.
	pub prompt: Style,
	/// Placeholders, hints, and secondary text such as emails.
	pub empty: Style,
	/// Characters of a suggestion that matched the search term.
	pub highlight: Style,
	/// Body of a pill.
	pub pill: Style,
	/// Body of the pill that has keyboard focus.
	pub pill_focused: Style,
	/// The pill's dismiss glyph.
	pub pill_dismiss: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}
}

/// Describes a theme instance that can be selected by name.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` refers to this theme, ignoring case and separators.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let wanted = normalize_name(name);
		normalize_name(&self.name) == wanted
			|| self.aliases.iter().any(|alias| normalize_name(alias) == wanted)
	}
}

pub(super) fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.filter(|ch| !matches!(ch, '-' | '_' | ' '))
		.flat_map(char::to_lowercase)
		.collect()
}
