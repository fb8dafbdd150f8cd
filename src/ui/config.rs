/// Textual configuration used when rendering the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title of the bordered input block.
	pub title: String,
	/// Text shown in the empty search field.
	pub placeholder: String,
	/// Title rendered above the suggestion list.
	pub list_title: String,
	/// Message shown when a search produced nothing to pick.
	pub empty_label: String,
	/// Label next to the spinner while a search is running.
	pub searching_label: String,
	/// Key reference shown along the bottom border.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Users".to_string(),
			placeholder: "Search for a user...".to_string(),
			list_title: "Suggestions".to_string(),
			empty_label: "No matching users".to_string(),
			searching_label: " searching".to_string(),
			hint: "↑/↓ move · Enter pick · Tab pills · Esc cancel".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}
}
