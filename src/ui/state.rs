//! Core state container for the picker.
//!
//! [`App`] owns the search term, the current suggestions, the selection, and
//! the keyboard focus. Every mutation funnels through the methods here so the
//! invariants hold after each event: the focused index stays inside the
//! visible suggestion list and the selection's email set mirrors its users.

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use super::config::UiLabels;
use super::input::QueryInput;
use super::selection::Selection;
use super::style::{StyleConfig, Theme};
use crate::search::{self, SearchRuntime};
use crate::users::{User, UserSource};

impl Drop for App {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

/// Which part of the widget receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	/// The search text field.
	Input,
	/// The pill at this index in the selection.
	Pill(usize),
}

/// How the picker ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
	/// `false` when the user cancelled.
	pub accepted: bool,
	/// Search term at exit.
	pub query: String,
	/// Selected users in selection order.
	pub users: Vec<User>,
}

/// Screen regions recorded during the last draw.
#[derive(Debug, Default, Clone)]
pub(crate) struct HitAreas {
	/// Inner area of the suggestion list, when one was drawn.
	pub(crate) suggestions: Option<Rect>,
	/// `(user id, dismiss glyph area)` for each drawn pill.
	pub(crate) pills: Vec<(u64, Rect)>,
}

/// The multi-select search widget.
pub struct App {
	pub(crate) input: QueryInput,
	pub(crate) suggestions: Vec<User>,
	pub(crate) selection: Selection,
	pub(crate) focused: usize,
	pub(crate) focus: Focus,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) search: SearchRuntime,
	pub(crate) list_state: ListState,
	pub(crate) hit: HitAreas,
}

/// Suggestions that could still be selected, in response order. Rows whose
/// email or id is already selected are hidden.
pub(crate) fn visible_users<'a>(suggestions: &'a [User], selection: &Selection) -> Vec<&'a User> {
	suggestions
		.iter()
		.filter(|user| !selection.contains(user))
		.collect()
}

impl App {
	/// Construct an [`App`] that fetches suggestions from `source` on a
	/// background worker.
	pub fn new(source: Box<dyn UserSource>) -> Self {
		let (tx, rx, latest_query_id) = search::spawn(source);
		Self::with_search(SearchRuntime::new(tx, rx, latest_query_id))
	}

	pub(crate) fn with_search(search: SearchRuntime) -> Self {
		Self {
			input: QueryInput::default(),
			suggestions: Vec::new(),
			selection: Selection::new(),
			focused: 0,
			focus: Focus::Input,
			ui: UiLabels::default(),
			style: StyleConfig::default(),
			throbber_state: ThrobberState::default(),
			search,
			list_state: ListState::default(),
			hit: HitAreas::default(),
		}
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.ui = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.style.theme = theme;
		self
	}

	/// Seed the search field and fire the corresponding query.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.set_search_term(query);
		self
	}

	#[must_use]
	pub fn search_term(&self) -> &str {
		self.input.text()
	}

	/// Replace the search term and run the query effect.
	pub fn set_search_term(&mut self, text: impl Into<String>) {
		self.input.set_text(text);
		self.request_search();
	}

	#[must_use]
	pub fn suggestions(&self) -> &[User] {
		&self.suggestions
	}

	#[must_use]
	pub fn selected_users(&self) -> &[User] {
		self.selection.users()
	}

	#[must_use]
	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	#[must_use]
	pub fn focused_index(&self) -> usize {
		self.focused
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	#[must_use]
	pub fn visible_suggestions(&self) -> Vec<&User> {
		visible_users(&self.suggestions, &self.selection)
	}

	/// Number of suggestion rows currently rendered.
	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.suggestions
			.iter()
			.filter(|user| !self.selection.contains(user))
			.count()
	}

	/// Add `user` to the selection, then reset the search and hand focus back
	/// to the text field. Users already selected (by email) are ignored.
	pub fn select_user(&mut self, user: User) -> bool {
		let name = user.full_name();
		if !self.selection.insert(user) {
			tracing::debug!(%name, "user already selected");
			return false;
		}
		tracing::info!(%name, selected = self.selection.len(), "user selected");

		self.input.clear();
		self.search.cancel();
		self.clear_suggestions();
		self.focus = Focus::Input;
		true
	}

	/// Select the suggestion under the keyboard highlight.
	pub fn select_focused(&mut self) -> bool {
		let Some(user) = self.visible_suggestions().get(self.focused).map(|u| (*u).clone()) else {
			return false;
		};
		self.select_user(user)
	}

	/// Remove the selected user whose id matches `user.id`. Unknown ids are a
	/// silent no-op.
	pub fn remove_user(&mut self, user: &User) -> bool {
		self.remove_user_by_id(user.id)
	}

	pub(crate) fn remove_user_by_id(&mut self, id: u64) -> bool {
		let Some(removed) = self.selection.remove_by_id(id) else {
			return false;
		};
		tracing::info!(name = %removed.full_name(), selected = self.selection.len(), "user removed");
		self.after_removal();
		true
	}

	/// Drop the most recently selected user and clear the suggestions.
	pub fn remove_last_user(&mut self) -> bool {
		let Some(removed) = self.selection.pop() else {
			return false;
		};
		tracing::info!(name = %removed.full_name(), selected = self.selection.len(), "last user removed");
		self.clear_suggestions();
		self.after_removal();
		true
	}

	fn after_removal(&mut self) {
		if let Focus::Pill(index) = self.focus {
			self.focus = match self.selection.len() {
				0 => Focus::Input,
				len => Focus::Pill(index.min(len - 1)),
			};
		}
		self.ensure_focus_in_range();
	}

	pub(crate) fn move_focus_up(&mut self) {
		if self.focused > 0 {
			self.focused -= 1;
		}
	}

	pub(crate) fn move_focus_down(&mut self) {
		if self.focused + 1 < self.visible_len() {
			self.focused += 1;
		}
	}

	/// Clamp the focused index into `[0, visible_len)`, or 0 when nothing is visible.
	pub(crate) fn ensure_focus_in_range(&mut self) {
		let len = self.visible_len();
		self.focused = if len == 0 { 0 } else { self.focused.min(len - 1) };
	}

	pub(crate) fn clear_suggestions(&mut self) {
		self.suggestions.clear();
		self.focused = 0;
		*self.list_state.offset_mut() = 0;
	}

	/// Snapshot the current state as a final result.
	#[must_use]
	pub fn outcome(&self, accepted: bool) -> SelectionOutcome {
		SelectionOutcome {
			accepted,
			query: self.input.text().to_string(),
			users: self.selection.users().to_vec(),
		}
	}
}
