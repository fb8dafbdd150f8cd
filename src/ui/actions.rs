use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::state::{App, Focus, SelectionOutcome};

impl App {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<SelectionOutcome> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Some(self.outcome(false));
		}

		if let Focus::Pill(index) = self.focus {
			return self.handle_pill_key(key, index);
		}

		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Enter => {
				if self.visible_len() > 0 {
					self.select_focused();
				} else if self.input.text().trim().is_empty() {
					return Some(self.outcome(true));
				}
			}
			KeyCode::Tab | KeyCode::BackTab => {
				if let Some(last) = self.selection.len().checked_sub(1) {
					self.focus = Focus::Pill(last);
				}
			}
			KeyCode::Down => self.move_focus_down(),
			KeyCode::Up => self.move_focus_up(),
			KeyCode::Backspace if self.input.is_empty() && !self.selection.is_empty() => {
				self.remove_last_user();
			}
			_ => self.edit_input(key),
		}
		None
	}

	fn handle_pill_key(&mut self, key: KeyEvent, index: usize) -> Option<SelectionOutcome> {
		match key.code {
			KeyCode::Left => self.focus = Focus::Pill(index.saturating_sub(1)),
			KeyCode::Right => {
				let last = self.selection.len().saturating_sub(1);
				self.focus = Focus::Pill((index + 1).min(last));
			}
			KeyCode::Backspace | KeyCode::Delete | KeyCode::Enter => {
				if let Some(id) = self.selection.users().get(index).map(|user| user.id) {
					self.remove_user_by_id(id);
				}
			}
			KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => self.focus = Focus::Input,
			KeyCode::Char(_) => {
				self.focus = Focus::Input;
				self.edit_input(key);
			}
			_ => {}
		}
		None
	}

	fn edit_input(&mut self, key: KeyEvent) {
		if self.input.input(key) {
			self.request_search();
		}
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		let position = Position {
			x: mouse.column,
			y: mouse.row,
		};

		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(id) = self.pill_at(position) {
					self.remove_user_by_id(id);
				} else if let Some(index) = self.suggestion_at(position) {
					self.focused = index;
					self.select_focused();
				}
			}
			MouseEventKind::ScrollUp if self.over_suggestions(position) => self.move_focus_up(),
			MouseEventKind::ScrollDown if self.over_suggestions(position) => {
				self.move_focus_down();
			}
			_ => {}
		}
	}

	fn pill_at(&self, position: Position) -> Option<u64> {
		self.hit
			.pills
			.iter()
			.find(|(_, area)| area.contains(position))
			.map(|(id, _)| *id)
	}

	fn over_suggestions(&self, position: Position) -> bool {
		self.hit
			.suggestions
			.is_some_and(|area| area.contains(position))
	}

	/// Index into the visible suggestions of the row under `position`.
	fn suggestion_at(&self, position: Position) -> Option<usize> {
		let area = self.hit.suggestions?;
		if !area.contains(position) {
			return None;
		}
		let index = self.list_state.offset() + usize::from(position.y - area.y);
		(index < self.visible_len()).then_some(index)
	}
}
