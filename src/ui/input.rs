//! Single-line text input backing the search field.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// Editable query text with a character cursor.
#[derive(Debug, Clone, Default)]
pub struct QueryInput {
	text: String,
	/// Cursor position in chars, `0..=text.chars().count()`.
	cursor: usize,
}

impl QueryInput {
	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Replace the contents and park the cursor at the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = text.into();
		self.cursor = self.text.chars().count();
	}

	pub fn clear(&mut self) {
		self.text.clear();
		self.cursor = 0;
	}

	/// Apply an editing key. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('a') if ctrl => {
				self.cursor = 0;
				false
			}
			KeyCode::Char('e') if ctrl => {
				self.cursor = self.char_len();
				false
			}
			KeyCode::Char('u') if ctrl => self.delete_range(0, self.cursor),
			KeyCode::Char('w') if ctrl => {
				let start = self.previous_word_start();
				self.delete_range(start, self.cursor)
			}
			KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => false,
			KeyCode::Char(ch) => {
				let offset = self.byte_offset(self.cursor);
				self.text.insert(offset, ch);
				self.cursor += 1;
				true
			}
			KeyCode::Backspace if self.cursor > 0 => self.delete_range(self.cursor - 1, self.cursor),
			KeyCode::Delete if self.cursor < self.char_len() => {
				self.delete_range(self.cursor, self.cursor + 1)
			}
			KeyCode::Left => {
				self.cursor = self.cursor.saturating_sub(1);
				false
			}
			KeyCode::Right => {
				self.cursor = (self.cursor + 1).min(self.char_len());
				false
			}
			KeyCode::Home => {
				self.cursor = 0;
				false
			}
			KeyCode::End => {
				self.cursor = self.char_len();
				false
			}
			_ => false,
		}
	}

	/// The slice of text that fits in `width` columns while keeping the cursor
	/// visible, plus the cursor column relative to that slice.
	#[must_use]
	pub fn visible(&self, width: u16) -> (String, u16) {
		let width = usize::from(width);
		if width == 0 {
			return (String::new(), 0);
		}

		let chars: Vec<char> = self.text.chars().collect();
		let char_width = |ch: &char| ch.width().unwrap_or(0);

		// Walk left from the cursor until the window (plus one cell for the
		// cursor itself) is full.
		let mut start = self.cursor;
		let mut used = 1;
		while start > 0 {
			let w = char_width(&chars[start - 1]);
			if used + w > width {
				break;
			}
			used += w;
			start -= 1;
		}

		let mut visible = String::new();
		let mut columns = 0;
		let mut cursor_column = 0;
		for (index, ch) in chars.iter().enumerate().skip(start) {
			if index == self.cursor {
				cursor_column = columns;
			}
			let w = char_width(ch);
			if columns + w > width {
				break;
			}
			visible.push(*ch);
			columns += w;
		}
		if self.cursor >= chars.len() {
			cursor_column = columns;
		}

		let cursor_column = u16::try_from(cursor_column.min(width - 1)).unwrap_or(0);
		(visible, cursor_column)
	}

	fn char_len(&self) -> usize {
		self.text.chars().count()
	}

	fn byte_offset(&self, char_index: usize) -> usize {
		self.text
			.char_indices()
			.nth(char_index)
			.map(|(offset, _)| offset)
			.unwrap_or(self.text.len())
	}

	fn delete_range(&mut self, start: usize, end: usize) -> bool {
		if start >= end {
			return false;
		}
		let from = self.byte_offset(start);
		let to = self.byte_offset(end);
		self.text.replace_range(from..to, "");
		self.cursor = start;
		true
	}

	fn previous_word_start(&self) -> usize {
		let chars: Vec<char> = self.text.chars().take(self.cursor).collect();
		let mut index = chars.len();
		while index > 0 && chars[index - 1].is_whitespace() {
			index -= 1;
		}
		while index > 0 && !chars[index - 1].is_whitespace() {
			index -= 1;
		}
		index
	}
}
