use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, Paragraph};

use super::components::{PromptContext, ProgressState, build_suggestion_rows, render_prompt};
use super::state::{App, Focus, visible_users};

/// Symbol drawn in front of the keyboard-focused suggestion.
pub(crate) const HIGHLIGHT_SYMBOL: &str = "▌ ";

impl App {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(3), Constraint::Min(0)])
			.split(area);

		self.render_input(frame, layout[0]);
		self.render_suggestions(frame, layout[1]);
	}

	fn render_input(&mut self, frame: &mut Frame, area: Rect) {
		let theme = self.style.theme;
		let block = Block::bordered()
			.title(Span::styled(format!(" {} ", self.ui.title), theme.header_style()))
			.border_style(theme.prompt_style());
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let focused_pill = match self.focus {
			Focus::Pill(index) => Some(index),
			Focus::Input => None,
		};
		let ctx = PromptContext {
			users: self.selection.users(),
			input: &self.input,
			placeholder: &self.ui.placeholder,
			focused_pill,
			input_focused: self.focus == Focus::Input,
			theme: &theme,
		};
		let progress = ProgressState {
			label: &self.ui.searching_label,
			active: self.search.is_in_flight(),
			throbber_state: &self.throbber_state,
		};
		let layout = render_prompt(frame, inner, ctx, progress);

		self.hit.pills = layout.dismiss_areas;
		if let Some(cursor) = layout.cursor {
			frame.set_cursor_position(cursor);
		}
	}

	fn render_suggestions(&mut self, frame: &mut Frame, area: Rect) {
		self.hit.suggestions = None;
		if area.height == 0 {
			return;
		}

		let theme = self.style.theme;
		let visible = visible_users(&self.suggestions, &self.selection);
		let title = if visible.is_empty() {
			format!(" {} ", self.ui.list_title)
		} else {
			format!(" {} ({}) ", self.ui.list_title, visible.len())
		};
		let block = Block::bordered()
			.title(Span::styled(title, theme.header_style()))
			.title_bottom(Line::from(Span::styled(
				format!(" {} ", self.ui.hint),
				theme.empty_style(),
			)))
			.border_style(theme.empty_style());
		let inner = block.inner(area);

		if visible.is_empty() {
			let message = self.empty_message();
			frame.render_widget(block, area);
			if !message.is_empty() && inner.height > 0 {
				let empty = Paragraph::new(Span::styled(message, theme.empty_style()))
					.alignment(Alignment::Center);
				frame.render_widget(empty, inner);
			}
			return;
		}

		let rows = build_suggestion_rows(&visible, self.input.text(), &theme);
		let list = List::new(rows)
			.block(block)
			.highlight_style(theme.row_highlight_style())
			.highlight_symbol(HIGHLIGHT_SYMBOL);

		self.list_state.select(Some(self.focused));
		frame.render_stateful_widget(list, area, &mut self.list_state);
		self.hit.suggestions = Some(inner);
	}

	fn empty_message(&self) -> String {
		if self.input.text().trim().is_empty() {
			String::new()
		} else if self.search.is_in_flight() {
			format!("{}…", self.ui.searching_label.trim())
		} else {
			self.ui.empty_label.clone()
		}
	}
}
