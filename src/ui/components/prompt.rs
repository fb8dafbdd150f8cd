use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::pill::Pill;
use crate::ui::input::QueryInput;
use crate::ui::style::Theme;
use crate::users::User;

/// Columns kept free for typing before pills start collapsing.
pub const MIN_INPUT_WIDTH: u16 = 12;

/// Argument bundle for rendering the pill row and text field.
pub struct PromptContext<'a> {
	pub users: &'a [User],
	pub input: &'a QueryInput,
	pub placeholder: &'a str,
	pub focused_pill: Option<usize>,
	pub input_focused: bool,
	pub theme: &'a Theme,
}

/// Progress information for the in-flight indicator.
pub struct ProgressState<'a> {
	pub label: &'a str,
	pub active: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Where things landed, for mouse hit-testing and cursor placement.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PromptLayout {
	/// `(user id, dismiss area)` for every pill actually drawn.
	pub dismiss_areas: Vec<(u64, Rect)>,
	/// Number of pills not drawn, shown as the `+N` marker.
	pub hidden: usize,
	pub cursor: Option<Position>,
}

/// Indices `start..end` of the pills that fit in `budget` columns, keeping
/// `focused` (or the newest pill) visible. Pills are separated by one column
/// and every pill outside the window is counted by the `+N` marker.
///
/// The window never comes back empty for a non-empty selection: when not even
/// the anchor fits, it is returned alone and drawn shortened.
pub(crate) fn visible_pill_window(
	widths: &[u16],
	budget: u16,
	focused: Option<usize>,
) -> (usize, usize) {
	if widths.is_empty() {
		return (0, 0);
	}

	let fits = |start: usize, end: usize| -> bool {
		let used: u32 = widths[start..end]
			.iter()
			.map(|w| u32::from(*w) + 1)
			.sum::<u32>();
		let hidden = widths.len() - (end - start);
		let marker = if hidden > 0 {
			u32::from(marker_width(hidden))
		} else {
			0
		};
		used + marker <= u32::from(budget)
	};

	let anchor = focused.unwrap_or(widths.len() - 1).min(widths.len() - 1);
	let mut end = widths.len();
	let mut start = end;
	while start > 0 && fits(start - 1, end) {
		start -= 1;
	}

	if anchor < start {
		start = anchor;
		end = anchor;
		while end < widths.len() && fits(start, end + 1) {
			end += 1;
		}
	}

	if start == end {
		return (anchor, anchor + 1);
	}
	(start, end)
}

fn marker_label(hidden: usize) -> String {
	format!("+{hidden} ")
}

fn marker_width(hidden: usize) -> u16 {
	u16::try_from(marker_label(hidden).width()).unwrap_or(u16::MAX)
}

/// Render pills followed by the text field on the first row of `area`.
pub fn render_prompt(
	frame: &mut Frame,
	area: Rect,
	ctx: PromptContext<'_>,
	progress: ProgressState<'_>,
) -> PromptLayout {
	let mut layout = PromptLayout::default();
	if area.width == 0 || area.height == 0 {
		return layout;
	}
	let row = Rect { height: 1, ..area };

	let names: Vec<String> = ctx.users.iter().map(User::full_name).collect();
	let pills: Vec<Pill<'_>> = ctx
		.users
		.iter()
		.zip(&names)
		.enumerate()
		.map(|(index, (user, name))| {
			let style = if ctx.focused_pill == Some(index) {
				ctx.theme.pill_focused
			} else {
				ctx.theme.pill
			};
			Pill::new(&user.image, name)
				.style(style)
				.dismiss_style(ctx.theme.pill_dismiss)
		})
		.collect();
	let widths: Vec<u16> = pills.iter().map(Pill::width).collect();

	let budget = row.width.saturating_sub(MIN_INPUT_WIDTH);
	let (start, end) = visible_pill_window(&widths, budget, ctx.focused_pill);
	let hidden = widths.len() - (end - start);
	layout.hidden = hidden;

	let mut x = row.x;
	if hidden > 0 {
		let label = marker_label(hidden);
		let width = marker_width(hidden).min(row.right().saturating_sub(x));
		let marker = Paragraph::new(Span::styled(label, ctx.theme.empty_style()));
		frame.render_widget(marker, Rect { x, width, ..row });
		x = x.saturating_add(width);
	}

	// A lone pill wider than the budget is shortened to stay inside it.
	let pill_limit = if budget > 0 {
		row.x.saturating_add(budget)
	} else {
		row.right()
	};
	for (pill, user) in pills
		.into_iter()
		.zip(ctx.users)
		.skip(start)
		.take(end - start)
	{
		let width = pill.width().min(pill_limit.saturating_sub(x));
		if width == 0 {
			break;
		}
		let pill_area = Rect { x, width, ..row };
		let dismiss = pill.dismiss_area(pill_area);
		if !dismiss.is_empty() {
			layout.dismiss_areas.push((user.id, dismiss));
		}
		frame.render_widget(pill, pill_area);
		x = x.saturating_add(width).saturating_add(1);
	}

	let mut input_area = Rect {
		x: x.min(row.right()),
		width: row.right().saturating_sub(x),
		..row
	};

	if progress.active && !progress.label.is_empty() {
		input_area.width = render_progress(frame, input_area, progress, ctx.theme);
	}

	let (visible, cursor_column) = ctx.input.visible(input_area.width);
	let line = if ctx.input.is_empty() {
		Line::from(Span::styled(ctx.placeholder.to_string(), ctx.theme.empty_style()))
	} else {
		Line::from(Span::styled(visible, ctx.theme.prompt_style()))
	};
	frame.render_widget(Paragraph::new(line), input_area);

	if ctx.input_focused && input_area.width > 0 {
		layout.cursor = Some(Position {
			x: input_area.x.saturating_add(cursor_column),
			y: input_area.y,
		});
	}

	layout
}

/// Draw the spinner and label right-aligned in `area`; returns the width left
/// over for the text field.
fn render_progress(
	frame: &mut Frame,
	area: Rect,
	progress: ProgressState<'_>,
	theme: &Theme,
) -> u16 {
	let muted_style = theme.empty_style();
	let spinner = Throbber::default()
		.style(muted_style)
		.throbber_style(muted_style);
	let mut line = Line::default();
	line.spans.push(spinner.to_symbol_span(progress.throbber_state));
	line.spans
		.push(Span::styled(progress.label.to_string(), muted_style));

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	if line_width.saturating_add(MIN_INPUT_WIDTH) > area.width {
		return area.width;
	}

	let remaining = area.width - line_width;
	let progress_area = Rect {
		x: area.x + remaining,
		width: line_width,
		..area
	};
	frame.render_widget(Paragraph::new(line), progress_area);
	remaining.saturating_sub(1)
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn long_named(id: u64) -> User {
		User {
			id,
			email: format!("u{id}@x.com"),
			first_name: "Bartholomew".into(),
			last_name: format!("Featherstonehaugh{id}"),
			image: String::new(),
		}
	}

	fn render_row(users: &[User], width: u16) -> (PromptLayout, String) {
		let mut terminal = Terminal::new(TestBackend::new(width, 1)).expect("terminal");
		let input = QueryInput::default();
		let theme = Theme::default();
		let throbber_state = ThrobberState::default();
		let mut layout = PromptLayout::default();
		terminal
			.draw(|frame| {
				let ctx = PromptContext {
					users,
					input: &input,
					placeholder: "",
					focused_pill: None,
					input_focused: true,
					theme: &theme,
				};
				let progress = ProgressState {
					label: "",
					active: false,
					throbber_state: &throbber_state,
				};
				layout = render_prompt(frame, frame.area(), ctx, progress);
			})
			.expect("draw");
		let buf = terminal.backend().buffer();
		let text = (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
		(layout, text)
	}

	#[test]
	fn single_wide_pill_is_shortened_not_dropped() {
		let (layout, text) = render_row(&[long_named(1)], 30);
		assert_eq!(layout.hidden, 0);
		assert_eq!(layout.dismiss_areas.len(), 1);
		assert!(text.contains('…'), "shortened name in {text:?}");
		assert!(text.contains('✕'));
	}

	#[test]
	fn marker_counts_every_pill_not_drawn() {
		let users = [long_named(1), long_named(2), long_named(3)];
		let (layout, text) = render_row(&users, 30);
		assert_eq!(layout.hidden, 2);
		assert!(text.starts_with("+2 "), "marker in {text:?}");
		assert_eq!(layout.dismiss_areas.len(), 1);
		assert_eq!(layout.dismiss_areas[0].0, 3);
	}

	#[test]
	fn everything_fits_when_budget_allows() {
		assert_eq!(visible_pill_window(&[5, 5, 5], 30, None), (0, 3));
	}

	#[test]
	fn leading_pills_collapse_first() {
		// Each pill costs 6 columns; two pills plus a "+1 " marker fit in 15.
		assert_eq!(visible_pill_window(&[5, 5, 5], 15, None), (1, 3));
	}

	#[test]
	fn focused_pill_stays_visible() {
		assert_eq!(visible_pill_window(&[5, 5, 5, 5], 15, Some(0)), (0, 2));
	}

	#[test]
	fn lone_oversized_pill_is_still_drawn() {
		assert_eq!(visible_pill_window(&[30], 10, None), (0, 1));
	}

	#[test]
	fn oversized_pills_keep_newest_and_count_the_rest() {
		let (start, end) = visible_pill_window(&[30, 30, 30], 10, None);
		assert_eq!((start, end), (2, 3));
		assert_eq!(3 - (end - start), 2);
	}

	#[test]
	fn marker_counts_pills_hidden_after_the_focused_one() {
		// Focus on the first pill pushes later ones out of the window.
		let (start, end) = visible_pill_window(&[5, 5, 5, 5], 15, Some(0));
		assert_eq!((start, end), (0, 2));
	}

	#[test]
	fn no_pills_no_window() {
		assert_eq!(visible_pill_window(&[], 10, None), (0, 0));
	}
}
