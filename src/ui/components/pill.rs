//! Removable token representing one selected user.

use std::borrow::Cow;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::avatar::{AVATAR_WIDTH, avatar_span};

/// Glyph the user clicks to dismiss a pill.
pub const DISMISS_GLYPH: &str = "✕";

/// Cells the dismiss affordance occupies at the right edge of a pill.
const DISMISS_WIDTH: u16 = 2;

/// Everything except the text: avatar, two spaces, dismiss glyph and padding.
const CHROME_WIDTH: u16 = AVATAR_WIDTH + 2 + DISMISS_WIDTH;

/// A selected user drawn as `[avatar] text ✕`.
///
/// Stateless: the host records [`Pill::dismiss_area`] while rendering and
/// routes clicks inside it to its own removal handler.
#[derive(Debug, Clone)]
pub struct Pill<'a> {
	image: &'a str,
	text: &'a str,
	style: Style,
	dismiss_style: Style,
}

impl<'a> Pill<'a> {
	#[must_use]
	pub fn new(image: &'a str, text: &'a str) -> Self {
		Self {
			image,
			text,
			style: Style::default(),
			dismiss_style: Style::default(),
		}
	}

	#[must_use]
	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	#[must_use]
	pub fn dismiss_style(mut self, style: Style) -> Self {
		self.dismiss_style = style;
		self
	}

	/// Total width in cells.
	#[must_use]
	pub fn width(&self) -> u16 {
		let text = u16::try_from(self.text.width()).unwrap_or(u16::MAX);
		AVATAR_WIDTH
			.saturating_add(1)
			.saturating_add(text)
			.saturating_add(1)
			.saturating_add(DISMISS_WIDTH)
	}

	/// Clickable region of the dismiss glyph when the pill is drawn at `area`.
	///
	/// Empty when `area` is too narrow to show the glyph at all.
	#[must_use]
	pub fn dismiss_area(&self, area: Rect) -> Rect {
		let Some(text) = self.fitted_text(area.width) else {
			return Rect::new(area.x, area.y, 0, 0);
		};
		let drawn = CHROME_WIDTH.saturating_add(text_width(&text));
		Rect {
			x: area.x.saturating_add(drawn - DISMISS_WIDTH),
			y: area.y,
			width: DISMISS_WIDTH,
			height: area.height.min(1),
		}
	}

	/// Text as drawn in `width` columns, shortened with `…` when needed.
	/// `None` when not even the avatar and glyph fit.
	fn fitted_text(&self, width: u16) -> Option<Cow<'a, str>> {
		if width >= self.width() {
			return Some(Cow::Borrowed(self.text));
		}
		let room = width.checked_sub(CHROME_WIDTH)?;
		Some(Cow::Owned(truncate_to_width(self.text, usize::from(room))))
	}

	fn line(&self, text: Cow<'a, str>) -> Line<'a> {
		let dismiss_style = self.style.patch(self.dismiss_style);
		Line::from(vec![
			avatar_span(self.image, self.text),
			Span::styled(" ", self.style),
			Span::styled(text, self.style),
			Span::styled(" ", self.style),
			Span::styled(DISMISS_GLYPH, dismiss_style),
			Span::styled(" ", self.style),
		])
	}
}

impl Widget for Pill<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.is_empty() {
			return;
		}
		let text = self
			.fitted_text(area.width)
			.unwrap_or(Cow::Borrowed(self.text));
		self.line(text).render(area, buf);
	}
}

fn text_width(text: &str) -> u16 {
	u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Cut `text` to at most `room` columns, ending in `…` when anything was cut.
fn truncate_to_width(text: &str, room: usize) -> String {
	if text.width() <= room {
		return text.to_string();
	}
	let Some(budget) = room.checked_sub(1) else {
		return String::new();
	};
	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let width = ch.width().unwrap_or(0);
		if used + width > budget {
			break;
		}
		used += width;
		out.push(ch);
	}
	out.push('…');
	out
}
