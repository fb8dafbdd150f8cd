use std::collections::HashSet;

use frizbee::{Config, match_indices};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use super::avatar::avatar_span;
use crate::ui::style::Theme;
use crate::users::User;

/// Create match indices for the provided needle and text.
#[must_use]
pub fn highlight_for_refs(needle: &str, config: &Config, text: &str) -> Option<Vec<usize>> {
	if text.is_empty() || needle.is_empty() {
		return None;
	}
	match_indices(needle, text, config).map(|m| m.indices)
}

fn highlight_config() -> Config {
	Config {
		prefilter: false,
		max_typos: None,
		..Config::default()
	}
}

/// Split `text` into spans, styling the characters at `indices` with `highlight`.
fn highlighted_spans<'a>(
	text: &str,
	indices: Option<Vec<usize>>,
	base: Style,
	highlight: Style,
) -> Vec<Span<'a>> {
	let Some(indices) = indices else {
		return vec![Span::styled(text.to_string(), base)];
	};
	let indices: HashSet<usize> = indices.into_iter().collect();

	let mut spans = Vec::new();
	let mut run = String::new();
	let mut run_is_match = false;
	for (offset, ch) in text.char_indices() {
		let is_match = indices.contains(&offset);
		if is_match != run_is_match && !run.is_empty() {
			let style = if run_is_match { highlight } else { base };
			spans.push(Span::styled(std::mem::take(&mut run), style));
		}
		run_is_match = is_match;
		run.push(ch);
	}
	if !run.is_empty() {
		let style = if run_is_match { highlight } else { base };
		spans.push(Span::styled(run, style));
	}
	spans
}

/// Build one list row per visible suggestion: avatar, full name with the
/// matched characters highlighted, then the email.
#[must_use]
pub fn build_suggestion_rows<'a>(users: &[&User], term: &str, theme: &Theme) -> Vec<ListItem<'a>> {
	let needle = term.trim();
	let config = highlight_config();

	users
		.iter()
		.map(|user| {
			let name = user.full_name();
			let indices = highlight_for_refs(needle, &config, &name);

			let mut spans = vec![avatar_span(&user.image, &name), Span::raw(" ")];
			spans.extend(highlighted_spans(
				&name,
				indices,
				Style::default(),
				theme.highlight_style(),
			));
			spans.push(Span::raw("  "));
			spans.push(Span::styled(user.email.clone(), theme.empty_style()));
			ListItem::new(Line::from(spans))
		})
		.collect()
}
