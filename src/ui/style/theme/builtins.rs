use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeRegistration};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
	row_highlight: Style::new()
		.bg(Color::Rgb(51, 65, 85))
		.fg(Color::Rgb(224, 242, 254)),
	prompt: Style::new().fg(Color::Rgb(125, 211, 252)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	highlight: Style::new()
		.fg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
	pill: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(51, 65, 85)),
	pill_focused: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(125, 211, 252)),
	pill_dismiss: Style::new().fg(Color::Rgb(248, 113, 113)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(173, 216, 230))
		.fg(Color::Rgb(15, 23, 42)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	pill: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	pill_focused: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(0, 102, 153)),
	pill_dismiss: Style::new().fg(Color::Rgb(185, 28, 28)),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(7, 54, 66)),
	row_highlight: Style::new()
		.bg(Color::Rgb(0, 43, 54))
		.fg(Color::Rgb(181, 137, 0)),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	highlight: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	pill: Style::new()
		.fg(Color::Rgb(238, 232, 213))
		.bg(Color::Rgb(7, 54, 66)),
	pill_focused: Style::new()
		.fg(Color::Rgb(0, 43, 54))
		.bg(Color::Rgb(42, 161, 152)),
	pill_dismiss: Style::new().fg(Color::Rgb(220, 50, 47)),
};

pub fn default_theme() -> Theme {
	SLATE
}

pub(super) fn registrations() -> Vec<ThemeRegistration> {
	vec![
		ThemeRegistration::new("slate", SLATE).alias("default").alias("dark"),
		ThemeRegistration::new("light", LIGHT),
		ThemeRegistration::new("solarized", SOLARIZED).alias("solarized-dark"),
	]
}
