use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Badge colours an avatar can land on.
const PALETTE: [Color; 8] = [
	Color::Rgb(239, 68, 68),
	Color::Rgb(249, 115, 22),
	Color::Rgb(234, 179, 8),
	Color::Rgb(34, 197, 94),
	Color::Rgb(20, 184, 166),
	Color::Rgb(59, 130, 246),
	Color::Rgb(139, 92, 246),
	Color::Rgb(236, 72, 153),
];

/// Cells taken by an avatar badge, padding included.
pub const AVATAR_WIDTH: u16 = 4;

/// Up to two uppercase initials taken from the words of `name`.
#[must_use]
pub fn initials(name: &str) -> String {
	let initials: String = name
		.split_whitespace()
		.filter_map(|word| word.chars().next())
		.flat_map(char::to_uppercase)
		.take(2)
		.collect();
	if initials.is_empty() {
		"?".to_string()
	} else {
		initials
	}
}

/// Stable badge colour for an avatar image URL (FNV-1a over the bytes).
#[must_use]
pub fn avatar_color(image: &str) -> Color {
	let hash = image
		.bytes()
		.fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
			(hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
		});
	PALETTE[(hash % PALETTE.len() as u64) as usize]
}

/// Terminal stand-in for an avatar picture: initials on a colour keyed by the
/// image URL, padded to [`AVATAR_WIDTH`] cells.
#[must_use]
pub fn avatar_span(image: &str, name: &str) -> Span<'static> {
	let initials = initials(name);
	let label = format!("{initials:^width$}", width = usize::from(AVATAR_WIDTH));
	Span::styled(
		label,
		Style::new().fg(Color::Rgb(15, 23, 42)).bg(avatar_color(image)),
	)
}
