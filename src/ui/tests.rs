use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::search::{SearchCommand, SearchResult, SearchRuntime};
use crate::ui::{App, Focus, SelectionOutcome};
use crate::users::{SearchError, User, UserSource};

fn user(id: u64, first: &str, last: &str, email: &str) -> User {
	User {
		id,
		email: email.to_string(),
		first_name: first.to_string(),
		last_name: last.to_string(),
		image: format!("https://example.com/{id}.png"),
	}
}

fn al() -> User {
	user(1, "Al", "B", "a@x.com")
}

fn bo() -> User {
	user(2, "Bo", "C", "b@x.com")
}

fn cy() -> User {
	user(3, "Cy", "D", "c@x.com")
}

/// App wired to hand-driven channels instead of a worker thread.
struct Harness {
	app: App,
	commands: Receiver<SearchCommand>,
	results: Sender<SearchResult>,
}

impl Harness {
	fn new() -> Self {
		let (command_tx, commands) = mpsc::channel();
		let (results, result_rx) = mpsc::channel();
		let runtime = SearchRuntime::new(command_tx, result_rx, Arc::new(AtomicU64::new(0)));
		Self {
			app: App::with_search(runtime),
			commands,
			results,
		}
	}

	/// Every query the app has sent so far, as `(id, term)`.
	fn drain_queries(&self) -> Vec<(u64, String)> {
		self.commands
			.try_iter()
			.filter_map(|command| match command {
				SearchCommand::Query { id, term } => Some((id, term)),
				SearchCommand::Shutdown => None,
			})
			.collect()
	}

	fn reply(&mut self, id: u64, term: &str, outcome: Result<Vec<User>, SearchError>) {
		self.results
			.send(SearchResult {
				id,
				term: term.to_string(),
				outcome,
			})
			.unwrap();
		self.app.pump_search_results();
	}

	/// Answer the newest pending query with `users`.
	fn answer_latest(&mut self, users: Vec<User>) {
		let (id, term) = self
			.drain_queries()
			.pop()
			.expect("a query should be pending");
		self.reply(id, &term, Ok(users));
	}

	fn press(&mut self, code: KeyCode) -> Option<SelectionOutcome> {
		self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn type_text(&mut self, text: &str) {
		for ch in text.chars() {
			self.press(KeyCode::Char(ch));
		}
	}

	fn search_with(&mut self, term: &str, users: Vec<User>) {
		self.type_text(term);
		self.answer_latest(users);
	}

	fn click(&mut self, column: u16, row: u16) {
		self.app.handle_mouse(left_click(column, row));
	}
}

fn left_click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn decode_error() -> SearchError {
	SearchError::Decode(serde_json::from_str::<serde_json::Value>("{").unwrap_err())
}

fn assert_emails_consistent(app: &App) {
	let expected: HashSet<String> = app
		.selected_users()
		.iter()
		.map(|u| u.email.clone())
		.collect();
	assert_eq!(app.selection().emails(), &expected);
}

fn render(app: &mut App, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

#[test]
fn selecting_a_suggestion_appends_it_and_hides_its_row() {
	let mut h = Harness::new();
	h.search_with("al", vec![al()]);
	assert_eq!(h.app.visible_len(), 1);

	assert!(h.app.select_user(al()));

	assert_eq!(h.app.selected_users(), &[al()]);
	assert!(h.app.selection().contains_email("a@x.com"));

	// Even if the same suggestion comes back, it is no longer visible.
	h.search_with("al", vec![al()]);
	assert_eq!(h.app.suggestions().len(), 1);
	assert_eq!(h.app.visible_len(), 0);
	assert_emails_consistent(&h.app);
}

#[test]
fn selecting_resets_search_and_returns_focus_to_input() {
	let mut h = Harness::new();
	h.app.select_user(bo());
	h.press(KeyCode::Tab);
	assert_eq!(h.app.focus(), Focus::Pill(0));

	h.app.focus = Focus::Input;
	h.search_with("al", vec![al(), cy()]);
	h.press(KeyCode::Down);
	h.app.focus = Focus::Pill(0);

	assert!(h.app.select_user(al()));
	assert_eq!(h.app.search_term(), "");
	assert!(h.app.suggestions().is_empty());
	assert_eq!(h.app.focused_index(), 0);
	assert_eq!(h.app.focus(), Focus::Input);
}

#[test]
fn backspace_on_empty_field_removes_only_the_last_pill() {
	let mut h = Harness::new();
	h.app.select_user(al());
	h.app.select_user(bo());

	h.press(KeyCode::Backspace);

	assert_eq!(h.app.selected_users(), &[al()]);
	assert!(h.app.selection().contains_email("a@x.com"));
	assert!(!h.app.selection().contains_email("b@x.com"));
	assert!(h.app.suggestions().is_empty());
	assert_emails_consistent(&h.app);
}

#[test]
fn backspace_with_text_edits_instead_of_removing() {
	let mut h = Harness::new();
	h.app.select_user(al());
	h.type_text("bo");

	h.press(KeyCode::Backspace);

	assert_eq!(h.app.search_term(), "b");
	assert_eq!(h.app.selected_users().len(), 1);
}

#[test]
fn backspace_with_nothing_selected_is_harmless() {
	let mut h = Harness::new();
	assert!(h.press(KeyCode::Backspace).is_none());
	assert!(h.app.selected_users().is_empty());
	assert!(h.drain_queries().is_empty());
}

#[test]
fn clearing_the_term_empties_suggestions_without_a_request() {
	let mut h = Harness::new();
	h.app.set_search_term("al");
	h.answer_latest(vec![al(), bo()]);
	assert_eq!(h.app.suggestions().len(), 2);

	h.app.set_search_term("");

	assert!(h.app.suggestions().is_empty());
	assert!(h.drain_queries().is_empty(), "no request for an empty term");
	assert!(!h.app.is_searching());
}

#[test]
fn whitespace_only_terms_never_hit_the_network() {
	let mut h = Harness::new();
	h.type_text("   ");
	assert!(h.drain_queries().is_empty());
	assert_eq!(h.app.search_term(), "   ");
}

#[test]
fn raw_term_is_sent_untrimmed() {
	let mut h = Harness::new();
	h.app.set_search_term(" al ");
	let queries = h.drain_queries();
	assert_eq!(queries.len(), 1);
	assert_eq!(queries[0].1, " al ");
}

#[test]
fn focused_index_never_leaves_the_visible_range() {
	let mut h = Harness::new();
	h.search_with("x", vec![al(), bo(), cy()]);

	h.press(KeyCode::Up);
	assert_eq!(h.app.focused_index(), 0, "no negative index, no wraparound");

	for _ in 0..5 {
		h.press(KeyCode::Down);
	}
	assert_eq!(h.app.focused_index(), 2, "stops at the last visible row");

	// Selecting Cy elsewhere shrinks the visible list under the cursor.
	h.app.selection.insert(cy());
	h.app.ensure_focus_in_range();
	assert_eq!(h.app.focused_index(), 1);
	h.press(KeyCode::Down);
	assert_eq!(h.app.focused_index(), 1);
}

#[test]
fn down_is_a_no_op_without_suggestions() {
	let mut h = Harness::new();
	h.press(KeyCode::Down);
	assert_eq!(h.app.focused_index(), 0);
}

#[test]
fn stale_responses_never_overwrite_newer_results() {
	let mut h = Harness::new();
	h.type_text("al");
	let queries = h.drain_queries();
	assert_eq!(queries.len(), 2);
	let (old_id, old_term) = queries[0].clone();
	let (new_id, new_term) = queries[1].clone();

	h.reply(new_id, &new_term, Ok(vec![al()]));
	h.reply(old_id, &old_term, Ok(vec![al(), bo(), cy()]));

	assert_eq!(h.app.suggestions(), &[al()]);
	assert!(!h.app.is_searching());
}

#[test]
fn responses_after_clearing_are_discarded() {
	let mut h = Harness::new();
	h.app.set_search_term("al");
	let (id, term) = h.drain_queries().pop().unwrap();

	h.app.set_search_term("");
	h.reply(id, &term, Ok(vec![al()]));

	assert!(h.app.suggestions().is_empty());
}

#[test]
fn failed_search_keeps_previous_suggestions() {
	let mut h = Harness::new();
	h.search_with("a", vec![al(), bo()]);

	h.type_text("l");
	let (id, term) = h.drain_queries().pop().unwrap();
	h.reply(id, &term, Err(decode_error()));

	assert_eq!(h.app.suggestions(), &[al(), bo()]);
	assert!(!h.app.is_searching());
}

#[test]
fn enter_picks_the_focused_row() {
	let mut h = Harness::new();
	h.search_with("o", vec![al(), bo()]);
	h.press(KeyCode::Down);

	assert!(h.press(KeyCode::Enter).is_none());
	assert_eq!(h.app.selected_users(), &[bo()]);
}

#[test]
fn enter_on_empty_field_accepts_and_esc_cancels() {
	let mut h = Harness::new();
	h.app.select_user(al());

	let outcome = h.press(KeyCode::Enter).expect("finish");
	assert!(outcome.accepted);
	assert_eq!(outcome.users, vec![al()]);

	let outcome = h.press(KeyCode::Esc).expect("cancel");
	assert!(!outcome.accepted);
}

#[test]
fn enter_with_unmatched_text_does_nothing() {
	let mut h = Harness::new();
	h.search_with("zz", Vec::new());
	assert!(h.press(KeyCode::Enter).is_none());
}

#[test]
fn ctrl_c_cancels_from_any_focus() {
	let mut h = Harness::new();
	h.app.select_user(al());
	h.press(KeyCode::Tab);
	let outcome = h
		.app
		.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
		.expect("cancel");
	assert!(!outcome.accepted);
}

#[test]
fn pill_focus_navigates_and_removes() {
	let mut h = Harness::new();
	h.app.select_user(al());
	h.app.select_user(bo());
	h.app.select_user(cy());

	h.press(KeyCode::Tab);
	assert_eq!(h.app.focus(), Focus::Pill(2));
	h.press(KeyCode::Left);
	h.press(KeyCode::Left);
	h.press(KeyCode::Left);
	assert_eq!(h.app.focus(), Focus::Pill(0));

	h.press(KeyCode::Delete);
	assert_eq!(h.app.selected_users(), &[bo(), cy()]);
	assert_eq!(h.app.focus(), Focus::Pill(0));
	assert_emails_consistent(&h.app);

	h.press(KeyCode::Right);
	h.press(KeyCode::Right);
	assert_eq!(h.app.focus(), Focus::Pill(1));

	// Typing jumps back to the field.
	h.press(KeyCode::Char('d'));
	assert_eq!(h.app.focus(), Focus::Input);
	assert_eq!(h.app.search_term(), "d");
}

#[test]
fn tab_without_pills_stays_in_input() {
	let mut h = Harness::new();
	h.press(KeyCode::Tab);
	assert_eq!(h.app.focus(), Focus::Input);
}

#[test]
fn remove_user_by_unknown_id_is_silent() {
	let mut h = Harness::new();
	h.app.select_user(al());
	assert!(!h.app.remove_user(&bo()));
	assert_eq!(h.app.selected_users(), &[al()]);
}

#[test]
fn email_set_mirrors_selection_through_mixed_operations() {
	let mut h = Harness::new();
	let pool = [al(), bo(), cy(), user(4, "Di", "E", "d@x.com")];

	for step in 0..40usize {
		let candidate = pool[step % pool.len()].clone();
		match step % 5 {
			0 | 1 => {
				h.app.select_user(candidate);
			}
			2 => {
				h.app.remove_user(&candidate);
			}
			3 => {
				h.press(KeyCode::Backspace);
			}
			_ => {
				h.app.select_user(pool[(step * 7) % pool.len()].clone());
			}
		}
		assert_emails_consistent(&h.app);
		let ids: HashSet<u64> = h.app.selected_users().iter().map(|u| u.id).collect();
		assert_eq!(ids.len(), h.app.selected_users().len(), "no duplicate ids");
	}
}

#[test]
fn render_shows_pills_before_input_and_omits_selected_rows() {
	let mut h = Harness::new();
	h.app.select_user(al());
	h.search_with("o", vec![al(), bo()]);

	let screen = render(&mut h.app, 70, 10);
	let lines: Vec<&str> = screen.lines().collect();

	let pill_row = lines[1];
	let pill_at = pill_row.find("Al B").expect("pill text on the input row");
	let term_at = pill_row.rfind('o').expect("search term on the input row");
	assert!(pill_at < term_at, "pills come before the text field");
	assert!(pill_row.contains('✕'));

	assert!(screen.contains("b@x.com"), "unselected suggestion is listed");
	assert!(!screen.contains("a@x.com"), "selected user has no row");
	assert!(screen.contains("Suggestions (1)"));
}

#[test]
fn render_shows_placeholder_for_empty_field() {
	let mut h = Harness::new();
	let screen = render(&mut h.app, 60, 8);
	assert!(screen.contains("Search for a user..."));
}

#[test]
fn render_reports_no_matches() {
	let mut h = Harness::new();
	h.search_with("zz", Vec::new());
	let screen = render(&mut h.app, 60, 8);
	assert!(screen.contains("No matching users"));
}

#[test]
fn clicking_a_row_selects_that_user() {
	let mut h = Harness::new();
	h.search_with("o", vec![al(), bo()]);
	render(&mut h.app, 60, 10);

	let area = h.app.hit.suggestions.expect("list drawn");
	h.click(area.x + 3, area.y + 1);

	assert_eq!(h.app.selected_users(), &[bo()]);
	assert!(h.app.suggestions().is_empty());
	assert_eq!(h.app.search_term(), "");
}

#[test]
fn clicking_a_pill_dismiss_glyph_removes_that_user() {
	let mut h = Harness::new();
	h.app.select_user(al());
	h.app.select_user(bo());
	render(&mut h.app, 70, 8);

	let (id, area) = h.app.hit.pills[0];
	assert_eq!(id, al().id);
	h.click(area.x, area.y);

	assert_eq!(h.app.selected_users(), &[bo()]);
	assert_emails_consistent(&h.app);
}

#[test]
fn clicking_pill_body_does_not_remove() {
	let mut h = Harness::new();
	h.app.select_user(al());
	render(&mut h.app, 70, 8);

	let (_, area) = h.app.hit.pills[0];
	h.click(area.x.saturating_sub(3), area.y);

	assert_eq!(h.app.selected_users(), &[al()]);
}

#[test]
fn narrow_screens_collapse_leading_pills() {
	let mut h = Harness::new();
	for id in 1..=6 {
		h.app
			.select_user(user(id, "Person", &format!("N{id}"), &format!("p{id}@x.com")));
	}
	let screen = render(&mut h.app, 50, 8);

	assert!(screen.contains('+'), "hidden pills are counted");
	assert!(screen.contains("Person N6"), "newest pill stays visible");
	assert!(h.app.hit.pills.len() < 6);
}

#[test]
fn lone_long_pill_on_narrow_screen_stays_visible() {
	let mut h = Harness::new();
	h.app
		.select_user(user(9, "Bartholomew", "Featherstonehaugh", "bf@x.com"));
	let screen = render(&mut h.app, 30, 8);
	let pill_row = screen.lines().nth(1).expect("input row");

	assert!(pill_row.contains("Barth"), "shortened pill in {pill_row:?}");
	assert!(pill_row.contains('✕'));
	assert_eq!(h.app.hit.pills.len(), 1);

	let (id, area) = h.app.hit.pills[0];
	h.click(area.x, area.y);
	assert_eq!(id, 9);
	assert!(h.app.selected_users().is_empty());
}

#[test]
fn queued_clicks_wait_for_a_fresh_layout() {
	let mut h = Harness::new();
	h.app.select_user(al());
	h.app.select_user(bo());
	render(&mut h.app, 70, 8);
	let (_, al_dismiss) = h.app.hit.pills[0];
	let (_, bo_dismiss) = h.app.hit.pills[1];

	let mut pending: VecDeque<Event> = VecDeque::from([
		Event::Mouse(left_click(al_dismiss.x, al_dismiss.y)),
		Event::Mouse(left_click(bo_dismiss.x, bo_dismiss.y)),
	]);

	assert!(h.app.dispatch_events(&mut pending).is_none());
	assert_eq!(h.app.selected_users(), &[bo()]);
	assert_eq!(pending.len(), 1, "second click is held for the next frame");

	// Bo's pill has shifted left, so the old glyph position is no longer a target.
	render(&mut h.app, 70, 8);
	h.app.dispatch_events(&mut pending);
	assert!(pending.is_empty());
	assert_eq!(h.app.selected_users(), &[bo()]);
}

#[test]
fn keys_in_one_batch_are_all_handled() {
	let mut h = Harness::new();
	let mut pending: VecDeque<Event> = "al"
		.chars()
		.map(|ch| Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)))
		.collect();

	assert!(h.app.dispatch_events(&mut pending).is_none());
	assert!(pending.is_empty());
	assert_eq!(h.app.search_term(), "al");
}

struct CountingSource {
	calls: Arc<AtomicUsize>,
	seen: Arc<Mutex<Vec<String>>>,
}

impl UserSource for CountingSource {
	fn search(&self, term: &str) -> Result<Vec<User>, SearchError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.seen.lock().unwrap().push(term.to_string());
		Ok(vec![al(), bo()]
			.into_iter()
			.filter(|u| u.full_name().to_lowercase().contains(&term.trim().to_lowercase()))
			.collect())
	}
}

fn wait_for_results(app: &mut App) {
	let deadline = Instant::now() + Duration::from_secs(1);
	while app.is_searching() && Instant::now() < deadline {
		std::thread::sleep(Duration::from_millis(10));
		app.pump_search_results();
	}
	app.pump_search_results();
}

#[test]
fn worker_backed_app_fetches_suggestions() {
	let calls = Arc::new(AtomicUsize::new(0));
	let seen = Arc::new(Mutex::new(Vec::new()));
	let source = CountingSource {
		calls: Arc::clone(&calls),
		seen: Arc::clone(&seen),
	};
	let mut app = App::new(Box::new(source)).with_initial_query("bo");
	wait_for_results(&mut app);

	assert_eq!(app.suggestions(), &[bo()]);
	assert_eq!(calls.load(Ordering::SeqCst), 1);

	app.set_search_term("");
	wait_for_results(&mut app);
	assert!(app.suggestions().is_empty());
	assert_eq!(calls.load(Ordering::SeqCst), 1, "empty term is never fetched");
	assert_eq!(*seen.lock().unwrap(), vec!["bo".to_string()]);
}
