//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::state::{App, SelectionOutcome};

impl App {
	/// Handle queued events until one ends the picker or a mouse event is
	/// next in line after something else ran. Mouse hits are resolved against
	/// the areas of the last draw, so such an event waits for the next frame.
	pub(crate) fn dispatch_events(
		&mut self,
		pending: &mut VecDeque<Event>,
	) -> Option<SelectionOutcome> {
		while let Some(event) = pending.pop_front() {
			match event {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key) {
						return Some(outcome);
					}
				}
				Event::Mouse(mouse) => self.handle_mouse(mouse),
				_ => {}
			}
			if matches!(pending.front(), Some(Event::Mouse(_))) {
				break;
			}
		}
		None
	}
}

/// Run `app` full-screen until the user accepts or cancels.
pub fn run(mut app: App) -> Result<SelectionOutcome> {
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<SelectionOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;
		tracing::debug!("terminal initialised");

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SelectionOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Some(outcome) = self.dispatch_events(&mut pending_events) {
				break Ok(outcome);
			}

			self.pump_search_results();
			if self.search.is_in_flight() {
				self.throbber_state.calc_next();
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		match &result {
			Ok(outcome) => tracing::info!(
				accepted = outcome.accepted,
				selected = outcome.users.len(),
				"picker closed"
			),
			Err(err) => tracing::error!(error = %err, "picker aborted"),
		}
		result
	}
}
