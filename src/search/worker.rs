use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::commands::{SearchCommand, SearchResult};
use crate::users::UserSource;

/// Launches the background search worker thread and returns communication channels.
pub(crate) fn spawn(
	source: Box<dyn UserSource>,
) -> (
	Sender<SearchCommand>,
	Receiver<SearchResult>,
	Arc<AtomicU64>,
) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(source.as_ref(), command_rx, result_tx, thread_latest));

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop(
	source: &dyn UserSource,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResult>,
	latest_query_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(source, &result_tx, &latest_query_id, command) {
			break;
		}
	}
	tracing::debug!("search worker stopped");
}

fn handle_command(
	source: &dyn UserSource,
	result_tx: &Sender<SearchResult>,
	latest_query_id: &AtomicU64,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, term } => {
			if is_superseded(id, latest_query_id) {
				tracing::trace!(id, "skipping superseded query");
				return true;
			}
			let outcome = source.search(&term);
			result_tx
				.send(SearchResult { id, term, outcome })
				.is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}

fn is_superseded(id: u64, latest_query_id: &AtomicU64) -> bool {
	id < latest_query_id.load(Ordering::Acquire)
}
