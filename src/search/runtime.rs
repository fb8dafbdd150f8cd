use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::commands::{SearchCommand, SearchResult};

/// UI-side handle on the search worker.
///
/// Every issued query gets a fresh id. Only the result carrying the current id
/// is allowed to touch the suggestion list; anything older is dropped.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResult>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	current_query_id: Option<u64>,
	in_flight: bool,
}

impl SearchRuntime {
	pub(crate) fn new(
		tx: Sender<SearchCommand>,
		rx: Receiver<SearchResult>,
		latest_query_id: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_query_id,
			next_query_id: 0,
			current_query_id: None,
			in_flight: false,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	/// Send `term` to the worker, superseding any pending query.
	pub(crate) fn issue_search(&mut self, term: String) -> u64 {
		let id = self.advance();
		self.in_flight = true;
		if self.tx.send(SearchCommand::Query { id, term }).is_err() {
			tracing::error!(id, "search worker is gone; query dropped");
			self.in_flight = false;
		}
		id
	}

	/// Invalidate whatever is pending without issuing a new request.
	pub(crate) fn cancel(&mut self) {
		if self.in_flight {
			tracing::debug!(id = ?self.current_query_id, "cancelling pending query");
		}
		self.advance();
		self.in_flight = false;
	}

	fn advance(&mut self) -> u64 {
		self.next_query_id = self.next_query_id.saturating_add(1);
		let id = self.next_query_id;
		self.current_query_id = Some(id);
		self.latest_query_id.store(id, AtomicOrdering::Release);
		id
	}

	pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
		Some(result_id) == self.current_query_id
	}

	pub(crate) fn record_result_completion(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn try_recv(&mut self) -> Result<SearchResult, TryRecvError> {
		self.rx.try_recv()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;

	use super::*;

	fn runtime() -> (SearchRuntime, Receiver<SearchCommand>, Arc<AtomicU64>) {
		let (command_tx, command_rx) = mpsc::channel();
		let (_result_tx, result_rx) = mpsc::channel();
		let latest = Arc::new(AtomicU64::new(0));
		let runtime = SearchRuntime::new(command_tx, result_rx, Arc::clone(&latest));
		(runtime, command_rx, latest)
	}

	#[test]
	fn newer_queries_supersede_older_ones() {
		let (mut runtime, commands, latest) = runtime();

		let first = runtime.issue_search("a".into());
		let second = runtime.issue_search("al".into());

		assert!(second > first);
		assert!(!runtime.matches_latest(first));
		assert!(runtime.matches_latest(second));
		assert_eq!(latest.load(AtomicOrdering::Acquire), second);
		assert_eq!(commands.try_iter().count(), 2);
	}

	#[test]
	fn cancel_invalidates_without_sending() {
		let (mut runtime, commands, _) = runtime();

		let id = runtime.issue_search("al".into());
		runtime.cancel();

		assert!(!runtime.matches_latest(id));
		assert!(!runtime.is_in_flight());
		assert_eq!(commands.try_iter().count(), 1);
	}
}
