use std::sync::mpsc::TryRecvError;

use super::state::App;
use crate::search::SearchResult;

impl App {
	/// Run the query effect for the current search term.
	///
	/// A blank term clears the suggestions without touching the network and
	/// invalidates whatever request is still pending.
	pub(crate) fn request_search(&mut self) {
		let term = self.input.text();
		if term.trim().is_empty() {
			self.search.cancel();
			self.clear_suggestions();
			return;
		}

		let id = self.search.issue_search(term.to_string());
		tracing::debug!(id, term, "search issued");
	}

	/// Drain any search results waiting on the receiver channel.
	pub(crate) fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(result) => self.handle_search_result(result),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a result if it corresponds to the most recent query.
	fn handle_search_result(&mut self, result: SearchResult) {
		let SearchResult { id, term, outcome } = result;
		if !self.search.matches_latest(id) {
			tracing::debug!(id, %term, "dropping stale search result");
			return;
		}
		self.search.record_result_completion();

		match outcome {
			Ok(users) => {
				tracing::debug!(id, %term, count = users.len(), "suggestions updated");
				self.suggestions = users;
				self.ensure_focus_in_range();
			}
			Err(err) => {
				tracing::warn!(id, %term, error = %err, "search failed; keeping previous suggestions");
			}
		}
	}

	#[must_use]
	pub fn is_searching(&self) -> bool {
		self.search.is_in_flight()
	}
}
