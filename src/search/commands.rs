use crate::users::{SearchError, User};

/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	/// Fetch suggestions for the provided term.
	Query {
		/// Identifier that allows the UI to correlate responses with the originating query.
		id: u64,
		/// Raw search term as typed, untrimmed.
		term: String,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Response emitted back to the UI layer for a single query.
#[derive(Debug)]
pub(crate) struct SearchResult {
	/// Identifier matching the [`SearchCommand::Query`] that produced the result.
	pub(crate) id: u64,
	pub(crate) term: String,
	pub(crate) outcome: Result<Vec<User>, SearchError>,
}
