//! User records returned by the remote search endpoint and the client that
//! fetches them.

mod source;

use serde::{Deserialize, Serialize};

pub use source::{
	DEFAULT_ENDPOINT, DEFAULT_QUERY_PARAM, DEFAULT_TIMEOUT, HttpUserSource, SearchError,
	SearchOptions, UserSource, build_search_url, decode_response,
};

/// A single user as described by the search endpoint.
///
/// The shape is owned by the remote service; unknown fields are ignored and
/// nothing is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: u64,
	pub email: String,
	#[serde(default)]
	pub first_name: String,
	#[serde(default)]
	pub last_name: String,
	#[serde(default)]
	pub image: String,
}

impl User {
	/// "First Last", skipping whichever half is empty.
	#[must_use]
	pub fn full_name(&self) -> String {
		match (self.first_name.is_empty(), self.last_name.is_empty()) {
			(false, false) => format!("{} {}", self.first_name, self.last_name),
			(false, true) => self.first_name.clone(),
			(true, false) => self.last_name.clone(),
			(true, true) => self.email.clone(),
		}
	}
}

/// Payload of a successful search: `{ "users": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
	#[serde(default)]
	pub users: Vec<User>,
}
