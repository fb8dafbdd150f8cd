use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use thiserror::Error;

use super::{SearchResponse, User};

/// Endpoint queried when no configuration overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/users/search";
/// Name of the query parameter that carries the search term.
pub const DEFAULT_QUERY_PARAM: &str = "q";
/// Upper bound for a single search request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures that can occur while fetching suggestions.
#[derive(Debug, Error)]
pub enum SearchError {
	#[error("invalid search endpoint `{endpoint}`: {reason}")]
	InvalidEndpoint { endpoint: String, reason: String },
	#[error("search request failed: {0}")]
	Request(#[from] reqwest::Error),
	#[error("search endpoint responded with {0}")]
	Status(reqwest::StatusCode),
	#[error("malformed search response: {0}")]
	Decode(#[from] serde_json::Error),
}

/// Anything that can turn a search term into a list of users.
///
/// Implementations run on the background search worker, never on the UI
/// thread, so blocking is fine.
pub trait UserSource: Send {
	fn search(&self, term: &str) -> Result<Vec<User>, SearchError>;
}

/// Connection settings for [`HttpUserSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
	pub endpoint: String,
	pub query_param: String,
	pub timeout: Duration,
}

impl Default for SearchOptions {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			query_param: DEFAULT_QUERY_PARAM.to_string(),
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

/// Build the request URL for `term`, appending it to any query string the
/// endpoint already carries.
pub fn build_search_url(endpoint: &str, param: &str, term: &str) -> Result<Url, SearchError> {
	let url = Url::parse_with_params(endpoint, &[(param, term)]).map_err(|err| {
		SearchError::InvalidEndpoint {
			endpoint: endpoint.to_string(),
			reason: err.to_string(),
		}
	})?;

	match url.scheme() {
		"http" | "https" => Ok(url),
		other => Err(SearchError::InvalidEndpoint {
			endpoint: endpoint.to_string(),
			reason: format!("unsupported scheme `{other}`"),
		}),
	}
}

/// Decode a `{ "users": [...] }` body.
pub fn decode_response(body: &str) -> Result<Vec<User>, SearchError> {
	let response: SearchResponse = serde_json::from_str(body)?;
	Ok(response.users)
}

/// [`UserSource`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
	client: Client,
	options: SearchOptions,
}

impl HttpUserSource {
	/// Validate the endpoint and build the underlying HTTP client.
	pub fn new(options: SearchOptions) -> Result<Self, SearchError> {
		build_search_url(&options.endpoint, &options.query_param, "")?;

		let client = Client::builder()
			.timeout(options.timeout)
			.user_agent(concat!("pillpick/", env!("CARGO_PKG_VERSION")))
			.build()?;

		Ok(Self { client, options })
	}
}

impl UserSource for HttpUserSource {
	fn search(&self, term: &str) -> Result<Vec<User>, SearchError> {
		let url = build_search_url(&self.options.endpoint, &self.options.query_param, term)?;
		tracing::debug!(%url, "requesting suggestions");

		let response = self
			.client
			.get(url)
			.header(ACCEPT, "application/json")
			.send()?;

		let status = response.status();
		if !status.is_success() {
			return Err(SearchError::Status(status));
		}

		let body = response.text()?;
		decode_response(&body)
	}
}
