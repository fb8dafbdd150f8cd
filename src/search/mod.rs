//! Background execution of user searches.
//!
//! Queries run on a dedicated worker thread so the UI loop never waits on the
//! network. [`SearchRuntime`] tags every query with an id and discards
//! responses that arrive after a newer query was issued.

mod commands;
mod runtime;
mod worker;

pub(crate) use commands::{SearchCommand, SearchResult};
pub(crate) use runtime::SearchRuntime;
pub(crate) use worker::spawn;
