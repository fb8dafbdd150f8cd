//! File-backed tracing setup.
//!
//! The picker owns the terminal while it runs, so log output never goes to
//! stdout or stderr. Everything is written to a plain file through a
//! non-blocking appender instead.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Level used when neither `RUST_LOG` nor the configuration names one.
pub const DEFAULT_LEVEL: &str = "info";

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
	/// Filter directive, e.g. `debug` or `pillpick=trace`.
	pub level: String,
	/// Destination file; parent directories are created on demand.
	pub file: PathBuf,
}

/// Build the filter: `RUST_LOG` wins, then the configured directive.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return Ok(filter);
	}
	EnvFilter::try_new(level).map_err(|err| anyhow!("invalid log level '{level}': {err}"))
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered records are flushed.
pub fn init(options: &LogOptions) -> Result<WorkerGuard> {
	let filter = build_filter(&options.level)?;
	let (dir, name) = split_log_path(&options.file)?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;

	let appender = tracing_appender::rolling::never(&dir, name);
	let (writer, guard) = tracing_appender::non_blocking(appender);

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(writer)
				.with_ansi(false)
				.with_target(true),
		)
		.try_init()
		.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

	tracing::info!(file = %options.file.display(), level = %options.level, "logging initialised");
	Ok(guard)
}

fn split_log_path(path: &Path) -> Result<(PathBuf, &std::ffi::OsStr)> {
	let name = path
		.file_name()
		.ok_or_else(|| anyhow!("log path {} has no file name", path.display()))?;
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
		_ => PathBuf::from("."),
	};
	Ok((dir, name))
}
