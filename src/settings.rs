use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use pillpick::logging::{self, LogOptions};
use pillpick::ui::style;
use pillpick::users::{self, DEFAULT_ENDPOINT, DEFAULT_QUERY_PARAM, DEFAULT_TIMEOUT};
use pillpick::{SearchOptions, Theme, UiLabels, app_dirs};

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	search: SearchSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	endpoint: Option<String>,
	query_param: Option<String>,
	timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	placeholder: Option<String>,
	initial_query: Option<String>,
	theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

pub struct ResolvedConfig {
	pub search: SearchOptions,
	pub labels: UiLabels,
	pub initial_query: String,
	pub theme_name: String,
	pub theme: Theme,
	pub log: LogOptions,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Endpoint: {}", self.search.endpoint);
		println!("  Query parameter: {}", self.search.query_param);
		println!("  Timeout: {}s", self.search.timeout.as_secs());
		println!("  Title: {}", self.labels.title);
		println!("  Placeholder: {}", self.labels.placeholder);
		println!("  UI theme: {}", self.theme_name);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Log level: {}", self.log.level);
		println!("  Log file: {}", self.log.file.display());
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("pillpick")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".pillpick.toml"));
		files.push(current_dir.join("pillpick.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.search.endpoint = Some(endpoint);
		}
		if let Some(param) = cli.query_param.clone() {
			self.search.query_param = Some(param);
		}
		if let Some(timeout) = cli.timeout {
			self.search.timeout_secs = Some(timeout);
		}

		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.ui.placeholder = Some(placeholder);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}

		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let endpoint = self
			.search
			.endpoint
			.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
		let query_param = self
			.search
			.query_param
			.unwrap_or_else(|| DEFAULT_QUERY_PARAM.to_string());
		ensure!(
			!query_param.trim().is_empty(),
			"search.query_param must not be empty"
		);
		users::build_search_url(&endpoint, &query_param, "")?;

		let timeout = match self.search.timeout_secs {
			Some(secs) => {
				ensure!(secs > 0, "search.timeout_secs must be greater than zero");
				Duration::from_secs(secs)
			}
			None => DEFAULT_TIMEOUT,
		};

		let mut labels = UiLabels::default();
		if let Some(title) = self.ui.title {
			labels = labels.with_title(title);
		}
		if let Some(placeholder) = self.ui.placeholder {
			labels = labels.with_placeholder(placeholder);
		}

		let (theme_name, theme) = match self.ui.theme {
			Some(name) => {
				let theme = style::by_name(&name).ok_or_else(|| {
					anyhow!(
						"unknown theme '{name}' (available: {})",
						style::names().join(", ")
					)
				})?;
				(name, theme)
			}
			None => ("slate".to_string(), style::default_theme()),
		};

		let level = self
			.logging
			.level
			.filter(|level| !level.trim().is_empty())
			.unwrap_or_else(|| logging::DEFAULT_LEVEL.to_string());
		let file = match self.logging.file {
			Some(file) => file,
			None => app_dirs::default_log_file()?,
		};

		Ok(ResolvedConfig {
			search: SearchOptions {
				endpoint,
				query_param,
				timeout,
			},
			labels,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme_name,
			theme,
			log: LogOptions { level, file },
		})
	}
}
