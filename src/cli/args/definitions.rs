use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `pillpick` binary.
#[derive(Parser, Debug)]
#[command(
	name = "pillpick",
	version,
	long_version = long_version(),
	about = "Search a user directory and pick several users as pills",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PILLPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "User search endpoint (default: https://dummyjson.com/users/search)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long = "query-param",
		value_name = "NAME",
		help = "Query parameter carrying the search term (default: q)"
	)]
	pub(crate) query_param: Option<String>,
	#[arg(
		long,
		value_name = "SECONDS",
		help = "Request timeout in seconds (default: 10)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search term (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input box title (default: Users)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Text shown in the empty search field (default: Search for a user...)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long = "print-config", help = "Print the resolved configuration before starting")]
	pub(crate) print_config: bool,
	#[arg(long = "list-themes", help = "List available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter directive; RUST_LOG takes precedence (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: <data dir>/logs/pillpick.log)"
	)]
	pub(crate) log_file: Option<PathBuf>,
}
