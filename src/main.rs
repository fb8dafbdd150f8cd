mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use pillpick::{App, HttpUserSource};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in pillpick::ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let _log_guard = pillpick::logging::init(&resolved.log)?;

	run_picker(cli.output, resolved)
}

/// Run the picker against the configured endpoint and print the selection.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let source = HttpUserSource::new(settings.search).context("failed to build search client")?;
	let app = App::new(Box::new(source))
		.with_labels(settings.labels)
		.with_theme(settings.theme)
		.with_initial_query(settings.initial_query);
	let outcome = pillpick::run(app)?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
