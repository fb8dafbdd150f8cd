use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// One `First Last <email>` line per user.
	#[default]
	Plain,
	/// The full outcome as pretty-printed JSON.
	Json,
}
