use optreg::options::{OptionsError, SchemaError};
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Store or codec failure.
	#[error(transparent)]
	Options(#[from] OptionsError),
	/// Schema could not be loaded.
	#[error("schema: {0}")]
	Schema(#[from] SchemaError),
	/// Unknown option name with the closest declared name.
	#[error("option {name} does not exist, did you mean {suggestion}?")]
	UnknownOption {
		/// Queried name.
		name: String,
		/// Closest declared name.
		suggestion: String,
	},
	/// `--set` argument without `=`.
	#[error("invalid assignment {arg:?} (expected NAME=VALUE)")]
	InvalidAssignment {
		/// Raw argument.
		arg: String,
	},
	/// JSON output could not be rendered.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
