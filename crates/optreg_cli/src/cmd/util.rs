use std::path::PathBuf;
use std::sync::Arc;

use optreg::options::{Options, OptionsError, Schema};
use serde::Serialize;

use crate::error::{CliError, Result};

const BUNDLED_SCHEMA: &str = include_str!("../../schema/viewer.json");

/// Schema source selection shared by every command.
#[derive(clap::Args)]
pub struct SchemaArgs {
	/// JSON schema document; the bundled viewer schema when omitted.
	#[arg(long, value_name = "PATH")]
	pub schema: Option<PathBuf>,
}

/// Store construction shared by commands that read values.
#[derive(clap::Args)]
pub struct StoreArgs {
	#[command(flatten)]
	pub schema: SchemaArgs,
	/// Assign an option from its string form; applied in order.
	#[arg(long = "set", value_name = "NAME=VALUE")]
	pub assignments: Vec<String>,
	/// Flip a boolean option after all assignments.
	#[arg(long = "toggle", value_name = "NAME")]
	pub toggles: Vec<String>,
}

/// Load the selected schema.
pub(crate) fn load_schema(args: &SchemaArgs) -> Result<Arc<Schema>> {
	let schema = match &args.schema {
		Some(path) => Schema::from_path(path)?,
		None => Schema::from_json(BUNDLED_SCHEMA)?,
	};
	Ok(Arc::new(schema))
}

/// Build a store from defaults, then apply assignments and toggles.
pub(crate) fn build_store(args: &StoreArgs) -> Result<Options> {
	let mut options = Options::new(load_schema(&args.schema)?);

	for arg in &args.assignments {
		let (name, value) = arg.split_once('=').ok_or_else(|| CliError::InvalidAssignment { arg: arg.clone() })?;
		options.set_as_string(name.trim(), value).map_err(|err| suggest(&options, err))?;
	}
	for name in &args.toggles {
		options.toggle(name).map_err(|err| suggest(&options, err))?;
	}

	tracing::debug!(assignments = args.assignments.len(), toggles = args.toggles.len(), "options store ready");
	Ok(options)
}

/// Attach a closest-name suggestion to unknown-name errors.
pub(crate) fn suggest(options: &Options, err: OptionsError) -> CliError {
	match err {
		OptionsError::Inexistent { name } => {
			let (suggestion, _) = options.closest_option(&name);
			CliError::UnknownOption {
				suggestion: suggestion.to_owned(),
				name,
			}
		}
		other => CliError::Options(other),
	}
}

/// Print a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
