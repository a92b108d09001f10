use optreg::options::Options;

use crate::cmd::util::{StoreArgs, build_store, emit_json};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub store: StoreArgs,
	#[arg(long)]
	pub json: bool,
}

/// List options that no longer hold their schema default.
pub fn run(args: Args) -> Result<()> {
	let Args { store, json } = args;
	let options = build_store(&store)?;
	let defaults = Options::new(options.schema().clone());

	let mut changed = Vec::new();
	for name in options.names() {
		if !options.is_same(&defaults, name)? {
			changed.push(ChangeJson {
				name,
				default: defaults.get_as_string(name)?,
				value: options.get_as_string(name)?,
			});
		}
	}

	if json {
		return emit_json(&DiffJson { changed });
	}

	for item in changed {
		println!("{}: {} -> {}", item.name, item.default, item.value);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ChangeJson<'a> {
	name: &'a str,
	default: String,
	value: String,
}

#[derive(serde::Serialize)]
struct DiffJson<'a> {
	changed: Vec<ChangeJson<'a>>,
}

#[cfg(test)]
mod tests;
