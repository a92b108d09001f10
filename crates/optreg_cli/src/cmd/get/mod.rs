use optreg::options::format;

use crate::cmd::dump::ValueJson;
use crate::cmd::util::{StoreArgs, build_store, emit_json, suggest};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	#[arg(required = true, value_name = "NAME")]
	pub names: Vec<String>,
	#[command(flatten)]
	pub store: StoreArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print the requested options after applying assignments and toggles.
pub fn run(args: Args) -> Result<()> {
	let Args { names, store, json } = args;
	let options = build_store(&store)?;

	let mut values = Vec::with_capacity(names.len());
	for name in &names {
		let value = options.get(name).map_err(|err| suggest(&options, err))?;
		values.push(ValueJson {
			name,
			kind: value.kind().as_str(),
			value,
			text: format(value),
		});
	}

	if json {
		return emit_json(&values);
	}

	for item in values {
		println!("{} = {}", item.name, item.text);
	}

	Ok(())
}
