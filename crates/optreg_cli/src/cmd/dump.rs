use optreg::options::{OptionValue, format};

use crate::cmd::util::{StoreArgs, build_store, emit_json};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub store: StoreArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print every option value in declaration order.
pub fn run(args: Args) -> Result<()> {
	let Args { store, json } = args;
	let options = build_store(&store)?;

	if json {
		let payload: Vec<_> = options
			.iter()
			.map(|(name, value)| ValueJson {
				name,
				kind: value.kind().as_str(),
				value,
				text: format(value),
			})
			.collect();
		return emit_json(&payload);
	}

	for (name, value) in options.iter() {
		println!("{name} = {}", format(value));
	}

	Ok(())
}

/// One option rendered both as a typed JSON value and in string form.
///
/// JSON has no infinity or NaN, so `value` is omitted when a real (or any
/// vector element) is not finite; `text` always carries the value.
#[derive(serde::Serialize)]
pub(crate) struct ValueJson<'a> {
	pub(crate) name: &'a str,
	pub(crate) kind: &'static str,
	#[serde(skip_serializing_if = "has_non_finite")]
	pub(crate) value: &'a OptionValue,
	pub(crate) text: String,
}

fn has_non_finite(value: &&OptionValue) -> bool {
	match value {
		OptionValue::Real(item) => !item.is_finite(),
		OptionValue::RealVector(items) => items.iter().any(|item| !item.is_finite()),
		_ => false,
	}
}
