use optreg::options::format;

use crate::cmd::util::{SchemaArgs, emit_json, load_schema};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub schema: SchemaArgs,
	#[arg(long)]
	pub json: bool,
}

/// List declared option names, kinds, and defaults.
pub fn run(args: Args) -> Result<()> {
	let Args { schema, json } = args;
	let schema = load_schema(&schema)?;

	if json {
		let payload = NamesJson {
			count: schema.len(),
			options: schema
				.fields()
				.iter()
				.map(|field| FieldJson {
					name: field.name.clone(),
					kind: field.kind.as_str(),
					default: format(&field.default),
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	for field in schema.fields() {
		println!("{}\t{}", field.name, field.kind);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: String,
	kind: &'static str,
	default: String,
}

#[derive(serde::Serialize)]
struct NamesJson {
	count: usize,
	options: Vec<FieldJson>,
}
