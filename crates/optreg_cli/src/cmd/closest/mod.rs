use crate::cmd::util::{SchemaArgs, emit_json, load_schema};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub query: String,
	#[command(flatten)]
	pub schema: SchemaArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print the declared name nearest to a query by edit distance.
pub fn run(args: Args) -> Result<()> {
	let Args { query, schema, json } = args;
	let schema = load_schema(&schema)?;
	let (name, distance) = schema.closest_option(&query);

	if json {
		return emit_json(&ClosestJson {
			query: &query,
			name,
			distance,
			exact: distance == 0,
		});
	}

	println!("{name} (distance {distance})");
	Ok(())
}

#[derive(serde::Serialize)]
struct ClosestJson<'a> {
	query: &'a str,
	name: &'a str,
	distance: usize,
	exact: bool,
}
