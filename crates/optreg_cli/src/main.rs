#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod error;

#[derive(Parser)]
#[command(name = "optreg", about = "Inspect and exercise a typed options registry")]
struct Cli {
	/// Log schema loading and assignments at debug level.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List option names and kinds in declaration order.
	Names(cmd::names::Args),
	/// Print selected options after applying assignments.
	Get(cmd::get::Args),
	/// Print every option after applying assignments.
	Dump(cmd::dump::Args),
	/// List options whose value differs from the schema default.
	Diff(cmd::diff::Args),
	/// Suggest the declared name closest to a query.
	Closest(cmd::closest::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: Commands) -> error::Result<()> {
	match command {
		Commands::Names(args) => cmd::names::run(args),
		Commands::Get(args) => cmd::get::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
		Commands::Diff(args) => cmd::diff::run(args),
		Commands::Closest(args) => cmd::closest::run(args),
	}
}
