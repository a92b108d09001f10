use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use optreg_testkit::{fixture_path, target_dir as workspace_target_dir};

static OPTREG_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_optreg(args: &[&str]) -> Output {
	Command::new(optreg_bin()).args(args).output().expect("optreg command executes")
}

pub(crate) fn run_optreg_json(args: &[&str]) -> serde_json::Value {
	let output = run_optreg(args);
	assert!(
		output.status.success(),
		"optreg command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Run a command expected to fail and return its stderr.
pub(crate) fn run_optreg_err(args: &[&str]) -> String {
	let output = run_optreg(args);
	assert!(!output.status.success(), "optreg {args:?} should fail but exited with {}", output.status);
	String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Fixture path in the form `--schema` expects.
pub(crate) fn fixture_schema(name: &str) -> String {
	fixture_path(name).to_string_lossy().into_owned()
}

fn optreg_bin() -> &'static PathBuf {
	OPTREG_BIN.get_or_init(resolve_optreg_bin)
}

fn resolve_optreg_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_optreg") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "optreg.exe" } else { "optreg" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "optreg"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build optreg binary at {}", bin.display());

	bin
}
