//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the schema bundled with the CLI.
pub fn bundled_schema_path() -> PathBuf {
	workspace_root().join("crates").join("optreg_cli").join("schema").join("viewer.json")
}

/// Read a fixture as raw JSON.
pub fn fixture_json(name: &str) -> serde_json::Value {
	let path = fixture_path(name);
	let text = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} readable: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("fixture {} is json: {err}", path.display()))
}

/// Count leaf fields (objects with a string `type`) in a schema document.
pub fn count_schema_leaves(node: &serde_json::Value) -> usize {
	let Some(object) = node.as_object() else {
		return 0;
	};
	if object.get("type").is_some_and(serde_json::Value::is_string) {
		return 1;
	}
	object.values().map(count_schema_leaves).sum()
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}
