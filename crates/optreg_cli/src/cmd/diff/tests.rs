use crate::cmd::test_support::run_optreg_json;

#[test]
fn fresh_store_has_no_changes() {
	let json = run_optreg_json(&["diff", "--json"]);

	assert!(json["changed"].as_array().is_some_and(|items| items.is_empty()));
}

#[test]
fn diff_lists_changed_fields_in_declaration_order() {
	let json = run_optreg_json(&[
		"diff",
		"--set",
		"ui.scale=0.5",
		"--set",
		"scene.animation.index=3",
		"--set",
		"render.line_width=1",
		"--toggle",
		"render.grid.enable",
		"--json",
	]);

	let changed = json["changed"].as_array().expect("changed should be an array");
	let names: Vec<_> = changed.iter().filter_map(|item| item["name"].as_str()).collect();
	assert_eq!(names, ["scene.animation.index", "render.grid.enable", "ui.scale"]);
	assert_eq!(changed[0]["default"], "0");
	assert_eq!(changed[0]["value"], "3");
	assert_eq!(changed[2]["value"], "0.5");
}
