/// Unit-cost Levenshtein distance over Unicode scalar values.
pub fn levenshtein(left: &str, right: &str) -> usize {
	let right: Vec<char> = right.chars().collect();
	let mut prev: Vec<usize> = (0..=right.len()).collect();
	let mut curr = vec![0_usize; right.len() + 1];

	for (row, lch) in left.chars().enumerate() {
		curr[0] = row + 1;
		for (col, rch) in right.iter().enumerate() {
			let substitution = prev[col] + usize::from(lch != *rch);
			let deletion = prev[col + 1] + 1;
			let insertion = curr[col] + 1;
			curr[col + 1] = substitution.min(deletion).min(insertion);
		}
		std::mem::swap(&mut prev, &mut curr);
	}

	prev[right.len()]
}

/// Name closest to `query` with its distance.
///
/// Ties keep the first name in iteration order. Returns `None` when `names`
/// is empty.
pub fn closest_name<'a, I>(names: I, query: &str) -> Option<(&'a str, usize)>
where
	I: IntoIterator<Item = &'a str>,
{
	let mut best: Option<(&'a str, usize)> = None;
	for name in names {
		let distance = levenshtein(name, query);
		if best.is_none_or(|(_, best_distance)| distance < best_distance) {
			best = Some((name, distance));
			if distance == 0 {
				break;
			}
		}
	}
	best
}

#[cfg(test)]
mod tests {
	use crate::options::{closest_name, levenshtein};

	#[test]
	fn distance_counts_unit_edits() {
		assert_eq!(levenshtein("", ""), 0);
		assert_eq!(levenshtein("abc", ""), 3);
		assert_eq!(levenshtein("", "abc"), 3);
		assert_eq!(levenshtein("color", "colour"), 1);
		assert_eq!(levenshtein("kitten", "sitting"), 3);
		assert_eq!(levenshtein("flaw", "lawn"), 2);
	}

	#[test]
	fn distance_is_symmetric() {
		for (left, right) in [("render.grid", "render.grind"), ("ui.fps", "ui.fpss"), ("abc", "cba")] {
			assert_eq!(levenshtein(left, right), levenshtein(right, left));
		}
	}

	#[test]
	fn distance_counts_characters_not_bytes() {
		assert_eq!(levenshtein("ñ", "n"), 1);
		assert_eq!(levenshtein("größe", "grosse"), 3);
	}

	#[test]
	fn closest_prefers_minimum_distance() {
		let names = ["render.effect.fxaa", "color", "ui.scalar"];
		assert_eq!(closest_name(names, "colour"), Some(("color", 1)));
	}

	#[test]
	fn closest_breaks_ties_by_order() {
		assert_eq!(closest_name(["abd", "abe"], "abc"), Some(("abd", 1)));
		assert_eq!(closest_name(["abe", "abd"], "abc"), Some(("abe", 1)));
	}

	#[test]
	fn closest_on_empty_names_is_none() {
		assert_eq!(closest_name(std::iter::empty(), "anything"), None);
	}
}
