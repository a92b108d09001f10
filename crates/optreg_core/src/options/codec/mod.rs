//! String conversion for every option kind.
//!
//! Parsing is locale independent and mirrors stream extraction: numbers skip
//! leading whitespace and ignore trailing characters after the longest valid
//! prefix. Formatting never fails.

use std::num::IntErrorKind;

use crate::options::{OptionValue, OptionsError, ParseFailure, Result, ValueKind};

mod sealed {
	pub trait Sealed {}

	impl Sealed for bool {}
	impl Sealed for i32 {}
	impl Sealed for f64 {}
	impl Sealed for String {}
	impl Sealed for Vec<f64> {}
}

/// Rust type that can be stored in an option field.
///
/// Implemented for exactly one type per [`ValueKind`].
pub trait OptionType: sealed::Sealed + Sized {
	/// Kind this type maps to.
	const KIND: ValueKind;

	/// Parse the canonical or user-provided string form.
	fn parse_str(input: &str) -> Result<Self>;

	/// Render the canonical string form.
	fn to_option_string(&self) -> String;

	/// Extract from a tagged value of the matching kind.
	fn from_value(value: &OptionValue) -> Option<Self>;
}

/// Option types usable as list elements. Lists themselves are excluded, so
/// nested lists cannot be expressed.
pub trait ScalarType: OptionType {}

impl ScalarType for bool {}
impl ScalarType for i32 {}
impl ScalarType for f64 {}
impl ScalarType for String {}

impl OptionType for bool {
	const KIND: ValueKind = ValueKind::Boolean;

	/// True when either the numeric or the literal reading is true. Never fails.
	fn parse_str(input: &str) -> Result<Self> {
		Ok(numeric_truth(input) || trim_text(input) == "true")
	}

	fn to_option_string(&self) -> String {
		if *self { "true".to_owned() } else { "false".to_owned() }
	}

	fn from_value(value: &OptionValue) -> Option<Self> {
		match value {
			OptionValue::Boolean(item) => Some(*item),
			_ => None,
		}
	}
}

impl OptionType for i32 {
	const KIND: ValueKind = ValueKind::Integer;

	fn parse_str(input: &str) -> Result<Self> {
		let rest = skip_space(input);
		let bytes = rest.as_bytes();
		let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
		let digits = bytes[sign..].iter().take_while(|byte| byte.is_ascii_digit()).count();
		if digits == 0 {
			return Err(OptionsError::parsing(input, Self::KIND, ParseFailure::Invalid));
		}

		rest[..sign + digits].parse::<i32>().map_err(|err| {
			let reason = match err.kind() {
				IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseFailure::OutOfRange,
				_ => ParseFailure::Invalid,
			};
			OptionsError::parsing(input, Self::KIND, reason)
		})
	}

	fn to_option_string(&self) -> String {
		self.to_string()
	}

	fn from_value(value: &OptionValue) -> Option<Self> {
		match value {
			OptionValue::Integer(item) => Some(*item),
			_ => None,
		}
	}
}

impl OptionType for f64 {
	const KIND: ValueKind = ValueKind::Real;

	fn parse_str(input: &str) -> Result<Self> {
		let fail = |reason| OptionsError::parsing(input, Self::KIND, reason);

		let (literal, special) = real_prefix(skip_space(input)).ok_or_else(|| fail(ParseFailure::Invalid))?;
		let value = literal.parse::<f64>().map_err(|_| fail(ParseFailure::Invalid))?;
		if special {
			return Ok(value);
		}
		if value.is_infinite() || (value == 0.0 && mantissa_is_nonzero(literal)) {
			return Err(fail(ParseFailure::OutOfRange));
		}

		Ok(value)
	}

	/// Shortest round-tripping digits; integral values carry no fractional part.
	fn to_option_string(&self) -> String {
		format_real(*self)
	}

	fn from_value(value: &OptionValue) -> Option<Self> {
		match value {
			OptionValue::Real(item) => Some(*item),
			_ => None,
		}
	}
}

impl OptionType for String {
	const KIND: ValueKind = ValueKind::Text;

	fn parse_str(input: &str) -> Result<Self> {
		Ok(trim_text(input).to_owned())
	}

	fn to_option_string(&self) -> String {
		self.clone()
	}

	fn from_value(value: &OptionValue) -> Option<Self> {
		match value {
			OptionValue::Text(item) => Some(item.clone()),
			_ => None,
		}
	}
}

impl OptionType for Vec<f64> {
	const KIND: ValueKind = ValueKind::RealVector;

	fn parse_str(input: &str) -> Result<Self> {
		parse_list(input)
	}

	fn to_option_string(&self) -> String {
		format_list(self)
	}

	fn from_value(value: &OptionValue) -> Option<Self> {
		match value {
			OptionValue::RealVector(items) => Some(items.clone()),
			_ => None,
		}
	}
}

/// Parse `input` as a value of `kind`.
pub fn parse(kind: ValueKind, input: &str) -> Result<OptionValue> {
	let value = match kind {
		ValueKind::Boolean => OptionValue::Boolean(bool::parse_str(input)?),
		ValueKind::Integer => OptionValue::Integer(i32::parse_str(input)?),
		ValueKind::Real => OptionValue::Real(f64::parse_str(input)?),
		ValueKind::Text => OptionValue::Text(String::parse_str(input)?),
		ValueKind::RealVector => OptionValue::RealVector(parse_list(input)?),
	};
	Ok(value)
}

/// Render the canonical string form of `value`.
pub fn format(value: &OptionValue) -> String {
	match value {
		OptionValue::Boolean(item) => item.to_option_string(),
		OptionValue::Integer(item) => item.to_option_string(),
		OptionValue::Real(item) => item.to_option_string(),
		OptionValue::Text(item) => item.clone(),
		OptionValue::RealVector(items) => format_list(items),
	}
}

/// Typed form of [`parse`].
pub fn parse_as<T: OptionType>(input: &str) -> Result<T> {
	T::parse_str(input)
}

/// Typed form of [`format`].
pub fn format_as<T: OptionType>(value: &T) -> String {
	value.to_option_string()
}

/// Split on commas and parse each segment as `T`.
///
/// A trailing empty segment is dropped, so `""` is the empty list and `"1,2,"`
/// has two elements. Interior empty segments are parsed and may fail.
pub fn parse_list<T: ScalarType>(input: &str) -> Result<Vec<T>> {
	input.split_terminator(',').map(T::parse_str).collect()
}

/// Decimal exponents rendered positionally; anything outside uses `e` notation.
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -5..16;

fn format_real(value: f64) -> String {
	if value == 0.0 || !value.is_finite() {
		return value.to_string();
	}

	let scientific = format!("{value:e}");
	let exponent = scientific.split_once('e').and_then(|(_, exp)| exp.parse::<i32>().ok());
	match exponent {
		Some(exp) if !POSITIONAL_EXPONENTS.contains(&exp) => scientific,
		_ => value.to_string(),
	}
}

fn format_list<T: ScalarType>(items: &[T]) -> String {
	items.iter().map(T::to_option_string).collect::<Vec<_>>().join(", ")
}

/// Whitespace skipped before numbers.
const NUMERIC_SPACE: &[char] = &[' ', '\t', '\n', '\x0b', '\x0c', '\r'];
/// Whitespace trimmed around text.
const TEXT_SPACE: &[char] = &[' ', '\t', '\r', '\x0b', '\n'];

fn skip_space(input: &str) -> &str {
	input.trim_start_matches(NUMERIC_SPACE)
}

fn trim_text(input: &str) -> &str {
	input.trim_matches(TEXT_SPACE)
}

/// Any nonzero digit in the leading (optionally signed) integer.
fn numeric_truth(input: &str) -> bool {
	let rest = skip_space(input);
	let rest = rest.strip_prefix(&['+', '-'][..]).unwrap_or(rest);
	rest.bytes().take_while(u8::is_ascii_digit).any(|byte| byte != b'0')
}

/// Longest real literal at the start of `input`, and whether it is a special
/// token (`inf`, `infinity`, `nan`).
fn real_prefix(input: &str) -> Option<(&str, bool)> {
	let bytes = input.as_bytes();
	let mut idx = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

	for word in ["infinity", "inf", "nan"] {
		let end = idx + word.len();
		if bytes.len() >= end && bytes[idx..end].eq_ignore_ascii_case(word.as_bytes()) {
			return Some((&input[..end], true));
		}
	}

	let int_start = idx;
	while idx < bytes.len() && bytes[idx].is_ascii_digit() {
		idx += 1;
	}
	let mut digits = idx - int_start;

	if bytes.get(idx) == Some(&b'.') {
		let frac_start = idx + 1;
		let mut end = frac_start;
		while end < bytes.len() && bytes[end].is_ascii_digit() {
			end += 1;
		}
		if digits > 0 || end > frac_start {
			digits += end - frac_start;
			idx = end;
		}
	}

	if digits == 0 {
		return None;
	}

	if matches!(bytes.get(idx), Some(b'e' | b'E')) {
		let mut end = idx + 1;
		if matches!(bytes.get(end), Some(b'+' | b'-')) {
			end += 1;
		}
		let exp_start = end;
		while end < bytes.len() && bytes[end].is_ascii_digit() {
			end += 1;
		}
		if end > exp_start {
			idx = end;
		}
	}

	Some((&input[..idx], false))
}

fn mantissa_is_nonzero(literal: &str) -> bool {
	literal
		.bytes()
		.take_while(|byte| !matches!(byte, b'e' | b'E'))
		.any(|byte| matches!(byte, b'1'..=b'9'))
}
