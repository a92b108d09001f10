use serde::Serialize;

use crate::options::ValueKind;

/// Real value conventionally kept in `[0, 1]`; the range is not enforced.
pub type Ratio = f64;

/// One option payload tagged with its kind.
///
/// Serializes as the bare payload. serde_json writes non-finite reals as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
	/// Boolean flag.
	Boolean(bool),
	/// Signed 32-bit integer.
	Integer(i32),
	/// Double-precision real, also carrying [`Ratio`] values.
	Real(f64),
	/// Text, stored verbatim.
	Text(String),
	/// Ordered reals; order is significant for equality.
	RealVector(Vec<f64>),
}

impl OptionValue {
	/// Kind tag of this payload.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Boolean(_) => ValueKind::Boolean,
			Self::Integer(_) => ValueKind::Integer,
			Self::Real(_) => ValueKind::Real,
			Self::Text(_) => ValueKind::Text,
			Self::RealVector(_) => ValueKind::RealVector,
		}
	}

	/// Zero value of a kind: `false`, `0`, `0.0`, empty text, empty vector.
	pub fn zero(kind: ValueKind) -> Self {
		match kind {
			ValueKind::Boolean => Self::Boolean(false),
			ValueKind::Integer => Self::Integer(0),
			ValueKind::Real => Self::Real(0.0),
			ValueKind::Text => Self::Text(String::new()),
			ValueKind::RealVector => Self::RealVector(Vec::new()),
		}
	}
}

impl From<bool> for OptionValue {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

impl From<i32> for OptionValue {
	fn from(value: i32) -> Self {
		Self::Integer(value)
	}
}

impl From<f64> for OptionValue {
	fn from(value: f64) -> Self {
		Self::Real(value)
	}
}

impl From<String> for OptionValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for OptionValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<Vec<f64>> for OptionValue {
	fn from(value: Vec<f64>) -> Self {
		Self::RealVector(value)
	}
}

impl<const N: usize> From<[f64; N]> for OptionValue {
	fn from(value: [f64; N]) -> Self {
		Self::RealVector(value.to_vec())
	}
}
