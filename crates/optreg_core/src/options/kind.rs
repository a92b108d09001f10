use std::fmt;

use serde::{Serialize, Serializer};

/// Closed set of kinds an option field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// `bool` payload.
	Boolean,
	/// `i32` payload.
	Integer,
	/// `f64` payload, also used for ratios.
	Real,
	/// UTF-8 text payload.
	Text,
	/// Ordered `f64` sequence.
	RealVector,
}

impl ValueKind {
	/// All kinds, in declaration order.
	pub const ALL: [ValueKind; 5] = [Self::Boolean, Self::Integer, Self::Real, Self::Text, Self::RealVector];

	/// Stable lowercase label used in schema documents and messages.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Boolean => "bool",
			Self::Integer => "int",
			Self::Real => "double",
			Self::Text => "string",
			Self::RealVector => "double_vector",
		}
	}

	/// Resolve a schema type label. `ratio` maps to [`ValueKind::Real`].
	pub fn from_label(label: &str) -> Option<Self> {
		match label {
			"bool" => Some(Self::Boolean),
			"int" => Some(Self::Integer),
			"double" | "ratio" => Some(Self::Real),
			"string" => Some(Self::Text),
			"double_vector" | "std::vector<double>" => Some(Self::RealVector),
			_ => None,
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for ValueKind {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use crate::options::ValueKind;

	#[test]
	fn labels_resolve_back_to_their_kind() {
		for kind in ValueKind::ALL {
			assert_eq!(ValueKind::from_label(kind.as_str()), Some(kind));
		}
	}

	#[test]
	fn ratio_and_vector_aliases_resolve() {
		assert_eq!(ValueKind::from_label("ratio"), Some(ValueKind::Real));
		assert_eq!(ValueKind::from_label("std::vector<double>"), Some(ValueKind::RealVector));
		assert_eq!(ValueKind::from_label("float"), None);
	}
}
