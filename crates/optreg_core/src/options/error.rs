use std::fmt;

use thiserror::Error;

use crate::options::ValueKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, OptionsError>;

/// Why a string failed to convert into a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
	/// No valid leading number.
	Invalid,
	/// Syntactically valid but not representable.
	OutOfRange,
}

impl fmt::Display for ParseFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Invalid => f.write_str("invalid syntax"),
			Self::OutOfRange => f.write_str("value out of range"),
		}
	}
}

/// Errors raised by the options store and the value codec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
	/// String did not convert to the requested kind.
	#[error("cannot parse {input:?} as {kind}: {reason}")]
	Parsing {
		/// Original input string.
		input: String,
		/// Kind the input was parsed as.
		kind: ValueKind,
		/// Invalid syntax or out-of-range value.
		reason: ParseFailure,
	},
	/// Operation kind does not match the field's declared kind.
	#[error("option {name} is declared as {declared}, not {requested}")]
	Incompatible {
		/// Field name.
		name: String,
		/// Kind the schema declares for the field.
		declared: ValueKind,
		/// Kind the operation supplied or required.
		requested: ValueKind,
	},
	/// Name is not present in the schema.
	#[error("option {name} does not exist")]
	Inexistent {
		/// Queried name.
		name: String,
	},
}

impl OptionsError {
	pub(crate) fn inexistent(name: &str) -> Self {
		Self::Inexistent { name: name.to_owned() }
	}

	pub(crate) fn incompatible(name: &str, declared: ValueKind, requested: ValueKind) -> Self {
		Self::Incompatible {
			name: name.to_owned(),
			declared,
			requested,
		}
	}

	pub(crate) fn parsing(input: &str, kind: ValueKind, reason: ParseFailure) -> Self {
		Self::Parsing {
			input: input.to_owned(),
			kind,
			reason,
		}
	}
}

/// Errors produced while building a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
	/// Schema declared no fields.
	#[error("schema declares no fields")]
	Empty,
	/// Same name declared twice.
	#[error("duplicate option name: {name}")]
	DuplicateName {
		/// Repeated name.
		name: String,
	},
	/// Name is empty or has an empty dotted segment.
	#[error("invalid option name: {name:?}")]
	InvalidName {
		/// Offending name.
		name: String,
	},
	/// Field type label is not a known kind.
	#[error("unknown type {ty:?} for option {name}")]
	UnknownType {
		/// Field name.
		name: String,
		/// Type label found in the document.
		ty: String,
	},
	/// Schema document node is not a JSON object.
	#[error("schema node {name:?} is not an object")]
	NotAnObject {
		/// Dotted path of the node, empty for the root.
		name: String,
	},
	/// `default_value` entry has no string form.
	#[error("unsupported default value for option {name}")]
	UnsupportedDefault {
		/// Field name.
		name: String,
	},
	/// Leaf object without a usable `type` key.
	#[error("option {name} has no type")]
	MissingType {
		/// Field name.
		name: String,
	},
	/// Default value string did not parse as the declared kind.
	#[error("invalid default for option {name}")]
	InvalidDefault {
		/// Field name.
		name: String,
		/// Codec failure.
		#[source]
		source: OptionsError,
	},
	/// Default value kind differs from the declared kind.
	#[error("default for option {name} is {got}, declared {declared}")]
	DefaultKindMismatch {
		/// Field name.
		name: String,
		/// Declared kind.
		declared: ValueKind,
		/// Kind of the supplied default.
		got: ValueKind,
	},
	/// Schema document is not valid JSON.
	#[error("schema json: {0}")]
	Json(#[from] serde_json::Error),
	/// Schema file could not be read.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
}
