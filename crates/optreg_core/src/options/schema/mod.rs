use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use crate::options::{OptionValue, SchemaError, ValueKind, closest_name, parse};

/// One named option with its declared kind and default.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
	/// Dotted name, e.g. `render.background.color`.
	pub name: String,
	/// Declared kind, fixed for the field's lifetime.
	pub kind: ValueKind,
	/// Initial value; its kind equals `kind`.
	pub default: OptionValue,
}

/// Fixed, ordered, non-empty set of option fields with unique names.
#[derive(Debug, Clone)]
pub struct Schema {
	fields: Vec<SchemaField>,
	by_name: HashMap<String, usize>,
}

impl Schema {
	/// Start declaring fields in code.
	pub fn builder() -> SchemaBuilder {
		SchemaBuilder::default()
	}

	/// Build from a nested JSON schema document.
	///
	/// Objects with a string `type` key are fields named by their key path;
	/// other objects are groups, so a group may itself contain a field
	/// called `type`. Document order is declaration order.
	pub fn from_json(text: &str) -> Result<Self, SchemaError> {
		let root: JsonValue = serde_json::from_str(text)?;
		let JsonValue::Object(root) = root else {
			return Err(SchemaError::NotAnObject { name: String::new() });
		};

		collect_fields(&root, "", Self::builder())?.build()
	}

	/// Read and build a JSON schema document from disk.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
		let text = std::fs::read_to_string(path.as_ref())?;
		tracing::debug!(path = %path.as_ref().display(), "loading options schema");
		Self::from_json(&text)
	}

	/// All fields in declaration order.
	pub fn fields(&self) -> &[SchemaField] {
		&self.fields
	}

	/// Number of declared fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Always false for a built schema.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Slot index of `name`.
	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.by_name.get(name).copied()
	}

	/// Field declared as `name`.
	pub fn field(&self, name: &str) -> Option<&SchemaField> {
		self.fields.get(self.index_of(name)?)
	}

	/// Field names in declaration order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|field| field.name.as_str())
	}

	/// Declared name closest to `query` by edit distance, first on ties.
	pub fn closest_option(&self, query: &str) -> (&str, usize) {
		// Building rejects empty schemas; the fallback is the distance from "".
		closest_name(self.names(), query).unwrap_or(("", query.chars().count()))
	}
}

/// Accumulates field declarations and validates them on [`SchemaBuilder::build`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
	fields: Vec<SchemaField>,
}

impl SchemaBuilder {
	/// Declare a field whose kind is taken from its default.
	pub fn field(self, name: impl Into<String>, default: impl Into<OptionValue>) -> Self {
		let default = default.into();
		let kind = default.kind();
		self.declared(name, kind, default)
	}

	/// Declare a field with an explicit kind. A default of another kind is
	/// rejected by `build`.
	pub fn declared(mut self, name: impl Into<String>, kind: ValueKind, default: OptionValue) -> Self {
		self.fields.push(SchemaField {
			name: name.into(),
			kind,
			default,
		});
		self
	}

	/// Declare a field whose default is given in string form, or the kind's
	/// zero value when absent.
	pub fn parsed(self, name: impl Into<String>, kind: ValueKind, default: Option<&str>) -> Result<Self, SchemaError> {
		let name = name.into();
		let default = match default {
			Some(text) => parse(kind, text).map_err(|source| SchemaError::InvalidDefault { name: name.clone(), source })?,
			None => OptionValue::zero(kind),
		};
		Ok(self.declared(name, kind, default))
	}

	/// Validate names, defaults and uniqueness, then freeze the schema.
	pub fn build(self) -> Result<Schema, SchemaError> {
		if self.fields.is_empty() {
			return Err(SchemaError::Empty);
		}

		let mut by_name = HashMap::with_capacity(self.fields.len());
		for (idx, field) in self.fields.iter().enumerate() {
			if field.name.split('.').any(str::is_empty) {
				return Err(SchemaError::InvalidName { name: field.name.clone() });
			}
			if field.default.kind() != field.kind {
				return Err(SchemaError::DefaultKindMismatch {
					name: field.name.clone(),
					declared: field.kind,
					got: field.default.kind(),
				});
			}
			if by_name.insert(field.name.clone(), idx).is_some() {
				return Err(SchemaError::DuplicateName { name: field.name.clone() });
			}
		}

		tracing::debug!(fields = self.fields.len(), "built options schema");
		Ok(Schema { fields: self.fields, by_name })
	}
}

fn collect_fields(node: &Map<String, JsonValue>, prefix: &str, mut builder: SchemaBuilder) -> Result<SchemaBuilder, SchemaError> {
	for (key, child) in node {
		let name = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
		let JsonValue::Object(object) = child else {
			return Err(SchemaError::NotAnObject { name });
		};

		builder = match object.get("type") {
			Some(JsonValue::String(label)) => {
				let kind = ValueKind::from_label(label).ok_or_else(|| SchemaError::UnknownType {
					name: name.clone(),
					ty: label.clone(),
				})?;
				let default = default_text(&name, object.get("default_value"))?;
				builder.parsed(name, kind, default.as_deref())?
			}
			Some(JsonValue::Object(_)) => collect_fields(object, &name, builder)?,
			Some(_) => return Err(SchemaError::MissingType { name }),
			None if object.is_empty() => return Err(SchemaError::MissingType { name }),
			None => collect_fields(object, &name, builder)?,
		};
	}

	Ok(builder)
}

/// String form of a `default_value` entry. Scalars use their JSON text and
/// arrays are comma-joined so they parse through the list rule.
fn default_text(name: &str, value: Option<&JsonValue>) -> Result<Option<String>, SchemaError> {
	let text = match value {
		None | Some(JsonValue::Null) => return Ok(None),
		Some(JsonValue::String(text)) => text.clone(),
		Some(JsonValue::Bool(flag)) => flag.to_string(),
		Some(JsonValue::Number(number)) => number.to_string(),
		Some(JsonValue::Array(items)) => {
			let mut parts = Vec::with_capacity(items.len());
			for item in items {
				match item {
					JsonValue::Number(number) => parts.push(number.to_string()),
					JsonValue::String(text) => parts.push(text.clone()),
					_ => return Err(SchemaError::UnsupportedDefault { name: name.to_owned() }),
				}
			}
			parts.join(",")
		}
		Some(JsonValue::Object(_)) => return Err(SchemaError::UnsupportedDefault { name: name.to_owned() }),
	};
	Ok(Some(text))
}
