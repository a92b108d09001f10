use std::sync::Arc;

use crate::options::{OptionType, OptionValue, OptionsError, Result, Schema, ValueKind, format, parse};

/// One value per schema field, addressed by name.
///
/// Cloning produces an independent store; only the immutable schema is
/// shared. A field's value kind never changes after construction.
#[derive(Debug, Clone)]
pub struct Options {
	schema: Arc<Schema>,
	values: Vec<OptionValue>,
}

impl Options {
	/// Create a store holding every field's default.
	pub fn new(schema: Arc<Schema>) -> Self {
		let values = schema.fields().iter().map(|field| field.default.clone()).collect();
		Self { schema, values }
	}

	/// Schema this store was built from.
	pub fn schema(&self) -> &Arc<Schema> {
		&self.schema
	}

	/// Current value of `name`.
	pub fn get(&self, name: &str) -> Result<&OptionValue> {
		let idx = self.slot(name)?;
		Ok(&self.values[idx])
	}

	/// Current value of `name` as a concrete Rust type.
	pub fn get_typed<T: OptionType>(&self, name: &str) -> Result<T> {
		let value = self.get(name)?;
		T::from_value(value).ok_or_else(|| OptionsError::incompatible(name, value.kind(), T::KIND))
	}

	/// Declared kind of `name`.
	pub fn kind_of(&self, name: &str) -> Result<ValueKind> {
		let idx = self.slot(name)?;
		Ok(self.schema.fields()[idx].kind)
	}

	/// Replace the value of `name`; the value must have the declared kind.
	pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<()> {
		let idx = self.slot(name)?;
		let value = value.into();
		let declared = self.schema.fields()[idx].kind;
		if value.kind() != declared {
			return Err(OptionsError::incompatible(name, declared, value.kind()));
		}

		self.values[idx] = value;
		Ok(())
	}

	/// Canonical string form of the value of `name`.
	pub fn get_as_string(&self, name: &str) -> Result<String> {
		Ok(format(self.get(name)?))
	}

	/// Parse `input` as the declared kind of `name` and store it. The stored
	/// value is unchanged when parsing fails.
	pub fn set_as_string(&mut self, name: &str, input: &str) -> Result<()> {
		let idx = self.slot(name)?;
		let value = parse(self.schema.fields()[idx].kind, input)?;
		tracing::trace!(name, input, "option set from string");
		self.values[idx] = value;
		Ok(())
	}

	/// Flip a boolean field.
	pub fn toggle(&mut self, name: &str) -> Result<()> {
		let idx = self.slot(name)?;
		match &mut self.values[idx] {
			OptionValue::Boolean(flag) => {
				*flag = !*flag;
				Ok(())
			}
			other => Err(OptionsError::incompatible(name, other.kind(), ValueKind::Boolean)),
		}
	}

	/// Whether `name` holds an equal value (kind and payload, exact) in both stores.
	pub fn is_same(&self, other: &Options, name: &str) -> Result<bool> {
		Ok(self.get(name)? == other.get(name)?)
	}

	/// Overwrite `name` with the value `other` holds for it.
	pub fn copy(&mut self, other: &Options, name: &str) -> Result<()> {
		let value = other.get(name)?.clone();
		self.set(name, value)
	}

	/// Restore the schema default of `name`.
	pub fn reset(&mut self, name: &str) -> Result<()> {
		let idx = self.slot(name)?;
		self.values[idx] = self.schema.fields()[idx].default.clone();
		Ok(())
	}

	/// Every field name in declaration order.
	pub fn names(&self) -> Vec<&str> {
		self.schema.names().collect()
	}

	/// Declared name closest to `query` and its edit distance.
	pub fn closest_option(&self, query: &str) -> (&str, usize) {
		self.schema.closest_option(query)
	}

	/// `(name, value)` pairs in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
		self.schema.names().zip(&self.values)
	}

	fn slot(&self, name: &str) -> Result<usize> {
		self.schema.index_of(name).ok_or_else(|| OptionsError::inexistent(name))
	}
}

impl From<Schema> for Options {
	fn from(schema: Schema) -> Self {
		Self::new(Arc::new(schema))
	}
}
