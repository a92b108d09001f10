mod codec;
mod error;
mod kind;
mod resolve;
mod schema;
mod store;
mod value;

/// String codec entry points and the typed value trait.
pub use codec::{OptionType, ScalarType, format, format_as, parse, parse_as, parse_list};
/// Error and result aliases.
pub use error::{OptionsError, ParseFailure, Result, SchemaError};
/// Value kind tags.
pub use kind::ValueKind;
/// Edit distance and closest-name lookup.
pub use resolve::{closest_name, levenshtein};
/// Fixed schema representation and construction.
pub use schema::{Schema, SchemaBuilder, SchemaField};
/// Options store instance.
pub use store::Options;
/// Tagged option value and the ratio alias.
pub use value::{OptionValue, Ratio};
