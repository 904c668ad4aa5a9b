use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON representation of a schema, compatible with `serde_json`.
///
/// Keys map to rules written as JSON: a type name (`"number"`), a pattern
/// literal (`"/^hel+o$/"`), a nested object, or an array of alternatives.
/// Key order is preserved.
///
/// To convert this into a [`Schema`][`crate::Schema`], see
/// [`Schema::from_serde_schema`][`crate::Schema::from_serde_schema`].
///
/// ```
/// use arg_err::SerdeSchema;
/// use serde_json::json;
///
/// let serde_schema: SerdeSchema =
///     serde_json::from_value(json!({ "foo": "number", "bar": ["string", "/x/"] })).unwrap();
///
/// assert_eq!(
///     vec!["foo", "bar"],
///     serde_schema.0.keys().map(String::as_str).collect::<Vec<_>>()
/// );
/// ```
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct SerdeSchema(pub Map<String, Value>);
