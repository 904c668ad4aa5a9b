//! Structural validation of keyed arguments.
//!
//! A subject [`Value`] is checked against a required [`Schema`] and, if given,
//! an optional one. Every mismatch becomes a [`Violation`], and violations
//! render into one human-readable message:
//!
//! ```
//! use arg_err::{validate_errors, Pattern, Schema, TypeName, Value};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field("foo", TypeName::Number)
//!     .field("greeting", Pattern::new("^hel+o$").unwrap());
//!
//! let optional = Schema::new().field("bar", TypeName::String);
//!
//! let subject = Value::from(json!({ "foo": "2", "greeting": "hello", "bar": 456 }));
//!
//! assert_eq!(
//!     Some(
//!         "expected property foo to be of type number (was string), \
//!          expected optional property bar to be of type string (was number)"
//!             .to_owned()
//!     ),
//!     validate_errors(&subject, &schema, Some(&optional)).unwrap()
//! );
//! ```
//!
//! Malformed schemas are reported as a [`SchemaError`] rather than as
//! violations.

mod pattern;
mod schema;
mod serde_schema;
mod validate;
mod value;
mod violation;

pub use pattern::*;
pub use schema::*;
pub use serde_schema::*;
pub use validate::*;
pub use value::*;
pub use violation::*;
