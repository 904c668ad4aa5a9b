use crate::Pattern;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The type names a subject value can report.
///
/// These are the names used on both sides of a type comparison: as the tag
/// of a [`Rule::Type`][`crate::Rule::Type`] and as the observed type of a
/// subject value in violation messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum TypeName {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Object,
    Array,
    Function,
    Regexp,
}

impl TypeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
            Self::Array => "array",
            Self::Function => "function",
            Self::Regexp => "regexp",
        }
    }
}

impl FromStr for TypeName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undefined" => Ok(Self::Undefined),
            "null" => Ok(Self::Null),
            "boolean" => Ok(Self::Boolean),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            "function" => Ok(Self::Function),
            "regexp" => Ok(Self::Regexp),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subject value.
///
/// `Undefined` is what a missing key reads as. `Function` is an opaque
/// marker for a callable argument, carrying only its name.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    Function(String),
    Regexp(Pattern),
}

impl Value {
    /// Builds an object value from key-value pairs.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn type_name(&self) -> TypeName {
        match self {
            Value::Undefined => TypeName::Undefined,
            Value::Null => TypeName::Null,
            Value::Boolean(_) => TypeName::Boolean,
            Value::Number(_) => TypeName::Number,
            Value::String(_) => TypeName::String,
            Value::Array(_) => TypeName::Array,
            Value::Object(_) => TypeName::Object,
            Value::Function(_) => TypeName::Function,
            Value::Regexp(_) => TypeName::Regexp,
        }
    }

    /// Looks up a property. Non-objects have no properties, and a property
    /// explicitly set to `Undefined` counts as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.get(key).filter(|v| !v.is_undefined()),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Pattern> for Value {
    fn from(pattern: Pattern) -> Self {
        Value::Regexp(pattern)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_name_from_str() {
        assert_eq!(Err(()), "String".parse::<TypeName>());
        assert_eq!(Err(()), "int32".parse::<TypeName>());
        assert_eq!(Ok(TypeName::Undefined), "undefined".parse());
        assert_eq!(Ok(TypeName::Null), "null".parse());
        assert_eq!(Ok(TypeName::Boolean), "boolean".parse());
        assert_eq!(Ok(TypeName::Number), "number".parse());
        assert_eq!(Ok(TypeName::String), "string".parse());
        assert_eq!(Ok(TypeName::Object), "object".parse());
        assert_eq!(Ok(TypeName::Array), "array".parse());
        assert_eq!(Ok(TypeName::Function), "function".parse());
        assert_eq!(Ok(TypeName::Regexp), "regexp".parse());
    }

    #[test]
    fn type_names() {
        assert_eq!(TypeName::Undefined, Value::Undefined.type_name());
        assert_eq!(TypeName::Null, Value::from(json!(null)).type_name());
        assert_eq!(TypeName::Boolean, Value::from(json!(true)).type_name());
        assert_eq!(TypeName::Number, Value::from(json!(1.5)).type_name());
        assert_eq!(TypeName::String, Value::from(json!("x")).type_name());
        assert_eq!(TypeName::Array, Value::from(json!([1, 2])).type_name());
        assert_eq!(TypeName::Object, Value::from(json!({})).type_name());
        assert_eq!(
            TypeName::Function,
            Value::Function("callback".to_owned()).type_name()
        );
        assert_eq!(
            TypeName::Regexp,
            Value::from(Pattern::new("reg[ex]").unwrap()).type_name()
        );
    }

    #[test]
    fn get() {
        let value = Value::object(vec![("foo", Value::from(1)), ("bar", Value::Undefined)]);

        assert_eq!(Some(&Value::Number(1.0)), value.get("foo"));
        assert_eq!(None, value.get("bar"));
        assert_eq!(None, value.get("baz"));
        assert_eq!(None, Value::from("foo").get("len"));
    }
}
