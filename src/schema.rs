use crate::{Pattern, PatternError, SerdeSchema, TypeName, Value};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// An ordered set of property rules.
///
/// Rules are checked, and their violations reported, in the order they were
/// added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    entries: Vec<(String, Rule)>,
}

/// The rule attached to one property of a [`Schema`].
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    Type(TypeName),

    /// Implicitly requires a string.
    Pattern(Pattern),

    Object(Schema),
    Predicate(Predicate),

    /// Satisfied if any one alternative is. Alternatives may not themselves
    /// be `AnyOf`, and there must be at least one.
    AnyOf(Vec<Rule>),
}

/// A named test on a single value.
///
/// Predicates compare equal by name.
#[derive(Clone)]
pub struct Predicate {
    name: String,
    test: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

/// A malformed schema. These are faults in the schema itself, as opposed to
/// violations found in a subject.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SchemaError {
    #[error("unsupported schema value for property {path}: {found}")]
    UnsupportedValue { path: String, found: String },

    #[error("unknown type name for property {path}: {name:?}")]
    UnknownType { path: String, name: String },

    #[error("invalid pattern for property {path}")]
    InvalidPattern {
        path: String,
        #[source]
        source: PatternError,
    },

    #[error("empty list of alternatives for property {path}")]
    EmptyAlternatives { path: String },

    #[error("nested list of alternatives for property {path}")]
    NestedAlternatives { path: String },

    #[error("max depth exceeded at property {path}")]
    MaxDepthExceeded { path: String },
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule for `key`, builder-style.
    ///
    /// ```
    /// use arg_err::{Rule, Schema, TypeName};
    ///
    /// let schema = Schema::new()
    ///     .field("name", TypeName::String)
    ///     .field("age", Rule::any_of(vec![TypeName::Number, TypeName::Undefined]));
    ///
    /// assert_eq!(2, schema.len());
    /// ```
    pub fn field(mut self, key: impl Into<String>, rule: impl Into<Rule>) -> Self {
        self.entries.push((key.into(), rule.into()));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts a JSON schema description into a [`Schema`].
    ///
    /// Strings are type names, or patterns when written as `/source/flags`.
    /// Objects are nested schemas and arrays are lists of alternatives. Any
    /// other JSON value is an [`SchemaError::UnsupportedValue`].
    ///
    /// ```
    /// use arg_err::{Rule, Schema, SerdeSchema, TypeName};
    /// use serde_json::json;
    ///
    /// let schema = Schema::from_serde_schema(
    ///     serde_json::from_value::<SerdeSchema>(json!({ "foo": "number" })).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(Some(&Rule::Type(TypeName::Number)), schema.get("foo"));
    /// ```
    pub fn from_serde_schema(serde_schema: SerdeSchema) -> Result<Self, SchemaError> {
        schema_from_json(serde_schema.0, &[])
    }
}

fn schema_from_json(
    obj: serde_json::Map<String, serde_json::Value>,
    path: &[String],
) -> Result<Schema, SchemaError> {
    let mut schema = Schema::new();
    for (key, value) in obj {
        let mut sub_path = path.to_vec();
        sub_path.push(key.clone());

        let rule = rule_from_json(value, &sub_path)?;
        schema.entries.push((key, rule));
    }

    Ok(schema)
}

fn rule_from_json(value: serde_json::Value, path: &[String]) -> Result<Rule, SchemaError> {
    match value {
        serde_json::Value::String(s) => match Pattern::parse_literal(&s) {
            Some(Ok(pattern)) => Ok(Rule::Pattern(pattern)),
            Some(Err(source)) => Err(SchemaError::InvalidPattern {
                path: path.join("."),
                source,
            }),
            None => s
                .parse()
                .map(Rule::Type)
                .map_err(|()| SchemaError::UnknownType {
                    path: path.join("."),
                    name: s,
                }),
        },
        serde_json::Value::Object(obj) => schema_from_json(obj, path).map(Rule::Object),
        serde_json::Value::Array(arr) => {
            let alternatives = arr
                .into_iter()
                .map(|item| rule_from_json(item, path))
                .collect::<Result<Vec<_>, _>>()?;

            check_alternatives(&alternatives, path)?;
            Ok(Rule::AnyOf(alternatives))
        }
        other => Err(SchemaError::UnsupportedValue {
            path: path.join("."),
            found: other.to_string(),
        }),
    }
}

pub(crate) fn check_alternatives(alternatives: &[Rule], path: &[String]) -> Result<(), SchemaError> {
    if alternatives.is_empty() {
        return Err(SchemaError::EmptyAlternatives {
            path: path.join("."),
        });
    }

    if alternatives.iter().any(|r| matches!(r, Rule::AnyOf(_))) {
        return Err(SchemaError::NestedAlternatives {
            path: path.join("."),
        });
    }

    Ok(())
}

impl Rule {
    pub fn any_of<I, R>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Rule>,
    {
        Rule::AnyOf(alternatives.into_iter().map(Into::into).collect())
    }

    /// The description of this rule when listed as one of several
    /// alternatives.
    pub fn describe(&self) -> String {
        match self {
            Rule::Type(type_) => type_.to_string(),
            Rule::Pattern(_) => TypeName::String.to_string(),
            Rule::Object(_) => TypeName::Object.to_string(),
            Rule::Predicate(predicate) => predicate.name().to_owned(),
            Rule::AnyOf(alternatives) => alternatives
                .iter()
                .map(Rule::describe)
                .collect::<Vec<_>>()
                .join(" or "),
        }
    }
}

impl From<TypeName> for Rule {
    fn from(type_: TypeName) -> Self {
        Rule::Type(type_)
    }
}

impl From<Pattern> for Rule {
    fn from(pattern: Pattern) -> Self {
        Rule::Pattern(pattern)
    }
}

impl From<Schema> for Rule {
    fn from(schema: Schema) -> Self {
        Rule::Object(schema)
    }
}

impl From<Predicate> for Rule {
    fn from(predicate: Predicate) -> Self {
        Rule::Predicate(predicate)
    }
}

impl Predicate {
    const ANONYMOUS: &'static str = "anonymous";

    /// Creates a predicate. `name` is what violations report the value was
    /// expected to pass; an empty name is reported as `anonymous`.
    pub fn new<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        Self {
            name: if name.is_empty() {
                Self::ANONYMOUS.to_owned()
            } else {
                name
            },
            test: Arc::new(test),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test(&self, value: &Value) -> bool {
        (self.test)(value)
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .finish()
    }
}
