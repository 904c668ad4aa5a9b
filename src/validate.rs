use crate::schema::check_alternatives;
use crate::{render, Expectation, Rule, Schema, SchemaError, TypeName, Value, Violation};
use tracing::{debug, trace};

#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    max_depth: usize,
    max_errors: usize,
}

impl ValidateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits how many nested schemas deep validation may go. Zero means no
    /// limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Keeps only the first `max_errors` violations. Zero means no limit.
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Validates `subject`, returning a combined message describing every
/// violation, or `None` if there are none.
///
/// Every key of `required` is checked. Keys of `optional` are checked only if
/// they are present in the subject.
///
/// ```
/// use arg_err::{validate_errors, Schema, TypeName, Value};
/// use serde_json::json;
///
/// let schema = Schema::new()
///     .field("foo", TypeName::Number)
///     .field("bar", TypeName::String);
///
/// assert_eq!(
///     Some("expected property bar to be of type string (was undefined)".to_owned()),
///     validate_errors(&Value::from(json!({ "foo": 2 })), &schema, None).unwrap()
/// );
/// ```
pub fn validate_errors(
    subject: &Value,
    required: &Schema,
    optional: Option<&Schema>,
) -> Result<Option<String>, SchemaError> {
    let violations = validate(subject, required, optional, ValidateOptions::new())?;
    Ok(render(&violations))
}

/// Validates `subject`, returning every violation in the order found:
/// required keys first, then optional keys, each in schema order.
pub fn validate(
    subject: &Value,
    required: &Schema,
    optional: Option<&Schema>,
    options: ValidateOptions,
) -> Result<Vec<Violation>, SchemaError> {
    let matcher = Matcher {
        max_depth: options.max_depth,
    };

    let mut violations = matcher.validate(subject, required, &[], Presence::Required, false)?;
    if let Some(optional) = optional {
        violations.extend(matcher.validate(subject, optional, &[], Presence::Optional, true)?);
    }

    if options.max_errors != 0 {
        violations.truncate(options.max_errors);
    }

    debug!(violations = violations.len(), "validated subject");
    Ok(violations)
}

struct Matcher {
    max_depth: usize,
}

#[derive(Clone, Copy, PartialEq)]
enum Presence {
    Required,

    /// Absent keys are skipped.
    Optional,
}

impl Matcher {
    fn validate(
        &self,
        subject: &Value,
        schema: &Schema,
        path: &[String],
        presence: Presence,
        optional: bool,
    ) -> Result<Vec<Violation>, SchemaError> {
        let mut violations = vec![];
        for (key, rule) in schema.entries() {
            let mut key_path = path.to_vec();
            key_path.push(key.to_owned());

            violations.extend(self.match_key(
                subject.get(key),
                rule,
                &key_path,
                presence,
                optional,
            )?);
        }

        Ok(violations)
    }

    fn match_key(
        &self,
        value: Option<&Value>,
        rule: &Rule,
        path: &[String],
        presence: Presence,
        optional: bool,
    ) -> Result<Vec<Violation>, SchemaError> {
        let value = match value {
            Some(value) => value,
            None if presence == Presence::Optional => return Ok(vec![]),
            None => &Value::Undefined,
        };

        let expectation = match rule {
            Rule::Type(expected) => {
                let actual = value.type_name();
                if actual == *expected {
                    return Ok(vec![]);
                }

                Expectation::Type {
                    expected: *expected,
                    actual,
                }
            }
            Rule::Pattern(pattern) => match value {
                Value::String(s) if pattern.is_match(s) => return Ok(vec![]),
                Value::String(s) => Expectation::Pattern {
                    pattern: pattern.to_string(),
                    actual: s.clone(),
                },
                _ => Expectation::Type {
                    expected: TypeName::String,
                    actual: value.type_name(),
                },
            },
            Rule::Object(schema) => {
                if let Value::Object(_) = value {
                    if self.max_depth != 0 && path.len() >= self.max_depth {
                        return Err(SchemaError::MaxDepthExceeded {
                            path: path.join("."),
                        });
                    }

                    return self.validate(value, schema, path, Presence::Required, optional);
                }

                Expectation::Type {
                    expected: TypeName::Object,
                    actual: value.type_name(),
                }
            }
            Rule::Predicate(predicate) => {
                if predicate.test(value) {
                    return Ok(vec![]);
                }

                Expectation::Predicate {
                    name: predicate.name().to_owned(),
                }
            }
            Rule::AnyOf(alternatives) => {
                check_alternatives(alternatives, path)?;
                if alternatives.iter().any(|alt| matches_alternative(value, alt)) {
                    return Ok(vec![]);
                }

                Expectation::AnyOf {
                    expected: alternatives.iter().map(Rule::describe).collect(),
                    actual: value.type_name(),
                }
            }
        };

        trace!(path = %path.join("."), optional, "violation");
        Ok(vec![Violation {
            path: path.to_vec(),
            expectation,
            optional,
        }])
    }
}

// Nested schemas among alternatives are matched on type alone.
fn matches_alternative(value: &Value, rule: &Rule) -> bool {
    match rule {
        Rule::Type(expected) => value.type_name() == *expected,
        Rule::Pattern(pattern) => value.as_str().map_or(false, |s| pattern.is_match(s)),
        Rule::Object(_) => value.type_name() == TypeName::Object,
        Rule::Predicate(predicate) => predicate.test(value),
        Rule::AnyOf(_) => false,
    }
}
