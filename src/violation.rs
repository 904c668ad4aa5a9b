use crate::TypeName;
use std::fmt;

/// One mismatch between a subject and a schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Violation {
    /// Property path from the root of the subject, one segment per key.
    pub path: Vec<String>,
    pub expectation: Expectation,

    /// Whether the violating property came from the optional schema.
    pub optional: bool,
}

/// What a violating value was expected to be, and what it was instead.
#[derive(Clone, Debug, PartialEq)]
pub enum Expectation {
    Type { expected: TypeName, actual: TypeName },

    /// `pattern` is in literal form, `actual` is the unquoted subject string.
    Pattern { pattern: String, actual: String },

    Predicate { name: String },
    AnyOf { expected: Vec<String>, actual: TypeName },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {}property {} ",
            if self.optional { "optional " } else { "" },
            self.path.join(".")
        )?;

        match &self.expectation {
            Expectation::Type { expected, actual } => {
                write!(f, "to be of type {} (was {})", expected, actual)
            }
            Expectation::Pattern { pattern, actual } => {
                write!(f, "to match {} (was {})", pattern, serde_json::Value::from(actual.as_str()))
            }
            Expectation::Predicate { name } => write!(f, "to pass {}", name),
            Expectation::AnyOf { expected, actual } => {
                write!(f, "to be of type {} (was {})", expected.join(" or "), actual)
            }
        }
    }
}

/// Joins violations into a single message, in order. Returns `None` if there
/// are no violations.
pub fn render(violations: &[Violation]) -> Option<String> {
    if violations.is_empty() {
        return None;
    }

    Some(
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(path: &[&str], expectation: Expectation) -> Violation {
        Violation {
            path: path.iter().map(|s| s.to_string()).collect(),
            expectation,
            optional: false,
        }
    }

    #[test]
    fn templates() {
        assert_eq!(
            "expected property foo to be of type number (was string)",
            violation(
                &["foo"],
                Expectation::Type {
                    expected: TypeName::Number,
                    actual: TypeName::String
                }
            )
            .to_string()
        );

        assert_eq!(
            "expected property foo to match /^hel+o$/ (was \"goodbye\")",
            violation(
                &["foo"],
                Expectation::Pattern {
                    pattern: "/^hel+o$/".to_owned(),
                    actual: "goodbye".to_owned()
                }
            )
            .to_string()
        );

        assert_eq!(
            "expected property foo to pass isEven",
            violation(
                &["foo"],
                Expectation::Predicate {
                    name: "isEven".to_owned()
                }
            )
            .to_string()
        );

        assert_eq!(
            "expected property foo to be of type string or object (was regexp)",
            violation(
                &["foo"],
                Expectation::AnyOf {
                    expected: vec!["string".to_owned(), "object".to_owned()],
                    actual: TypeName::Regexp
                }
            )
            .to_string()
        );
    }

    #[test]
    fn optional_and_nested_path() {
        let mut v = violation(
            &["bar", "baz", "bat"],
            Expectation::Type {
                expected: TypeName::String,
                actual: TypeName::Number,
            },
        );
        v.optional = true;

        assert_eq!(
            "expected optional property bar.baz.bat to be of type string (was number)",
            v.to_string()
        );
    }

    #[test]
    fn quotes_pattern_actual() {
        assert_eq!(
            "expected property foo to match /x/ (was \"say \\\"hi\\\"\")",
            violation(
                &["foo"],
                Expectation::Pattern {
                    pattern: "/x/".to_owned(),
                    actual: "say \"hi\"".to_owned()
                }
            )
            .to_string()
        );
    }

    #[test]
    fn render_joins_in_order() {
        assert_eq!(None, render(&[]));

        let violations = vec![
            violation(
                &["foo"],
                Expectation::Type {
                    expected: TypeName::Number,
                    actual: TypeName::String,
                },
            ),
            violation(
                &["bar"],
                Expectation::Type {
                    expected: TypeName::String,
                    actual: TypeName::Number,
                },
            ),
        ];

        assert_eq!(
            Some(
                "expected property foo to be of type number (was string), \
                 expected property bar to be of type string (was number)"
                    .to_owned()
            ),
            render(&violations)
        );
    }
}
