use regex::{Regex, RegexBuilder};
use std::fmt;
use thiserror::Error;

/// A compiled regular expression used as a schema rule, or carried by a
/// subject as a `regexp` value.
///
/// Patterns keep the source text and flags they were built from, so that they
/// can be rendered back in their literal `/source/flags` form:
///
/// ```
/// use arg_err::Pattern;
///
/// let pattern = Pattern::with_flags("^hel+o$", "i").unwrap();
/// assert!(pattern.is_match("HELLO"));
/// assert_eq!("/^hel+o$/i", pattern.to_string());
/// ```
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    flags: String,
    regex: Regex,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum PatternError {
    #[error("invalid regular expression: {0}")]
    Syntax(#[from] regex::Error),

    #[error("unsupported pattern flag: {0:?}")]
    UnsupportedFlag(char),
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        Self::with_flags(source, "")
    }

    /// Compiles `source` with the given flags.
    ///
    /// `i`, `m` and `s` map onto case-insensitive, multi-line and
    /// dot-matches-newline matching. `g` and `u` are accepted and have no
    /// effect, since matching is stateless and always Unicode-aware.
    pub fn with_flags(source: &str, flags: &str) -> Result<Self, PatternError> {
        let mut builder = RegexBuilder::new(source);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'g' | 'u' => {}
                other => return Err(PatternError::UnsupportedFlag(other)),
            }
        }

        Ok(Self {
            source: source.to_owned(),
            flags: flags.to_owned(),
            regex: builder.build()?,
        })
    }

    /// Parses a `/source/flags` literal. Returns `None` if `literal` is not
    /// written in that form at all.
    pub fn parse_literal(literal: &str) -> Option<Result<Self, PatternError>> {
        let rest = literal.strip_prefix('/')?;
        let end = rest.rfind('/')?;
        Some(Self::with_flags(&rest[..end], &rest[end + 1..]))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn is_match(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_form() {
        assert_eq!("/^hel+o$/", Pattern::new("^hel+o$").unwrap().to_string());
        assert_eq!(
            "/a.b/ms",
            Pattern::with_flags("a.b", "ms").unwrap().to_string()
        );
    }

    #[test]
    fn flags() {
        assert!(!Pattern::new("^abc$").unwrap().is_match("ABC"));
        assert!(Pattern::with_flags("^abc$", "i").unwrap().is_match("ABC"));
        assert!(Pattern::with_flags("^b$", "m").unwrap().is_match("a\nb\nc"));
        assert!(Pattern::with_flags("a.b", "s").unwrap().is_match("a\nb"));
        assert!(Pattern::with_flags("a", "gu").unwrap().is_match("a"));

        assert_eq!(
            PatternError::UnsupportedFlag('y'),
            Pattern::with_flags("a", "y").unwrap_err()
        );
    }

    #[test]
    fn invalid_syntax() {
        match Pattern::new("(unclosed") {
            Err(PatternError::Syntax(_)) => {}
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn parse_literal() {
        let pattern = Pattern::parse_literal("/^a/b$/i").unwrap().unwrap();
        assert_eq!("^a/b$", pattern.source());
        assert_eq!("i", pattern.flags());

        assert!(Pattern::parse_literal("string").is_none());
        assert!(Pattern::parse_literal("/").is_none());
        assert!(Pattern::parse_literal("/a/x").unwrap().is_err());
    }
}
