//! Patterns that decide whether a rule applies to a surface form.

use regex::Regex;

use crate::error::DeinflectError;

/// A compiled pattern.
///
/// A pattern decides whether a rule is applicable to a surface form.
/// Implementations can be backed by a regular expression library or by
/// simpler automata, rules only rely on this trait.
pub trait Pattern: Send + Sync {
    /// Check whether the pattern matches anywhere in `haystack`.
    fn is_match(&self, haystack: &str) -> bool;

    /// The pattern in regular expression syntax.
    fn as_str(&self) -> &str;
}

/// Pattern backed by the `regex` crate.
#[derive(Clone, Debug)]
pub struct RegexPattern(Regex);

impl RegexPattern {
    pub fn new(pattern: &str) -> Result<Self, DeinflectError> {
        Regex::new(pattern)
            .map(RegexPattern)
            .map_err(|source| DeinflectError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }
}

impl Pattern for RegexPattern {
    fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }

    fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pattern that matches strings ending in a fixed suffix.
///
/// Equivalent to the regular expression `suffix$` with `suffix` escaped,
/// without compiling a regular expression.
#[derive(Clone, Debug)]
pub struct SuffixPattern {
    suffix: String,
    source: String,
}

impl SuffixPattern {
    pub fn new(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let source = format!("{}$", regex::escape(&suffix));
        SuffixPattern { suffix, source }
    }
}

impl Pattern for SuffixPattern {
    fn is_match(&self, haystack: &str) -> bool {
        haystack.ends_with(&self.suffix)
    }

    fn as_str(&self) -> &str {
        &self.source
    }
}
