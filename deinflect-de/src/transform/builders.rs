//! Constructors for the common rule shapes.

use super::string::{deinflect_umlaut, strip_suffix};
use crate::pattern::{RegexPattern, SuffixPattern};
use crate::rule::Rule;

/// Construct a rule that replaces the suffix `suffix` by `replacement`.
///
/// For example, `simple_rule("en", "")` deinflects *guten* to *gut*.
pub fn simple_rule(suffix: &str, replacement: &str) -> Rule {
    let suffix = suffix.to_owned();
    let replacement = replacement.to_owned();

    Rule::new(SuffixPattern::new(suffix.clone()), move |term: &str| {
        strip_suffix(term, &suffix, &replacement)
    })
}

/// Construct a rule that replaces the suffix `suffix` by `replacement` and
/// reverses the rightmost umlaut of the stem.
///
/// The rule only applies to forms that contain an umlaut before the suffix.
/// For example, `umlaut_rule("er", "")` deinflects *Männer* to *Mann*.
pub fn umlaut_rule(suffix: &str, replacement: &str) -> Rule {
    let pattern = RegexPattern::new(&format!("[äöü].*{}$", regex::escape(suffix)))
        .expect("Escaped umlaut suffix pattern does not compile");
    let suffix = suffix.to_owned();
    let replacement = replacement.to_owned();

    Rule::new(pattern, move |term: &str| {
        deinflect_umlaut(&strip_suffix(term, &suffix, &replacement))
    })
}
