//! Orthographic rewrites and directional prefixes.
//!
//! These rules are independent of the part of speech.

use crate::pattern::RegexPattern;
use crate::rule::Rule;

/// Orthography and prefix rules.
pub fn misc_rules() -> Vec<Rule> {
    vec![sharp_s_rule(), directional_prefix_rule()]
}

/// Replace every *ss* by *ß*.
///
/// *dass* -> *daß*
pub fn sharp_s_rule() -> Rule {
    Rule::new(
        RegexPattern::new("ss").expect("Invalid sharp s pattern"),
        |term: &str| term.replace("ss", "ß"),
    )
}

/// Strip the directional prefixes *hin* and *her*.
///
/// *hinaus* -> *aus*, *herein* -> *ein*
pub fn directional_prefix_rule() -> Rule {
    Rule::new(
        RegexPattern::new("^(hin|her)").expect("Invalid directional prefix pattern"),
        |term: &str| {
            term.strip_prefix("hin")
                .or_else(|| term.strip_prefix("her"))
                .unwrap_or(term)
                .to_owned()
        },
    )
}
