//! Irregular verb forms: vowel shifts, participles and *zu*-infinitives.

use lazy_static::lazy_static;
use regex::Regex;

use crate::pattern::RegexPattern;
use crate::rule::Rule;

lazy_static! {
    static ref CONJUGATION_ENDING: Regex =
        Regex::new("(t|st|e)$").expect("Invalid conjugation ending pattern");
    static ref FINAL_IE: Regex = Regex::new("ie([^aeiou]*)$").expect("Invalid ie pattern");
    static ref FINAL_I: Regex = Regex::new("i([^aeiou]*)$").expect("Invalid i pattern");
}

fn compile(pattern: &str) -> RegexPattern {
    RegexPattern::new(pattern).expect("Invalid complex verb pattern")
}

/// Rules for irregular verb forms, in the order in which they are offered.
pub fn complex_verb_rules() -> Vec<Rule> {
    vec![
        vowel_shift_rule(),
        zu_infinitive_rule(),
        weak_participle_rule(),
        strong_participle_rule(),
    ]
}

/// Reverse the *e* -> *i*/*ie* stem vowel shift.
///
/// The leftmost conjugation ending (*t*, *st*, *e*) that reaches the end
/// of the form is stripped. A root ending in *ie* loses the *ie*,
/// otherwise the last *ie* or *i* of the root is rewritten to *e*. The
/// infinitive ending is attached:
///
/// * *spricht* -> *sprechen*
/// * *gibst* -> *geben*
/// * *siehst* -> *sehen*
///
/// There is no check that the rewritten vowel is the shifted one, so
/// *liest* becomes *len* and *nimmt* becomes *nemmen*.
pub fn vowel_shift_rule() -> Rule {
    Rule::new(compile("(i|ie)[^aeiou]+(t|st|e)$"), reverse_vowel_shift)
}

fn reverse_vowel_shift(term: &str) -> String {
    let root = CONJUGATION_ENDING.replace(term, "");
    if let Some(stem) = root.strip_suffix("ie") {
        return format!("{}en", stem);
    }

    let root = FINAL_IE.replace(&root, "e${1}").into_owned();
    let root = FINAL_I.replace(&root, "e${1}");
    format!("{}en", root)
}

/// Remove the *zu* of *zu*-infinitives.
///
/// *aufzumachen* -> *aufmachen*
///
/// The first occurrence of *zu* is removed, even when it is not the
/// infinitive marker.
pub fn zu_infinitive_rule() -> Rule {
    Rule::new(compile("zu[a-zßäöü]+en$"), |term: &str| {
        term.replacen("zu", "", 1)
    })
}

/// Reverse weak participles.
///
/// *gemacht* -> *machen*
pub fn weak_participle_rule() -> Rule {
    Rule::new(compile("^ge.+t$"), |term: &str| {
        let stem = term
            .strip_prefix("ge")
            .and_then(|rest| rest.strip_suffix('t'))
            .unwrap_or(term);
        format!("{}en", stem)
    })
}

/// Reverse strong participles.
///
/// *gefahren* -> *fahren*
pub fn strong_participle_rule() -> Rule {
    Rule::new(compile("^ge.+en$"), |term: &str| {
        term.strip_prefix("ge").unwrap_or(term).to_owned()
    })
}
