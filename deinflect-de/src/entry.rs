//! Condition tags for dictionary entries.
//!
//! DSL dictionaries mark the part of speech of an entry with abbreviations
//! in `[p]` markup, e.g. `[p]m[/p]` for a masculine noun. The tags found in
//! an entry body are the conditions that the entry's headword carries.

use std::collections::BTreeSet;

/// Tag for nouns.
pub const NOUN: &str = "n";

/// Tag for verbs.
pub const VERB: &str = "v";

/// Tag for adjectives.
pub const ADJECTIVE: &str = "adj";

/// Tag for adverbs.
///
/// This tag is not part of the German condition table, no rule produces
/// or consumes adverbs.
pub const ADVERB: &str = "adv";

/// Part-of-speech abbreviations and their condition tags.
const POS_ABBREVIATIONS: [(&str, &str); 11] = [
    ("f", NOUN),
    ("m", NOUN),
    ("n", NOUN),
    ("nm", NOUN),
    ("nf", NOUN),
    ("v", VERB),
    ("vt", VERB),
    ("vi", VERB),
    ("refl", VERB),
    ("adj", ADJECTIVE),
    ("adv", ADVERB),
];

/// Find the condition tags of a dictionary entry.
///
/// Returns the sorted tags of all part-of-speech abbreviations that occur
/// in `body` as `[p]abbreviation[/p]`. An entry can carry several tags,
/// e.g. a word that is both an adjective and an adverb.
pub fn entry_conditions(body: &str) -> Vec<&'static str> {
    let mut tags = BTreeSet::new();

    for abbreviation in abbreviations(body) {
        if let Some(&(_, tag)) = POS_ABBREVIATIONS
            .iter()
            .find(|&&(pos, _)| pos == abbreviation)
        {
            tags.insert(tag);
        }
    }

    tags.into_iter().collect()
}

/// Iterate over the contents of `[p]...[/p]` markup.
fn abbreviations(body: &str) -> impl Iterator<Item = &str> {
    body.split("[p]").skip(1).filter_map(|rest| {
        rest.find("[/p]")
            .map(|end| &rest[..end])
            .filter(|abbreviation| !abbreviation.contains('['))
    })
}

#[cfg(test)]
mod tests {
    use super::{abbreviations, entry_conditions};

    #[test]
    fn finds_abbreviations() {
        assert_eq!(
            abbreviations("[m1][p]m[/p] [p]-(e)s, -e[/p][/m]").collect::<Vec<_>>(),
            vec!["m", "-(e)s, -e"]
        );
        assert_eq!(abbreviations("[p]unclosed").count(), 0);
        assert_eq!(abbreviations("[p][i]m[/i][/p]").count(), 0);
    }

    #[test]
    fn tags_nouns() {
        assert_eq!(entry_conditions("[m1][p]f[/p] Haus[/m]"), vec!["n"]);
        assert_eq!(entry_conditions("[p]nm[/p]"), vec!["n"]);
    }

    #[test]
    fn tags_verbs() {
        assert_eq!(entry_conditions("[p]vt[/p] machen"), vec!["v"]);
        assert_eq!(entry_conditions("[p]refl[/p] sich freuen"), vec!["v"]);
    }

    #[test]
    fn tags_are_sorted_and_unique() {
        assert_eq!(
            entry_conditions("[p]adv[/p] [p]adj[/p] [p]adj[/p]"),
            vec!["adj", "adv"]
        );
        assert_eq!(
            entry_conditions("[p]vi[/p] [p]vt[/p] [p]n[/p]"),
            vec!["n", "v"]
        );
    }

    #[test]
    fn abbreviations_must_match_exactly() {
        assert!(entry_conditions("[p]vulg[/p]").is_empty());
        assert!(entry_conditions("m f n adj").is_empty());
        assert!(entry_conditions("").is_empty());
    }
}
