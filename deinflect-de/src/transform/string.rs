//! String rewrites shared by the rule builders.

/// Umlaut reversals, in order of priority.
///
/// *äu* comes first, so that the digraph is not reversed as a lone *ä*.
const UMLAUT_REVERSALS: [(&str, &str); 4] = [("äu", "au"), ("ä", "a"), ("ö", "o"), ("ü", "u")];

/// Replace the suffix `suffix` of `term` by `replacement`.
///
/// Returns `term` unchanged when it does not end in `suffix`.
pub fn strip_suffix(term: &str, suffix: &str, replacement: &str) -> String {
    match term.strip_suffix(suffix) {
        Some(stem) => {
            let mut stripped = String::with_capacity(stem.len() + replacement.len());
            stripped.push_str(stem);
            stripped.push_str(replacement);
            stripped
        }
        None => term.to_owned(),
    }
}

/// Reverse the rightmost umlaut of `term`.
///
/// Only the first umlaut in the order *äu*, *ä*, *ö*, *ü* that occurs in
/// `term` is considered and only its rightmost occurrence is rewritten:
///
/// * *Häuser* -> *Hauser*
/// * *Männer* -> *Manner*
/// * *Töne* -> *Tone*
pub fn deinflect_umlaut(term: &str) -> String {
    for &(umlaut, vowel) in &UMLAUT_REVERSALS {
        if let Some(idx) = term.rfind(umlaut) {
            let mut reversed = term.to_owned();
            reversed.replace_range(idx..idx + umlaut.len(), vowel);
            return reversed;
        }
    }

    term.to_owned()
}

#[cfg(test)]
mod tests {
    use super::{deinflect_umlaut, strip_suffix};

    #[test]
    fn strip_suffix_replaces_suffix() {
        assert_eq!(strip_suffix("guten", "en", ""), "gut");
        assert_eq!(strip_suffix("machst", "st", "en"), "machen");
        assert_eq!(strip_suffix("en", "en", ""), "");
    }

    #[test]
    fn strip_suffix_is_identity_without_suffix() {
        assert_eq!(strip_suffix("gut", "en", "x"), "gut");
        assert_eq!(strip_suffix("", "en", "x"), "");
        assert_eq!(strip_suffix("Mann", "Männer", ""), "Mann");
    }

    #[test]
    fn umlauts_are_reversed() {
        assert_eq!(deinflect_umlaut("Häuser"), "Hauser");
        assert_eq!(deinflect_umlaut("Männer"), "Manner");
        assert_eq!(deinflect_umlaut("Töne"), "Tone");
        assert_eq!(deinflect_umlaut("Türen"), "Turen");
    }

    #[test]
    fn only_rightmost_umlaut_is_reversed() {
        assert_eq!(deinflect_umlaut("Ärztinnenärzte"), "Ärztinnenarzte");
        assert_eq!(deinflect_umlaut("müßüg"), "müßug");
    }

    #[test]
    fn digraph_takes_priority() {
        // The lone ä after the digraph is left alone.
        assert_eq!(deinflect_umlaut("Häusä"), "Hausä");
        // ä takes priority over ö and ü.
        assert_eq!(deinflect_umlaut("Bögä"), "Böga");
    }

    #[test]
    fn terms_without_umlaut_are_unchanged() {
        for term in &["Haus", "", "machen", "Straße"] {
            assert_eq!(deinflect_umlaut(term), *term);
            assert_eq!(deinflect_umlaut(&deinflect_umlaut(term)), *term);
        }
    }
}
