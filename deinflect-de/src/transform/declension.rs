//! Declension of nouns and adjectives.

use super::builders::{simple_rule, umlaut_rule};
use crate::rule::Rule;

/// Rules for plural, case and comparison endings.
///
/// Both the noun plural and the comparative use *-er*, so the *-er* rules
/// occur twice. The resulting duplicate candidates are left to the
/// caller.
pub fn declension_rules() -> Vec<Rule> {
    vec![
        simple_rule("en", ""),  // guten -> gut
        simple_rule("e", ""),   // Tage -> Tag
        simple_rule("er", ""),  // Kinder -> Kind
        simple_rule("n", ""),   // Regeln -> Regel
        simple_rule("s", ""),   // Autos -> Auto
        simple_rule("es", ""),  // gutes -> gut
        simple_rule("em", ""),  // gutem -> gut
        simple_rule("ern", ""), // Kindern -> Kind
        // Plurals with umlaut.
        umlaut_rule("er", ""), // Männer -> Mann
        umlaut_rule("e", ""),  // Bäume -> Baum
        umlaut_rule("en", ""),
        umlaut_rule("än", "an"),
        // Comparison.
        simple_rule("er", ""),    // schneller -> schnell
        simple_rule("sten", ""),  // besten -> be
        simple_rule("esten", ""), // neuesten -> neu
        umlaut_rule("er", ""),    // kälter -> kalt
        umlaut_rule("sten", ""),  // ärmsten -> arm
    ]
}

/// Rules for feminine derivations in *-in*.
pub fn feminine_rules() -> Vec<Rule> {
    vec![
        simple_rule("innen", ""),
        simple_rule("in", ""),
        umlaut_rule("innen", ""), // Ärztinnen -> Arzt
        umlaut_rule("in", ""),    // Köchin -> Koch
    ]
}

#[cfg(test)]
mod tests {
    use super::{declension_rules, feminine_rules};
    use crate::transform::test_helpers::run_category_test_cases;
    use crate::transform::TransformCategory;

    #[test]
    fn declension() {
        let category = TransformCategory::new(
            "Declension",
            "Nouns and Adjectives",
            declension_rules().into_iter().chain(feminine_rules()),
        );
        run_category_test_cases("testdata/declension.test", &category);
    }

    #[test]
    fn plural_and_comparative_offer_the_same_candidate() {
        let rules = declension_rules();
        let candidates = rules
            .iter()
            .filter_map(|rule| rule.apply("Männer"))
            .filter(|candidate| candidate == "Mann")
            .count();
        assert_eq!(candidates, 2);
    }

    #[test]
    fn feminine_with_umlaut() {
        let rules = feminine_rules();
        assert_eq!(rules[3].apply("Köchin"), Some("Koch".to_owned()));
        assert_eq!(rules[2].apply("Köchinnen"), Some("Koch".to_owned()));
    }
}
