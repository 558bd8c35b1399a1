//! Regular verb conjugation.

use super::builders::{simple_rule, umlaut_rule};
use crate::rule::Rule;

/// Rules for regular present and past tense endings.
pub fn conjugation_rules() -> Vec<Rule> {
    vec![
        simple_rule("en", ""),
        simple_rule("est", "en"),
        simple_rule("ten", "en"),
        simple_rule("tet", "en"),
        simple_rule("test", "en"),
        simple_rule("te", "en"),
        simple_rule("st", "en"),
        simple_rule("et", "en"),
        simple_rule("t", "en"),
        // Verbs in -ern and -eln: wanderst -> wandern
        simple_rule("st", "n"),
        simple_rule("t", "n"),
        // Umlaut in the stem: fährt -> fahren
        umlaut_rule("t", "en"),
        umlaut_rule("st", "en"),
        umlaut_rule("te", "en"),
    ]
}

#[cfg(test)]
mod tests {
    use super::conjugation_rules;
    use crate::transform::test_helpers::run_category_test_cases;
    use crate::transform::TransformCategory;

    #[test]
    fn conjugation() {
        let category = TransformCategory::new(
            "Conjugation",
            "Verbs basic forms",
            conjugation_rules(),
        );
        run_category_test_cases("testdata/conjugation.test", &category);
    }

    #[test]
    fn ambiguous_endings_offer_all_candidates() {
        let candidates = conjugation_rules()
            .iter()
            .filter_map(|rule| rule.apply("wanderst"))
            .collect::<Vec<_>>();
        assert_eq!(
            candidates,
            vec!["wanderen", "wandersen", "wandern", "wandersn"]
        );
    }
}
