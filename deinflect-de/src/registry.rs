//! The registry of transform categories.

use lazy_static::lazy_static;
use log::debug;

use crate::condition::ConditionTable;
use crate::error::RegistryError;
use crate::transform::complex::complex_verb_rules;
use crate::transform::conjugation::conjugation_rules;
use crate::transform::declension::{declension_rules, feminine_rules};
use crate::transform::misc::misc_rules;
use crate::transform::TransformCategory;

/// Key of the declension category.
pub const DECLENSION: &str = "declension";

/// Key of the conjugation category.
pub const CONJUGATION: &str = "conjugation";

/// Key of the irregular verb category.
pub const COMPLEX_VERBS: &str = "complex_verbs";

/// Key of the orthography and prefix category.
pub const MISC: &str = "misc";

lazy_static! {
    static ref GERMAN_TRANSFORMS: TransformRegistry = german_transforms();
}

/// Construct the German transform registry.
///
/// Use `TransformRegistry::german` to share a single instance.
pub fn german_transforms() -> TransformRegistry {
    TransformRegistry::new(
        "de",
        ConditionTable::german(),
        vec![
            (
                DECLENSION,
                TransformCategory::new(
                    "Declension",
                    "Nouns and Adjectives",
                    declension_rules().into_iter().chain(feminine_rules()),
                ),
            ),
            (
                CONJUGATION,
                TransformCategory::new("Conjugation", "Verbs basic forms", conjugation_rules()),
            ),
            (
                COMPLEX_VERBS,
                TransformCategory::new(
                    "Complex Verbs",
                    "Vowel shifts, Participles, Zu",
                    complex_verb_rules(),
                ),
            ),
            (
                MISC,
                TransformCategory::new("Misc", "Prefixes and Orthography", misc_rules()),
            ),
        ],
    )
}

/// A candidate dictionary form with the rule that produced it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Candidate<'a> {
    form: String,
    category: &'a str,
    rule: usize,
}

impl<'a> Candidate<'a> {
    pub fn new(form: String, category: &'a str, rule: usize) -> Self {
        Candidate {
            form,
            category,
            rule,
        }
    }

    /// The candidate form.
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Key of the category of the rule that produced the candidate.
    pub fn category(&self) -> &'a str {
        self.category
    }

    /// Index of the rule within its category.
    pub fn rule(&self) -> usize {
        self.rule
    }
}

/// Language, conditions and transform categories.
///
/// The registry is immutable after construction and can be shared
/// between threads.
#[derive(Debug)]
pub struct TransformRegistry {
    language: String,
    conditions: ConditionTable,
    transforms: Vec<(String, TransformCategory)>,
}

impl TransformRegistry {
    /// Construct a registry.
    ///
    /// Categories are applied in the order of `transforms`.
    pub fn new<L, K, T>(language: L, conditions: ConditionTable, transforms: T) -> Self
    where
        L: Into<String>,
        K: Into<String>,
        T: IntoIterator<Item = (K, TransformCategory)>,
    {
        TransformRegistry {
            language: language.into(),
            conditions,
            transforms: transforms
                .into_iter()
                .map(|(key, category)| (key.into(), category))
                .collect(),
        }
    }

    /// The shared German registry.
    pub fn german() -> &'static TransformRegistry {
        &GERMAN_TRANSFORMS
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn conditions(&self) -> &ConditionTable {
        &self.conditions
    }

    /// Iterate over the category keys and categories.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &TransformCategory)> {
        self.transforms
            .iter()
            .map(|(key, category)| (key.as_str(), category))
    }

    /// Get the category with the given key.
    pub fn category(&self, key: &str) -> Option<&TransformCategory> {
        self.categories()
            .find(|&(category_key, _)| category_key == key)
            .map(|(_, category)| category)
    }

    /// Apply every matching rule of every category to `term`.
    ///
    /// Candidates are returned in category order and rule declaration
    /// order within a category. Candidates are not validated or
    /// deduplicated, so the same form can be offered by multiple rules.
    pub fn candidates(&self, term: &str) -> Vec<Candidate<'_>> {
        let mut candidates = Vec::new();
        for (key, category) in self.categories() {
            push_candidates(key, category, term, &mut candidates);
        }
        candidates
    }

    /// Apply the first matching rule of each category to `term`.
    pub fn first_candidates(&self, term: &str) -> Vec<Candidate<'_>> {
        self.categories()
            .filter_map(|(key, category)| {
                category
                    .first_candidate(term)
                    .map(|(idx, form)| Candidate::new(form, key, idx))
            })
            .collect()
    }

    /// Check the consistency of the registry.
    ///
    /// Every category must have at least one rule and every condition
    /// used by a rule must be in the condition table.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (key, category) in self.categories() {
            if category.rules().is_empty() {
                return Err(RegistryError::EmptyCategory {
                    category: key.to_owned(),
                });
            }

            for (idx, rule) in category.rules().iter().enumerate() {
                if let Some(condition) = rule
                    .conditions_in()
                    .iter()
                    .chain(rule.conditions_out())
                    .find(|condition| !self.conditions.contains(condition))
                {
                    return Err(RegistryError::UndefinedCondition {
                        category: key.to_owned(),
                        rule: idx,
                        condition: condition.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Add the candidates of all matching rules of `category` to `candidates`.
pub(crate) fn push_candidates<'a>(
    key: &'a str,
    category: &TransformCategory,
    term: &str,
    candidates: &mut Vec<Candidate<'a>>,
) {
    for (idx, form) in category.candidates(term) {
        debug!("{}: rule {} of {} gives {}", term, idx, key, form);
        candidates.push(Candidate::new(form, key, idx));
    }
}
