//! Condition tags used to restrict rule chaining.

use std::collections::BTreeMap;
use std::iter::FromIterator;

use lazy_static::lazy_static;
use maplit::btreemap;
use serde::{Deserialize, Serialize};

/// Grammatical condition of a form.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Human-readable name, such as *Verb*.
    pub name: String,

    /// Forms with this condition may be dictionary forms.
    ///
    /// A search can stop at a candidate with this condition when no
    /// further rule applies.
    pub is_dictionary_form: bool,
}

impl Condition {
    pub fn new(name: impl Into<String>, is_dictionary_form: bool) -> Self {
        Condition {
            name: name.into(),
            is_dictionary_form,
        }
    }
}

lazy_static! {
    static ref GERMAN_CONDITIONS: BTreeMap<&'static str, (&'static str, bool)> = btreemap! {
        "v" => ("Verb", true),
        "n" => ("Noun", true),
        "adj" => ("Adjective", true),
    };
}

/// Mapping from short condition tags to conditions.
///
/// The rule engine itself does not interpret conditions, the table is
/// data for the search that chains rules.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConditionTable(BTreeMap<String, Condition>);

impl ConditionTable {
    pub fn new() -> Self {
        ConditionTable::default()
    }

    /// The German conditions: verbs, nouns and adjectives.
    pub fn german() -> Self {
        GERMAN_CONDITIONS
            .iter()
            .map(|(&tag, &(name, is_dictionary_form))| {
                (tag.to_owned(), Condition::new(name, is_dictionary_form))
            })
            .collect()
    }

    pub fn insert(&mut self, tag: impl Into<String>, condition: Condition) -> Option<Condition> {
        self.0.insert(tag.into(), condition)
    }

    pub fn get(&self, tag: &str) -> Option<&Condition> {
        self.0.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Condition)> for ConditionTable {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (String, Condition)>,
    {
        ConditionTable(iter.into_iter().collect())
    }
}
