//! Transform categories and the German rule lists.

use std::fmt;

use crate::rule::Rule;

pub mod builders;

pub mod complex;

pub mod conjugation;

pub mod declension;

pub mod misc;

pub mod string;

#[cfg(test)]
pub(crate) mod test_helpers;

/// A named, ordered list of rules with a shared grammatical function.
pub struct TransformCategory {
    name: String,
    description: String,
    rules: Vec<Rule>,
}

impl TransformCategory {
    pub fn new<N, D, R>(name: N, description: D, rules: R) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        R: IntoIterator<Item = Rule>,
    {
        TransformCategory {
            name: name.into(),
            description: description.into(),
            rules: rules.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The rules of this category in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Apply all matching rules to `term`.
    ///
    /// Returns the index of each matching rule together with its
    /// candidate, in declaration order.
    pub fn candidates<'a>(&'a self, term: &'a str) -> impl Iterator<Item = (usize, String)> + 'a {
        self.rules
            .iter()
            .enumerate()
            .filter_map(move |(idx, rule)| rule.apply(term).map(|candidate| (idx, candidate)))
    }

    /// Apply the first matching rule to `term`.
    pub fn first_candidate(&self, term: &str) -> Option<(usize, String)> {
        self.candidates(term).next()
    }
}

impl fmt::Debug for TransformCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TransformCategory")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("rules", &self.rules)
            .finish()
    }
}
