//! Rules: a pattern, a transformer and chaining conditions.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// Set of condition tags, such as `v` or `adj`.
///
/// An empty set does not constrain rule chaining.
pub type ConditionSet = BTreeSet<String>;

/// Classification of a rule.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Other,
}

impl Default for RuleKind {
    fn default() -> Self {
        RuleKind::Other
    }
}

/// Rewrite of a matched surface form into a candidate form.
///
/// A transformer is only invoked on forms that were accepted by the
/// pattern of its rule and must return a string for all such forms.
pub trait Transformer: Send + Sync {
    fn deinflect(&self, term: &str) -> String;
}

impl<F> Transformer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn deinflect(&self, term: &str) -> String {
        self(term)
    }
}

/// A reversible morphological transformation.
pub struct Rule {
    kind: RuleKind,
    pattern: Box<dyn Pattern>,
    transformer: Box<dyn Transformer>,
    conditions_in: ConditionSet,
    conditions_out: ConditionSet,
}

impl Rule {
    /// Construct a rule without condition tags.
    pub fn new<P, T>(pattern: P, transformer: T) -> Self
    where
        P: Pattern + 'static,
        T: Transformer + 'static,
    {
        Rule {
            kind: RuleKind::Other,
            pattern: Box::new(pattern),
            transformer: Box::new(transformer),
            conditions_in: ConditionSet::new(),
            conditions_out: ConditionSet::new(),
        }
    }

    /// Restrict chaining of this rule.
    ///
    /// The rule applies to forms tagged with one of `conditions_in`,
    /// its candidates are tagged with `conditions_out`.
    pub fn with_conditions<I, O>(mut self, conditions_in: I, conditions_out: O) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        self.conditions_in = conditions_in.into_iter().map(Into::into).collect();
        self.conditions_out = conditions_out.into_iter().map(Into::into).collect();
        self
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn pattern(&self) -> &dyn Pattern {
        self.pattern.as_ref()
    }

    pub fn conditions_in(&self) -> &ConditionSet {
        &self.conditions_in
    }

    pub fn conditions_out(&self) -> &ConditionSet {
        &self.conditions_out
    }

    /// Check whether the rule applies to `term`.
    pub fn is_inflected(&self, term: &str) -> bool {
        self.pattern.is_match(term)
    }

    /// Run the transformer on `term`.
    ///
    /// The result is only meaningful when `is_inflected` holds for `term`,
    /// use `apply` to check and transform in one step.
    pub fn deinflect(&self, term: &str) -> String {
        self.transformer.deinflect(term)
    }

    /// Deinflect `term` if the rule applies to it.
    pub fn apply(&self, term: &str) -> Option<String> {
        if self.is_inflected(term) {
            Some(self.deinflect(term))
        } else {
            None
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("pattern", &self.pattern.as_str())
            .field("conditions_in", &self.conditions_in)
            .field("conditions_out", &self.conditions_out)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use maplit::btreeset;

    use super::{Rule, RuleKind};
    use crate::pattern::SuffixPattern;

    fn drop_last(term: &str) -> String {
        let mut chars = term.chars();
        chars.next_back();
        chars.as_str().to_owned()
    }

    #[test]
    fn transformer_only_runs_on_match() {
        let rule = Rule::new(SuffixPattern::new("s"), drop_last);

        assert_eq!(rule.apply("Autos"), Some("Auto".to_owned()));
        assert_eq!(rule.apply("Auto"), None);
    }

    #[test]
    fn rules_are_unconstrained_by_default() {
        let rule = Rule::new(SuffixPattern::new("s"), drop_last);

        assert_eq!(rule.kind(), RuleKind::Other);
        assert!(rule.conditions_in().is_empty());
        assert!(rule.conditions_out().is_empty());
    }

    #[test]
    fn conditions_can_be_attached() {
        let rule =
            Rule::new(SuffixPattern::new("s"), drop_last).with_conditions(vec!["n"], vec!["n"]);

        assert_eq!(rule.conditions_in(), &btreeset! {"n".to_owned()});
        assert_eq!(rule.conditions_out(), &btreeset! {"n".to_owned()});
    }
}
