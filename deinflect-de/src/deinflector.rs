//! Candidate generation restricted to a configured set of categories.

use itertools::Itertools;

use crate::config::Config;
use crate::error::DeinflectError;
use crate::registry::{push_candidates, Candidate, TransformRegistry};
use crate::transform::TransformCategory;

/// Candidate generator for a configured selection of categories.
pub struct Deinflector<'a> {
    categories: Vec<(&'a str, &'a TransformCategory)>,
    deduplicate: bool,
    skip_identity: bool,
}

impl<'a> Deinflector<'a> {
    /// Construct a deinflector for the categories in `config`.
    ///
    /// Returns an error when the registry is inconsistent or when `config`
    /// refers to a category that is not in the registry.
    pub fn new(registry: &'a TransformRegistry, config: &Config) -> Result<Self, DeinflectError> {
        registry.validate()?;

        let categories = config
            .categories
            .iter()
            .map(|key| {
                registry
                    .categories()
                    .find(|&(category_key, _)| category_key == key)
                    .ok_or_else(|| DeinflectError::UnknownCategory(key.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Deinflector {
            categories,
            deduplicate: config.deduplicate,
            skip_identity: config.skip_identity,
        })
    }

    /// Generate the candidates for `term`.
    pub fn candidates(&self, term: &str) -> Vec<Candidate<'a>> {
        let mut candidates = Vec::new();
        for &(key, category) in &self.categories {
            push_candidates(key, category, term, &mut candidates);
        }

        if self.skip_identity {
            candidates.retain(|candidate| candidate.form() != term);
        }

        if self.deduplicate {
            candidates
                .into_iter()
                .unique_by(|candidate| candidate.form().to_owned())
                .collect()
        } else {
            candidates
        }
    }
}
