//! Deinflection rules for German.
//!
//! This crate provides rules that reduce an inflected German word form,
//! such as *Männer*, *gefahren* or *anzufangen*, to candidate dictionary
//! forms. A rule consists of a pattern that decides whether the rule
//! applies and a transformer that rewrites the form. Rules are grouped in
//! transform categories (declension, conjugation, irregular verbs and
//! orthography), which are collected in a `TransformRegistry`.
//!
//! Rules only generate candidates. Checking candidates against a
//! dictionary and chaining rules is left to the caller:
//!
//! ```
//! use deinflect_de::TransformRegistry;
//!
//! let registry = TransformRegistry::german();
//! let candidates = registry.candidates("gefahren");
//! assert!(candidates.iter().any(|candidate| candidate.form() == "fahren"));
//! ```

pub mod condition;
pub use condition::{Condition, ConditionTable};

pub mod config;
pub use config::{Config, TomlRead};

mod deinflector;
pub use deinflector::Deinflector;

pub mod description;
pub use description::RegistryDescription;

pub mod entry;
pub use entry::entry_conditions;

mod error;
pub use error::{DeinflectError, RegistryError};

pub mod pattern;
pub use pattern::{Pattern, RegexPattern, SuffixPattern};

pub mod registry;
pub use registry::{german_transforms, Candidate, TransformRegistry};

pub mod rule;
pub use rule::{ConditionSet, Rule, RuleKind, Transformer};

pub mod transform;
pub use transform::TransformCategory;
