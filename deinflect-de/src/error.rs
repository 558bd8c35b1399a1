//! Error types.

use std::io;

use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DeinflectError {
    #[error("Cannot compile pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    JsonSerialization(#[from] serde_json::Error),

    #[error(transparent)]
    RegistryError(#[from] RegistryError),

    #[error(transparent)]
    TomlDeserializationError(#[from] toml::de::Error),

    #[error("Unknown transform category: {0}")]
    UnknownCategory(String),
}

/// Registry consistency errors.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RegistryError {
    /// A transform category does not contain any rules.
    #[error("transform category '{category}' has no rules")]
    EmptyCategory { category: String },

    /// A rule refers to a condition tag that is not in the condition table.
    #[error("rule {rule} of category '{category}' refers to undefined condition '{condition}'")]
    UndefinedCondition {
        category: String,
        rule: usize,
        condition: String,
    },
}
