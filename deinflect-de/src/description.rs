//! Serializable description of a registry.
//!
//! Rules contain compiled patterns and functions, which cannot be
//! serialized. The description replaces them by the pattern source, so
//! that a host outside this process can inspect the rule set.

use std::io::Write;

use serde::{Serialize, Serializer};

use crate::condition::ConditionTable;
use crate::error::DeinflectError;
use crate::registry::TransformRegistry;
use crate::rule::{ConditionSet, Rule, RuleKind};
use crate::transform::TransformCategory;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RegistryDescription {
    pub language: String,
    pub conditions: ConditionTable,
    #[serde(serialize_with = "serialize_ordered_map")]
    pub transforms: Vec<(String, CategoryDescription)>,
}

impl RegistryDescription {
    /// Write the description as pretty-printed JSON.
    pub fn to_writer_pretty<W>(&self, write: W) -> Result<(), DeinflectError>
    where
        W: Write,
    {
        serde_json::to_writer_pretty(write, self)?;
        Ok(())
    }
}

impl From<&TransformRegistry> for RegistryDescription {
    fn from(registry: &TransformRegistry) -> Self {
        RegistryDescription {
            language: registry.language().to_owned(),
            conditions: registry.conditions().clone(),
            transforms: registry
                .categories()
                .map(|(key, category)| (key.to_owned(), category.into()))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CategoryDescription {
    pub name: String,
    pub description: String,
    pub rules: Vec<RuleDescription>,
}

impl From<&TransformCategory> for CategoryDescription {
    fn from(category: &TransformCategory) -> Self {
        CategoryDescription {
            name: category.name().to_owned(),
            description: category.description().to_owned(),
            rules: category.rules().iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDescription {
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub pattern: String,
    pub conditions_in: ConditionSet,
    pub conditions_out: ConditionSet,
}

impl From<&Rule> for RuleDescription {
    fn from(rule: &Rule) -> Self {
        RuleDescription {
            kind: rule.kind(),
            pattern: rule.pattern().as_str().to_owned(),
            conditions_in: rule.conditions_in().clone(),
            conditions_out: rule.conditions_out().clone(),
        }
    }
}

// Serialize as a map, keeping the category order.
fn serialize_ordered_map<S>(
    entries: &[(String, CategoryDescription)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(entries.iter().map(|(key, category)| (key, category)))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::RegistryDescription;
    use crate::registry::TransformRegistry;

    #[test]
    fn describes_german_registry() {
        let description = RegistryDescription::from(TransformRegistry::german());

        assert_eq!(description.language, "de");
        assert_eq!(
            description
                .transforms
                .iter()
                .map(|(key, _)| key.as_str())
                .collect::<Vec<_>>(),
            vec!["declension", "conjugation", "complex_verbs", "misc"]
        );

        let (_, misc) = &description.transforms[3];
        assert_eq!(misc.rules[0].pattern, "ss");
        assert_eq!(misc.rules[1].pattern, "^(hin|her)");
    }

    #[test]
    fn json_uses_host_field_names() {
        let mut json = Vec::new();
        RegistryDescription::from(TransformRegistry::german())
            .to_writer_pretty(&mut json)
            .unwrap();
        let value: Value = serde_json::from_slice(&json).unwrap();

        assert_eq!(value["language"], "de");
        assert_eq!(
            value["conditions"]["adj"],
            json!({"name": "Adjective", "isDictionaryForm": true})
        );
        assert_eq!(
            value["transforms"]["declension"]["rules"][0],
            json!({
                "type": "other",
                "pattern": "en$",
                "conditionsIn": [],
                "conditionsOut": [],
            })
        );
        assert_eq!(
            value["transforms"]["complex_verbs"]["description"],
            "Vowel shifts, Participles, Zu"
        );
    }
}
