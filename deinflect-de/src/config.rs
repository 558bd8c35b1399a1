use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::DeinflectError;
use crate::registry::{COMPLEX_VERBS, CONJUGATION, DECLENSION, MISC};

/// Candidate generation configuration.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Keys of the categories to apply, in order.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Only keep the first candidate for each form.
    #[serde(default)]
    pub deduplicate: bool,

    /// Discard candidates that are equal to the surface form.
    #[serde(default = "default_skip_identity")]
    pub skip_identity: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            categories: default_categories(),
            deduplicate: false,
            skip_identity: default_skip_identity(),
        }
    }
}

fn default_categories() -> Vec<String> {
    vec![
        DECLENSION.to_owned(),
        CONJUGATION.to_owned(),
        COMPLEX_VERBS.to_owned(),
        MISC.to_owned(),
    ]
}

fn default_skip_identity() -> bool {
    true
}

pub trait TomlRead
where
    Self: Sized,
{
    fn from_toml_read(read: impl Read) -> Result<Self, DeinflectError>;
}

impl TomlRead for Config {
    fn from_toml_read(mut read: impl Read) -> Result<Self, DeinflectError> {
        let mut data = String::new();
        read.read_to_string(&mut data)?;
        let config: Config = toml::from_str(&data)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, TomlRead};
    use crate::error::DeinflectError;

    #[test]
    fn config() {
        let config =
            Config::from_toml_read(include_bytes!("../testdata/deinflect.conf").as_ref()).unwrap();

        assert_eq!(
            config,
            Config {
                categories: vec!["complex_verbs".to_owned(), "declension".to_owned()],
                deduplicate: true,
                skip_identity: false,
            }
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_read("".as_bytes()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.categories,
            vec!["declension", "conjugation", "complex_verbs", "misc"]
        );
        assert!(!config.deduplicate);
        assert!(config.skip_identity);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            Config::from_toml_read("max_candidates = 3".as_bytes()),
            Err(DeinflectError::TomlDeserializationError(_))
        ));
    }
}
