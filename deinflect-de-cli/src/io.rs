use std::fs::File;

use anyhow::{Context, Result};
use deinflect_de::{Config, TomlRead};

/// Load the configuration file, or use the default configuration.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_path = match config_path {
        Some(config_path) => config_path,
        None => return Ok(Config::default()),
    };

    let config_file = File::open(config_path)
        .context(format!("Cannot open configuration file '{}'", &config_path))?;
    let config = Config::from_toml_read(config_file)
        .context(format!("Cannot parse configuration file: {}", config_path))?;

    Ok(config)
}
