//! Configuration file discovery and loading.

use crate::error::ConfigError;
use crate::types::FileConfig;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "benchgen.toml";

/// Returns the path of `benchgen.toml` in `dir` if one exists.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    path.is_file().then_some(path)
}

/// Loads and validates a configuration file.
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates configuration text.
pub fn load_config_from_str(content: &str) -> Result<FileConfig, ConfigError> {
    let config: FileConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &FileConfig) -> Result<(), ConfigError> {
    if let Some(name) = &config.generate.name {
        crate::resolve::validate_test_name(name)?;
    }
    if config.generate.output_dir.as_deref() == Some("") {
        return Err(ConfigError::ValidationError(
            "generate.output_dir is empty".to_string(),
        ));
    }
    Ok(())
}
