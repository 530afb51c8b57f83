//! Configuration file support for npm-release-audit.
//!
//! Provides YAML-based configuration through `npm-release-audit.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line options.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::network::DEFAULT_REGISTRY_URL;
use crate::shared::error::AuditError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "npm-release-audit.config.yml";
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub registry_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after merging CLI options, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub registry_url: String,
    pub output_dir: PathBuf,
}

impl Settings {
    /// Merges with precedence CLI > config file > built-in defaults
    pub fn resolve(
        cli_registry: Option<String>,
        cli_output_dir: Option<PathBuf>,
        config: Option<ConfigFile>,
    ) -> Self {
        let config = config.unwrap_or_default();
        Self {
            registry_url: cli_registry
                .or(config.registry_url)
                .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
            output_dir: cli_output_dir
                .or(config.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to YAML null, which is not a mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref url) = config.registry_url {
        if url.trim().is_empty() {
            return Err(AuditError::InvalidConfig {
                message: "registry_url must not be empty.\n\n\
                          💡 Hint: Remove the field to use https://registry.npmjs.org, or set a URL such as \"http://localhost:4873\"."
                    .to_string(),
            }
            .into());
        }
    }
    if let Some(ref dir) = config.output_dir {
        if dir.as_os_str().is_empty() {
            return Err(AuditError::InvalidConfig {
                message: "output_dir must not be empty.\n\n\
                          💡 Hint: Remove the field to write into ./out, or set a directory name."
                    .to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
