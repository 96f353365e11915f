//! Configuration file support for conan-license-scan.
//!
//! Provides YAML-based configuration through `conan-license-scan.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "conan-license-scan.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub exclude_packages: Option<Vec<String>>,
    pub sentinel_prefixes: Option<Vec<String>>,
    pub conan_profile_files: Option<Vec<PathBuf>>,
    pub conan_command: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

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
    let string_lists = [
        ("exclude_packages", &config.exclude_packages),
        ("sentinel_prefixes", &config.sentinel_prefixes),
    ];
    for (field, entries) in string_lists {
        if let Some(entries) = entries {
            for (i, entry) in entries.iter().enumerate() {
                if entry.trim().is_empty() {
                    bail!(
                        "Invalid config: {}[{}] must not be empty.\n\n\
                         💡 Hint: Remove the empty entry or give it a value.",
                        field,
                        i
                    );
                }
            }
        }
    }

    if let Some(ref profiles) = config.conan_profile_files {
        for (i, profile) in profiles.iter().enumerate() {
            if profile.as_os_str().is_empty() {
                bail!(
                    "Invalid config: conan_profile_files[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a path to a Conan profile file (e.g., \"profiles/gcc\").",
                    i
                );
            }
        }
    }

    if let Some(ref command) = config.conan_command {
        if command.trim().is_empty() {
            bail!(
                "Invalid config: conan_command must not be empty.\n\n\
                 💡 Hint: Omit the field to use 'conan' from PATH."
            );
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
