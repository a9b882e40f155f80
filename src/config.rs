use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Default project file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "aura.toml";

/// Top-level Aura configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuraConfig {
    /// Measurements database settings.
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
    /// Name of the measurements table.
    #[serde(default = "default_table")]
    pub table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            table: default_table(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("air_quality.sqlite")
}

fn default_table() -> String {
    "defra_uk_air_quality".to_string()
}

/// Loads the configuration.
///
/// An explicitly given path must exist and parse. Without `--config`,
/// `aura.toml` is read when present and built-in defaults apply
/// otherwise.
pub fn load(explicit: Option<&Path>) -> Result<AuraConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                debug!("no {DEFAULT_CONFIG_PATH} found, using defaults");
                return Ok(AuraConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: AuraConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    Ok(config)
}
