//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto [`AppConfig`]. Pure data loading:
//! no validation and no defaults. Whatever is in the file is a fact; the
//! wiring layer decides what an empty value means.

use anyhow::Context;
use std::path::PathBuf;

use ff_core::config::AppConfig;

/// Config file used when `FASHIONFOT_CONFIG` is not set.
pub const DEFAULT_CONFIG_FILE: &str = "fashionfot.toml";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Path named by the environment override, else [`DEFAULT_CONFIG_FILE`].
pub fn resolve_config_path(env_override: Option<String>) -> PathBuf {
    match env_override {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}
