//! # Pure Data Module - Data Transfer Objects Only
//!
//! Maps the TOML configuration file onto plain structs. No validation and no
//! default computation happen here: a missing value is recorded as empty, and
//! the bootstrap layer decides what empty means.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the hosted backend (REST + storage), e.g. `https://xyz.supabase.co`
    pub backend_url: String,

    /// Public (anon) API key sent with every backend request
    pub anon_key: String,

    /// Transport timeout for backend calls; `None` means calls may take as long as they take
    pub request_timeout_ms: Option<u64>,

    /// Storage bucket holding garment images and 3D assets
    pub storage_bucket: String,

    pub intro: IntroConfig,

    /// Directory for the rolling log file; empty disables file logging
    pub log_dir: PathBuf,
}

/// Intro timing overrides in milliseconds. `None` means "not configured".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntroConfig {
    pub garment_delay_ms: Option<u64>,
    pub garment_reveal_timeout_ms: Option<u64>,
    pub assemble_delay_ms: Option<u64>,
    pub avatar_delay_ms: Option<u64>,
    pub complete_delay_ms: Option<u64>,
    pub reduced_motion: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation or default
    /// value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let ms_at = |key: &str| -> Option<u64> {
            toml_value
                .get("intro")
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
        };

        Ok(Self {
            backend_url: str_at("backend", "url"),
            anon_key: str_at("backend", "anon_key"),
            request_timeout_ms: toml_value
                .get("backend")
                .and_then(|s| s.get("request_timeout_ms"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64),
            storage_bucket: str_at("storage", "bucket"),
            intro: IntroConfig {
                garment_delay_ms: ms_at("garment_delay_ms"),
                garment_reveal_timeout_ms: ms_at("garment_reveal_timeout_ms"),
                assemble_delay_ms: ms_at("assemble_delay_ms"),
                avatar_delay_ms: ms_at("avatar_delay_ms"),
                complete_delay_ms: ms_at("complete_delay_ms"),
                reduced_motion: toml_value
                    .get("intro")
                    .and_then(|s| s.get("reduced_motion"))
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false),
            },
            log_dir: PathBuf::from(str_at("logging", "dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_maps_every_section() {
        let value: toml::Value = toml::from_str(
            r#"
            [backend]
            url = "https://abc.supabase.co"
            anon_key = "anon"
            request_timeout_ms = 15000

            [storage]
            bucket = "garments"

            [intro]
            garment_delay_ms = 100
            complete_delay_ms = 5
            reduced_motion = true

            [logging]
            dir = "/tmp/logs"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();
        assert_eq!(config.backend_url, "https://abc.supabase.co");
        assert_eq!(config.anon_key, "anon");
        assert_eq!(config.request_timeout_ms, Some(15000));
        assert_eq!(config.storage_bucket, "garments");
        assert_eq!(config.intro.garment_delay_ms, Some(100));
        assert_eq!(config.intro.assemble_delay_ms, None);
        assert_eq!(config.intro.complete_delay_ms, Some(5));
        assert!(config.intro.reduced_motion);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
    }

    #[test]
    fn test_missing_sections_are_empty_facts() {
        let value: toml::Value = toml::from_str("").unwrap();
        assert_eq!(AppConfig::from_toml(&value).unwrap(), AppConfig::empty());
    }
}
