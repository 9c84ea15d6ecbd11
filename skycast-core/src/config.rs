use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable that overrides the stored geocoding API key.
pub const GEO_API_KEY_VAR: &str = "OPENCAGE_API_KEY";

/// Credentials for the geocoding service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    pub api_key: String,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// [geocoding]
/// api_key = "..."
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub geocoding: Option<GeocodingConfig>,
}

impl Config {
    /// The geocoding API key, if any. The process environment wins over
    /// the config file. A missing key is not an error here: the geocoder
    /// reports it at call time instead.
    pub fn geocoding_api_key(&self) -> Option<String> {
        self.resolve_api_key(env::var(GEO_API_KEY_VAR).ok())
    }

    fn resolve_api_key(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .filter(|key| !key.is_empty())
            .or_else(|| self.geocoding.as_ref().map(|g| g.api_key.clone()))
    }

    /// Store/replace the geocoding API key.
    pub fn set_geocoding_api_key(&mut self, api_key: String) {
        self.geocoding = Some(GeocodingConfig { api_key });
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_key_anywhere_resolves_to_none() {
        let cfg = Config::default();
        assert_eq!(cfg.resolve_api_key(None), None);
    }

    #[test]
    fn file_key_is_used_when_env_is_absent() {
        let mut cfg = Config::default();
        cfg.set_geocoding_api_key("FILE_KEY".to_string());

        assert_eq!(cfg.resolve_api_key(None), Some("FILE_KEY".to_string()));
    }

    #[test]
    fn env_key_overrides_file_key() {
        let mut cfg = Config::default();
        cfg.set_geocoding_api_key("FILE_KEY".to_string());

        let resolved = cfg.resolve_api_key(Some("ENV_KEY".to_string()));
        assert_eq!(resolved, Some("ENV_KEY".to_string()));
    }

    #[test]
    fn empty_env_key_falls_back_to_file() {
        let mut cfg = Config::default();
        cfg.set_geocoding_api_key("FILE_KEY".to_string());

        let resolved = cfg.resolve_api_key(Some(String::new()));
        assert_eq!(resolved, Some("FILE_KEY".to_string()));
    }

    #[test]
    fn set_key_replaces_existing() {
        let mut cfg = Config::default();
        cfg.set_geocoding_api_key("OLD".to_string());
        cfg.set_geocoding_api_key("NEW".to_string());

        assert_eq!(cfg.resolve_api_key(None), Some("NEW".to_string()));
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_geocoding_api_key("KEY".to_string());

        let serialized = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");

        assert_eq!(parsed.resolve_api_key(None), Some("KEY".to_string()));
    }
}
