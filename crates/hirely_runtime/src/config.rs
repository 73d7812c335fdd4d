//! Runtime configuration (`hirely.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hirely_locale::{LanguageSpec, LocaleCatalog};
use serde::{Deserialize, Serialize};

/// Top-level runtime configuration.
///
/// Every section is optional; a missing file yields the shipped defaults.
#[derive(Debug, Deserialize, Serialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Supported languages in presentation order.
    #[serde(default = "default_languages")]
    pub languages: Vec<LanguageSpec>,
    #[serde(default = "default_language_key")]
    pub default_language: String,
}

/// Durable preference storage location.
#[derive(Debug, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_prefs_path")]
    pub path: PathBuf,
}

/// Remote preference service endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct RemoteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_prefs_path() -> PathBuf {
    PathBuf::from("prefs.toml")
}

fn default_base_url() -> String {
    "https://api.hirely.app/prefs".to_string()
}

fn default_timeout_ms() -> u64 {
    3000
}

fn default_languages() -> Vec<LanguageSpec> {
    vec![
        LanguageSpec::new("en", "en-US", "English"),
        LanguageSpec::new("de", "de-DE", "Deutsch"),
    ]
}

fn default_language_key() -> String {
    "en".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_prefs_path(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            remote: RemoteConfig::default(),
            languages: default_languages(),
            default_language: default_language_key(),
        }
    }
}

impl RuntimeConfig {
    /// Load from a TOML file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Build the language catalog described by this configuration.
    pub fn catalog(&self) -> Result<LocaleCatalog> {
        LocaleCatalog::new(self.languages.clone(), &self.default_language)
            .context("Invalid language configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RuntimeConfig::load(&dir.path().join("hirely.toml")).unwrap();
        assert_eq!(config.default_language, "en");
        assert_eq!(config.remote.timeout_ms, 3000);
        assert_eq!(config.languages.len(), 2);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hirely.toml");
        fs::write(
            &path,
            r#"
[remote]
base_url = "https://staging.hirely.app/prefs"

[[languages]]
key = "en"
culture = "en-US"
display_name = "English"

[[languages]]
key = "de"
culture = "de-DE"
display_name = "Deutsch"

[[languages]]
key = "fr"
culture = "fr-FR"
display_name = "Français"
"#,
        )
        .unwrap();

        let config = RuntimeConfig::load(&path).unwrap();
        assert_eq!(config.remote.base_url, "https://staging.hirely.app/prefs");
        assert_eq!(config.remote.timeout_ms, 3000);
        assert_eq!(config.languages.len(), 3);
        assert!(config.catalog().is_ok());
    }

    #[test]
    fn malformed_files_error_with_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hirely.toml");
        fs::write(&path, "not [valid toml").unwrap();

        let err = RuntimeConfig::load(&path).unwrap_err();
        assert!(format!("{err}").contains("hirely.toml"));
    }

    #[test]
    fn default_language_must_be_configured() {
        let config = RuntimeConfig {
            default_language: "xx".into(),
            ..RuntimeConfig::default()
        };
        assert!(config.catalog().is_err());
    }
}
