//! The configured language catalog.
//!
//! The set of supported languages is static configuration: keys and culture
//! codes never change at runtime. The only mutable part is the display-name
//! overlay filled in from the remote culture list, which is cosmetic and
//! loses to local configuration whenever the remote is unavailable.

use std::sync::RwLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::normalize::{culture_fallback_chain, normalize_culture};

/// One configured language: local key, remote culture code, display name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageSpec {
    pub key: String,
    pub culture: String,
    pub display_name: String,
}

impl LanguageSpec {
    pub fn new(
        key: impl Into<String>,
        culture: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            culture: culture.into(),
            display_name: display_name.into(),
        }
    }
}

/// A supported language as exposed to UI collaborators.
#[derive(Clone, Debug, PartialEq)]
pub struct SupportedLanguage {
    pub key: String,
    pub culture_code: String,
    pub display_name: String,
    pub is_current: bool,
}

/// Culture metadata as reported by the remote service.
#[derive(Clone, Debug, PartialEq)]
pub struct CultureDescriptor {
    pub code: String,
    pub name: String,
    pub display_name: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("language catalog is empty")]
    Empty,

    #[error("default language `{0}` is not in the catalog")]
    UnknownDefault(String),

    #[error("duplicate language key `{0}`")]
    DuplicateKey(String),
}

/// Ordered catalog of supported languages.
///
/// `list()` preserves configuration order; it is never re-sorted.
pub struct LocaleCatalog {
    languages: Vec<LanguageSpec>,
    default_key: String,
    display_overrides: RwLock<FxHashMap<String, String>>,
}

impl LocaleCatalog {
    pub fn new(languages: Vec<LanguageSpec>, default_key: &str) -> Result<Self, CatalogError> {
        if languages.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = std::collections::HashSet::new();
        for lang in &languages {
            if !seen.insert(lang.key.as_str()) {
                return Err(CatalogError::DuplicateKey(lang.key.clone()));
            }
        }
        if !languages.iter().any(|l| l.key == default_key) {
            return Err(CatalogError::UnknownDefault(default_key.to_string()));
        }
        Ok(Self {
            languages,
            default_key: default_key.to_string(),
            display_overrides: RwLock::new(FxHashMap::default()),
        })
    }

    /// The catalog shipped with the app: English (default) and German.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                LanguageSpec::new("en", "en-US", "English"),
                LanguageSpec::new("de", "de-DE", "Deutsch"),
            ],
            "en",
        )
        .expect("builtin catalog is well-formed")
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    pub fn contains(&self, key: &str) -> bool {
        self.languages.iter().any(|l| l.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.key.as_str())
    }

    /// The supported languages in configuration order, with `is_current`
    /// computed against the caller's active key.
    pub fn list(&self, current_key: &str) -> Vec<SupportedLanguage> {
        let overrides = self.display_overrides.read().unwrap();
        self.languages
            .iter()
            .map(|l| SupportedLanguage {
                key: l.key.clone(),
                culture_code: l.culture.clone(),
                display_name: overrides
                    .get(&l.key)
                    .cloned()
                    .unwrap_or_else(|| l.display_name.clone()),
                is_current: l.key == current_key,
            })
            .collect()
    }

    /// The remote culture code for a configured language key.
    pub fn culture_code(&self, key: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|l| l.key == key)
            .map(|l| l.culture.as_str())
    }

    /// Map a remote-reported culture code back to a configured language key.
    ///
    /// Remote cultures can drift from the local configuration, so this never
    /// fails: an exact match wins, then a language-prefix match, then the
    /// configured default key.
    pub fn key_for_culture(&self, code: &str) -> &str {
        for candidate in culture_fallback_chain(code) {
            for lang in &self.languages {
                if normalize_culture(&lang.culture) == candidate || lang.key == candidate {
                    return &lang.key;
                }
            }
        }
        &self.default_key
    }

    /// Overlay display names from the remote culture list.
    ///
    /// Only languages whose culture code matches a configured entry are
    /// touched; keys and codes are never added, removed, or changed.
    pub fn apply_remote(&self, cultures: &[CultureDescriptor]) {
        let mut overrides = self.display_overrides.write().unwrap();
        for culture in cultures {
            let code = normalize_culture(&culture.code);
            let Some(lang) = self
                .languages
                .iter()
                .find(|l| normalize_culture(&l.culture) == code)
            else {
                continue;
            };
            if culture.display_name.is_empty() {
                continue;
            }
            debug!(
                key = %lang.key,
                display_name = %culture.display_name,
                "enriched language display name from remote"
            );
            overrides.insert(lang.key.clone(), culture.display_name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> LocaleCatalog {
        LocaleCatalog::builtin()
    }

    #[test]
    fn list_preserves_configuration_order() {
        let keys: Vec<String> = catalog().list("de").iter().map(|l| l.key.clone()).collect();
        assert_eq!(keys, vec!["en", "de"]);
    }

    #[test]
    fn is_current_is_computed_not_stored() {
        let cat = catalog();
        let current: Vec<bool> = cat.list("de").iter().map(|l| l.is_current).collect();
        assert_eq!(current, vec![false, true]);
        let current: Vec<bool> = cat.list("en").iter().map(|l| l.is_current).collect();
        assert_eq!(current, vec![true, false]);
    }

    #[test]
    fn culture_codes_resolve_per_configuration() {
        let cat = catalog();
        assert_eq!(cat.culture_code("de"), Some("de-DE"));
        assert_eq!(cat.culture_code("xx"), None);
    }

    #[test]
    fn unknown_culture_falls_back_to_default_key() {
        let cat = catalog();
        assert_eq!(cat.key_for_culture("xx-XX"), "en");
        assert_eq!(cat.key_for_culture(""), "en");
    }

    #[test]
    fn culture_matching_tolerates_drifted_regions() {
        let cat = catalog();
        assert_eq!(cat.key_for_culture("de-AT"), "de");
        assert_eq!(cat.key_for_culture("de_DE"), "de");
        assert_eq!(cat.key_for_culture("en-GB"), "en");
    }

    #[test]
    fn remote_enrichment_is_display_name_only() {
        let cat = catalog();
        cat.apply_remote(&[
            CultureDescriptor {
                code: "de-DE".into(),
                name: "German".into(),
                display_name: "Deutsch (Deutschland)".into(),
            },
            CultureDescriptor {
                code: "fr-FR".into(),
                name: "French".into(),
                display_name: "Français".into(),
            },
        ]);

        let list = cat.list("en");
        assert_eq!(list.len(), 2, "remote cultures must not add languages");
        assert_eq!(list[1].display_name, "Deutsch (Deutschland)");
        assert_eq!(list[1].culture_code, "de-DE");
    }

    #[test]
    fn construction_validates_configuration() {
        assert!(matches!(
            LocaleCatalog::new(Vec::new(), "en"),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            LocaleCatalog::new(vec![LanguageSpec::new("en", "en-US", "English")], "de"),
            Err(CatalogError::UnknownDefault(_))
        ));
        assert!(matches!(
            LocaleCatalog::new(
                vec![
                    LanguageSpec::new("en", "en-US", "English"),
                    LanguageSpec::new("en", "en-GB", "English (UK)"),
                ],
                "en"
            ),
            Err(CatalogError::DuplicateKey(_))
        ));
    }
}
