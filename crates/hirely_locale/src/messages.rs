//! Last-known-good cache for remotely localized messages.
//!
//! Populated only from successful remote lookups; read by error-presentation
//! paths before degrading to the static defaults below. Entries live for the
//! process lifetime and are dropped only by an explicit `clear`.

use std::sync::RwLock;

use rustc_hash::FxHashMap;

/// Per-key cache of the last successfully resolved localized string.
#[derive(Debug, Default)]
pub struct MessageCache {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MessageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().unwrap().insert(key.into(), value.into());
    }

    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

/// Static English default for a message key.
///
/// The last resort when the remote is unreachable and the cache is cold.
pub fn default_message(key: &str) -> &'static str {
    match key {
        "error.network" => "We could not reach the server. Please check your connection.",
        "error.save" => "Your changes could not be saved. Please try again.",
        "error.load" => "This content could not be loaded right now.",
        "error.session" => "Your session has expired. Please sign in again.",
        _ => "Something went wrong. Please try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_then_get() {
        let cache = MessageCache::new();
        assert_eq!(cache.get("error.save"), None);
        cache.set("error.save", "Speichern fehlgeschlagen.");
        assert_eq!(cache.get("error.save").as_deref(), Some("Speichern fehlgeschlagen."));
    }

    #[test]
    fn entries_survive_until_explicit_clear() {
        let cache = MessageCache::new();
        cache.set("a", "1");
        cache.set("b", "2");
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn default_messages_cover_unknown_keys() {
        assert!(!default_message("error.network").is_empty());
        assert_eq!(
            default_message("error.some-future-key"),
            "Something went wrong. Please try again."
        );
    }
}
