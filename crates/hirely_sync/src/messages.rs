//! Localized error messages with graceful degradation.
//!
//! Lookup order: live remote fetch, then the last-known-good cache, then
//! the static defaults. A failed fetch is invisible to the caller; it only
//! changes which source the string came from.

use std::sync::Arc;

use hirely_locale::{default_message, MessageCache};
use hirely_prefs::PreferenceStore;
use tracing::debug;

use crate::client::CultureTransport;

/// Resolves user-facing message strings for the active language.
pub struct MessageService {
    store: Arc<PreferenceStore>,
    transport: Arc<dyn CultureTransport>,
    cache: MessageCache,
}

impl MessageService {
    pub fn new(store: Arc<PreferenceStore>, transport: Arc<dyn CultureTransport>) -> Self {
        Self {
            store,
            transport,
            cache: MessageCache::new(),
        }
    }

    pub fn cache(&self) -> &MessageCache {
        &self.cache
    }

    /// Resolve a message key to a display string. Never fails.
    pub async fn error_message(&self, key: &str) -> String {
        let language = self.store.language();
        let Some(culture) = self
            .store
            .catalog()
            .culture_code(&language)
            .map(String::from)
        else {
            return self.fallback(key);
        };

        match self.transport.localized_string(key, &culture).await {
            Ok(value) => {
                self.cache.set(key, &value);
                value
            }
            Err(err) => {
                debug!(%key, %culture, error = %err, "live message lookup failed, degrading");
                self.fallback(key)
            }
        }
    }

    fn fallback(&self, key: &str) -> String {
        self.cache
            .get(key)
            .unwrap_or_else(|| default_message(key).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{RemoteCulture, RemoteUnavailable};
    use async_trait::async_trait;
    use hirely_locale::LocaleCatalog;
    use hirely_prefs::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct StubStrings {
        fail: AtomicBool,
    }

    impl StubStrings {
        fn working() -> Self {
            Self {
                fail: AtomicBool::new(false),
            }
        }

        fn set_failing(&self, failing: bool) {
            self.fail.store(failing, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl CultureTransport for StubStrings {
        async fn set_culture(&self, _code: &str) -> Result<(), RemoteUnavailable> {
            Ok(())
        }

        async fn localized_string(
            &self,
            key: &str,
            culture: &str,
        ) -> Result<String, RemoteUnavailable> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(RemoteUnavailable::new("scripted failure"));
            }
            Ok(format!("{key}@{culture}"))
        }

        async fn cultures(&self) -> Result<Vec<RemoteCulture>, RemoteUnavailable> {
            Ok(Vec::new())
        }
    }

    fn service(transport: Arc<StubStrings>) -> MessageService {
        let store = Arc::new(PreferenceStore::open(
            Box::new(MemoryStore::new()),
            Arc::new(LocaleCatalog::builtin()),
        ));
        MessageService::new(store, transport)
    }

    #[tokio::test]
    async fn successful_fetch_populates_the_cache() {
        let transport = Arc::new(StubStrings::working());
        let service = service(Arc::clone(&transport));

        let message = service.error_message("error.save").await;
        assert_eq!(message, "error.save@en-US");
        assert_eq!(service.cache().get("error.save").as_deref(), Some("error.save@en-US"));
    }

    #[tokio::test]
    async fn warm_cache_covers_remote_outages() {
        let transport = Arc::new(StubStrings::working());
        let service = service(Arc::clone(&transport));

        service.error_message("error.save").await;
        transport.set_failing(true);

        let message = service.error_message("error.save").await;
        assert_eq!(message, "error.save@en-US");
    }

    #[tokio::test]
    async fn cold_cache_degrades_to_static_defaults() {
        let transport = Arc::new(StubStrings::working());
        transport.set_failing(true);
        let service = service(Arc::clone(&transport));

        let message = service.error_message("error.network").await;
        assert_eq!(
            message,
            "We could not reach the server. Please check your connection."
        );
    }

    #[tokio::test]
    async fn clearing_the_cache_reverts_to_defaults() {
        let transport = Arc::new(StubStrings::working());
        let service = service(Arc::clone(&transport));

        service.error_message("error.load").await;
        transport.set_failing(true);
        service.cache().clear();

        let message = service.error_message("error.load").await;
        assert_eq!(message, "This content could not be loaded right now.");
    }
}
