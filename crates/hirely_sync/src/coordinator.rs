//! Language-change coordination.
//!
//! Two states per request: idle and syncing. A request that arrives while a
//! sync is in flight is rejected outright, never queued, which keeps rapid
//! successive switches from landing remote culture updates out of order.
//! The remote call is a side channel: the local switch always happens first
//! and is never rolled back on remote failure.

use std::sync::{Arc, RwLock};

use hirely_locale::CultureDescriptor;
use hirely_prefs::{PrefAxis, PreferenceError, PreferenceStore};
use tracing::{debug, warn};

use crate::client::CultureTransport;

/// Coordinates optimistic local language switches with best-effort remote
/// culture sync.
pub struct CultureSync {
    store: Arc<PreferenceStore>,
    transport: Arc<dyn CultureTransport>,
    known_culture: RwLock<Option<String>>,
}

impl CultureSync {
    pub fn new(store: Arc<PreferenceStore>, transport: Arc<dyn CultureTransport>) -> Self {
        Self {
            store,
            transport,
            known_culture: RwLock::new(None),
        }
    }

    /// The culture code the remote last acknowledged, if any.
    pub fn known_culture(&self) -> Option<String> {
        self.known_culture.read().unwrap().clone()
    }

    /// Switch the active language.
    ///
    /// Returns `Ok(true)` when the request was accepted, `Ok(false)` when a
    /// sync was already in flight (the request is dropped, not queued), and
    /// `Err` only for a key outside the configured catalog. Remote failures
    /// are swallowed here; they are observable through logs only.
    pub async fn change_language(&self, key: &str) -> Result<bool, PreferenceError> {
        if !self.store.begin_sync(PrefAxis::Language) {
            debug!(%key, "language change rejected: sync already in flight");
            return Ok(false);
        }

        let result = self.switch(key).await;
        // Idle is the only terminal state, success or failure.
        self.store.end_sync(PrefAxis::Language);
        result.map(|()| true)
    }

    async fn switch(&self, key: &str) -> Result<(), PreferenceError> {
        // Optimistic local switch. Everything the user can see changes here,
        // before the network is touched.
        self.store.set_language(key)?;

        let code = match self.store.catalog().culture_code(key) {
            Some(code) => code.to_string(),
            // Validated above; a missing code would be a config mismatch.
            None => return Ok(()),
        };

        match self.transport.set_culture(&code).await {
            Ok(()) => {
                debug!(%key, culture = %code, "remote culture sync acknowledged");
                *self.known_culture.write().unwrap() = Some(code);
            }
            Err(err) => {
                warn!(%key, culture = %code, error = %err, "remote culture sync failed; keeping local switch");
            }
        }
        Ok(())
    }

    /// Enrich the language catalog from the remote culture list.
    ///
    /// On failure the local configuration stays the source of truth.
    pub async fn refresh_cultures(&self) {
        match self.transport.cultures().await {
            Ok(cultures) => {
                let descriptors: Vec<CultureDescriptor> =
                    cultures.iter().map(CultureDescriptor::from).collect();
                self.store.catalog().apply_remote(&descriptors);
            }
            Err(err) => {
                debug!(error = %err, "culture list refresh failed; using local configuration");
            }
        }
    }
}
