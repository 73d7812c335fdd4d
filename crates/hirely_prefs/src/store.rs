//! The preference store.
//!
//! Process-scoped, created once by reading durable storage, mutated only
//! through its setters. Setters validate, write through storage, update the
//! in-memory state, and synchronously notify per-axis subscribers, in that
//! order. No two axes are coupled at this layer.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use hirely_locale::LocaleCatalog;
use hirely_theme::{BrandVariant, ColorProfile, ThemeMode};
use tracing::debug;

use crate::axis::{default_axis_value, parse_axis_value, PrefAxis, PrefValue};
use crate::error::PreferenceError;
use crate::storage::{read_axis, write_axis, PrefStorage};

/// Handle for removing a subscriber.
pub type SubscriptionId = u64;

type Callback = Box<dyn Fn(&PrefValue) + Send + Sync>;

#[derive(Clone, Debug, PartialEq)]
struct Prefs {
    variant: BrandVariant,
    mode: ThemeMode,
    profile: ColorProfile,
    language: String,
}

/// Subscribable store over the four preference axes.
pub struct PreferenceStore {
    state: RwLock<Prefs>,
    storage: Box<dyn PrefStorage>,
    catalog: Arc<LocaleCatalog>,
    subscribers: Mutex<[Vec<(SubscriptionId, Callback)>; PrefAxis::COUNT]>,
    next_subscription: AtomicU64,
    syncing: [AtomicBool; PrefAxis::COUNT],
}

impl PreferenceStore {
    /// Create the store by reading every axis from storage, falling back to
    /// the axis default wherever no valid persisted value exists.
    pub fn open(storage: Box<dyn PrefStorage>, catalog: Arc<LocaleCatalog>) -> Self {
        let axis_value = |axis: PrefAxis| {
            read_axis(storage.as_ref(), axis, &catalog)
                .unwrap_or_else(|| default_axis_value(axis, &catalog))
        };

        let state = Prefs {
            variant: match axis_value(PrefAxis::Variant) {
                PrefValue::Variant(v) => v,
                _ => BrandVariant::default(),
            },
            mode: match axis_value(PrefAxis::Mode) {
                PrefValue::Mode(m) => m,
                _ => ThemeMode::default(),
            },
            profile: match axis_value(PrefAxis::ColorProfile) {
                PrefValue::ColorProfile(p) => p,
                _ => ColorProfile::default(),
            },
            language: match axis_value(PrefAxis::Language) {
                PrefValue::Language(key) => key,
                _ => catalog.default_key().to_string(),
            },
        };
        debug!(?state, "opened preference store");

        Self {
            state: RwLock::new(state),
            storage,
            catalog,
            subscribers: Mutex::new(Default::default()),
            next_subscription: AtomicU64::new(1),
            syncing: Default::default(),
        }
    }

    pub fn catalog(&self) -> &Arc<LocaleCatalog> {
        &self.catalog
    }

    // ========== Reads ==========

    pub fn variant(&self) -> BrandVariant {
        self.state.read().unwrap().variant
    }

    pub fn mode(&self) -> ThemeMode {
        self.state.read().unwrap().mode
    }

    pub fn color_profile(&self) -> ColorProfile {
        self.state.read().unwrap().profile
    }

    pub fn language(&self) -> String {
        self.state.read().unwrap().language.clone()
    }

    pub fn get(&self, axis: PrefAxis) -> PrefValue {
        let state = self.state.read().unwrap();
        match axis {
            PrefAxis::Variant => PrefValue::Variant(state.variant),
            PrefAxis::Mode => PrefValue::Mode(state.mode),
            PrefAxis::ColorProfile => PrefValue::ColorProfile(state.profile),
            PrefAxis::Language => PrefValue::Language(state.language.clone()),
        }
    }

    // ========== Writes ==========

    /// Set an axis from its raw string form, validating against the axis's
    /// allowed set. Rejected values leave every layer untouched.
    pub fn set(&self, axis: PrefAxis, raw: &str) -> Result<(), PreferenceError> {
        let value = parse_axis_value(axis, raw, &self.catalog).ok_or_else(|| {
            PreferenceError::InvalidValue {
                axis,
                value: raw.to_string(),
            }
        })?;
        self.commit(value);
        Ok(())
    }

    pub fn set_variant(&self, variant: BrandVariant) {
        self.commit(PrefValue::Variant(variant));
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        self.commit(PrefValue::Mode(mode));
    }

    pub fn set_color_profile(&self, profile: ColorProfile) {
        self.commit(PrefValue::ColorProfile(profile));
    }

    pub fn set_language(&self, key: &str) -> Result<(), PreferenceError> {
        self.set(PrefAxis::Language, key)
    }

    fn commit(&self, value: PrefValue) {
        let axis = value.axis();
        {
            let state = self.state.read().unwrap();
            let unchanged = match &value {
                PrefValue::Variant(v) => state.variant == *v,
                PrefValue::Mode(m) => state.mode == *m,
                PrefValue::ColorProfile(p) => state.profile == *p,
                PrefValue::Language(key) => state.language == *key,
            };
            if unchanged {
                return;
            }
        }
        debug!(%axis, value = %value.as_str(), "preference change");

        // Write-through before the in-memory switch so a crash between the
        // two re-reads the new value on next start.
        write_axis(self.storage.as_ref(), &value);

        {
            let mut state = self.state.write().unwrap();
            match &value {
                PrefValue::Variant(v) => state.variant = *v,
                PrefValue::Mode(m) => state.mode = *m,
                PrefValue::ColorProfile(p) => state.profile = *p,
                PrefValue::Language(key) => state.language = key.clone(),
            }
        }

        self.notify(axis, &value);
    }

    // ========== Subscriptions ==========

    /// Register a callback invoked synchronously after every accepted change
    /// on `axis`. Callbacks must not call back into the store's setters.
    pub fn subscribe(
        &self,
        axis: PrefAxis,
        callback: impl Fn(&PrefValue) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.subscribers.lock().unwrap()[axis.index()].push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subscribers = self.subscribers.lock().unwrap();
        for axis_subscribers in subscribers.iter_mut() {
            axis_subscribers.retain(|(sub_id, _)| *sub_id != id);
        }
    }

    fn notify(&self, axis: PrefAxis, value: &PrefValue) {
        let subscribers = self.subscribers.lock().unwrap();
        for (_, callback) in &subscribers[axis.index()] {
            callback(value);
        }
    }

    // ========== Sync flags ==========

    pub fn is_syncing(&self, axis: PrefAxis) -> bool {
        self.syncing[axis.index()].load(Ordering::SeqCst)
    }

    /// Claim the per-axis sync slot. Returns `false` if a sync is already in
    /// flight; the caller must reject rather than queue.
    pub fn begin_sync(&self, axis: PrefAxis) -> bool {
        self.syncing[axis.index()]
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn end_sync(&self, axis: PrefAxis) {
        self.syncing[axis.index()].store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicUsize;

    fn open_store() -> PreferenceStore {
        PreferenceStore::open(
            Box::new(MemoryStore::new()),
            Arc::new(LocaleCatalog::builtin()),
        )
    }

    #[test]
    fn empty_storage_yields_axis_defaults() {
        let store = open_store();
        assert_eq!(store.variant(), BrandVariant::A);
        assert_eq!(store.mode(), ThemeMode::Auto);
        assert_eq!(store.color_profile(), ColorProfile::Default);
        assert_eq!(store.language(), "en");
    }

    #[test]
    fn persisted_values_are_restored() {
        let storage = MemoryStore::new();
        storage.store("variant", "b");
        storage.store("mode", "dark");
        storage.store("language", "de");

        let store =
            PreferenceStore::open(Box::new(storage), Arc::new(LocaleCatalog::builtin()));
        assert_eq!(store.variant(), BrandVariant::B);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.language(), "de");
    }

    #[test]
    fn corrupt_persisted_values_fall_back_to_defaults() {
        let storage = MemoryStore::new();
        storage.store("mode", "blinding");
        storage.store("language", "tlh");

        let store =
            PreferenceStore::open(Box::new(storage), Arc::new(LocaleCatalog::builtin()));
        assert_eq!(store.mode(), ThemeMode::Auto);
        assert_eq!(store.language(), "en");
    }

    #[test]
    fn set_writes_through_and_notifies_synchronously() {
        let store = open_store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_by_callback = Arc::clone(&seen);
        store.subscribe(PrefAxis::Mode, move |value| {
            seen_by_callback.lock().unwrap().push(value.as_str().to_string());
        });

        store.set_mode(ThemeMode::Dark);

        // Synchronous: visible before the setter returns control here.
        assert_eq!(*seen.lock().unwrap(), vec!["dark"]);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.get(PrefAxis::Mode).as_str(), "dark");
    }

    #[test]
    fn invalid_set_is_rejected_with_no_partial_state_change() {
        let store = open_store();
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notified);
        store.subscribe(PrefAxis::Language, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let err = store.set(PrefAxis::Language, "fr").unwrap_err();
        assert_eq!(
            err,
            PreferenceError::InvalidValue {
                axis: PrefAxis::Language,
                value: "fr".into()
            }
        );
        assert_eq!(store.language(), "en");
        assert_eq!(notified.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn setting_the_current_value_is_a_noop() {
        let store = open_store();
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notified);
        store.subscribe(PrefAxis::Variant, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set_variant(BrandVariant::A);
        assert_eq!(notified.load(Ordering::SeqCst), 0);

        store.set_variant(BrandVariant::B);
        store.set_variant(BrandVariant::B);
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = open_store();
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notified);
        let id = store.subscribe(PrefAxis::Mode, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set_mode(ThemeMode::Dark);
        store.unsubscribe(id);
        store.set_mode(ThemeMode::Light);
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn axes_are_not_coupled() {
        let store = open_store();
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notified);
        store.subscribe(PrefAxis::Language, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set_mode(ThemeMode::Dark);
        store.set_variant(BrandVariant::B);
        assert_eq!(notified.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn sync_slot_is_exclusive_per_axis() {
        let store = open_store();
        assert!(!store.is_syncing(PrefAxis::Language));
        assert!(store.begin_sync(PrefAxis::Language));
        assert!(store.is_syncing(PrefAxis::Language));

        // Second claim is rejected, other axes are unaffected.
        assert!(!store.begin_sync(PrefAxis::Language));
        assert!(store.begin_sync(PrefAxis::Mode));

        store.end_sync(PrefAxis::Language);
        assert!(store.begin_sync(PrefAxis::Language));
    }
}
