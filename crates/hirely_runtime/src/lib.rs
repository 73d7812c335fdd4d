//! Hirely preference runtime
//!
//! The process-scoped wiring of the preference core: one store initialized
//! from durable storage, pure theme resolution, idempotent side-effect
//! application, and best-effort remote sync. Created once at startup and
//! torn down by dropping the value; all mutation goes through its methods.
//!
//! Any accepted preference change — including the optimistic language
//! switch inside [`change_language`](PreferenceRuntime::change_language) —
//! synchronously re-resolves the theme and re-applies document side
//! effects before the triggering call returns, so collaborators can read
//! document state immediately after a setter without seeing stale values.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use hirely_platform::HeadlessDocument;
//! use hirely_runtime::{PreferenceRuntime, RuntimeConfig};
//! use hirely_theme::ThemeMode;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = RuntimeConfig::load("hirely.toml".as_ref())?;
//! let runtime = PreferenceRuntime::new(&config, HeadlessDocument::new(), false)?;
//!
//! runtime.set_mode(ThemeMode::Dark);
//! assert!(runtime.resolved_theme().scheme.is_dark());
//! # Ok(())
//! # }
//! ```

mod config;

pub use config::{RemoteConfig, RuntimeConfig, StorageConfig};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use hirely_locale::SupportedLanguage;
use hirely_platform::{DocumentHost, StyleApplier};
use hirely_prefs::{
    FileStore, PrefAxis, PreferenceError, PreferenceStore, SubscriptionId,
};
use hirely_sync::{CultureSync, CultureTransport, MessageService, RemoteClient};
use hirely_theme::{
    resolve, to_css_variables, BrandVariant, ColorProfile, CssVariableMap, ResolvedTheme,
    ThemeMode,
};

/// The preference core, assembled.
pub struct PreferenceRuntime<D: DocumentHost + 'static> {
    store: Arc<PreferenceStore>,
    sync: CultureSync,
    messages: MessageService,
    applier: Arc<Mutex<StyleApplier<D>>>,
    ambient_dark: Arc<AtomicBool>,
}

impl<D: DocumentHost + 'static> PreferenceRuntime<D> {
    /// Build the runtime from configuration: file-backed storage and the
    /// real remote client.
    pub fn new(config: &RuntimeConfig, document: D, ambient_dark: bool) -> Result<Self> {
        let catalog = Arc::new(config.catalog()?);
        let store = Arc::new(PreferenceStore::open(
            Box::new(FileStore::new(&config.storage.path)),
            catalog,
        ));
        let transport: Arc<dyn CultureTransport> = Arc::new(RemoteClient::new(
            config.remote.base_url.clone(),
            Duration::from_millis(config.remote.timeout_ms),
        ));
        Ok(Self::assemble(store, transport, document, ambient_dark))
    }

    /// Build the runtime from pre-constructed parts. This is the seam used
    /// by tests and by hosts that bring their own storage or transport.
    pub fn from_parts(
        store: Arc<PreferenceStore>,
        transport: Arc<dyn CultureTransport>,
        document: D,
        ambient_dark: bool,
    ) -> Self {
        Self::assemble(store, transport, document, ambient_dark)
    }

    fn assemble(
        store: Arc<PreferenceStore>,
        transport: Arc<dyn CultureTransport>,
        document: D,
        ambient_dark: bool,
    ) -> Self {
        let applier = Arc::new(Mutex::new(StyleApplier::new(document)));
        let ambient = Arc::new(AtomicBool::new(ambient_dark));

        // Any accepted change on any axis re-applies side effects inside
        // the set call. Weak, so dropping the runtime tears everything
        // down.
        for axis in PrefAxis::all() {
            let store_ref = Arc::downgrade(&store);
            let applier = Arc::clone(&applier);
            let ambient = Arc::clone(&ambient);
            store.subscribe(*axis, move |_| {
                if let Some(store) = store_ref.upgrade() {
                    reapply(&store, &applier, &ambient);
                }
            });
        }

        let runtime = Self {
            sync: CultureSync::new(Arc::clone(&store), Arc::clone(&transport)),
            messages: MessageService::new(Arc::clone(&store), transport),
            store,
            applier,
            ambient_dark: ambient,
        };
        reapply(&runtime.store, &runtime.applier, &runtime.ambient_dark);
        runtime
    }

    // ========== Visual axes ==========

    pub fn set_variant(&self, variant: BrandVariant) {
        self.store.set_variant(variant);
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        self.store.set_mode(mode);
    }

    pub fn set_color_profile(&self, profile: ColorProfile) {
        self.store.set_color_profile(profile);
    }

    /// String-typed axis setter for UI layers that work with raw values.
    pub fn set_preference(&self, axis: PrefAxis, raw: &str) -> Result<(), PreferenceError> {
        self.store.set(axis, raw)
    }

    /// The host's ambient display scheme changed; re-resolve against it.
    pub fn set_ambient_dark(&self, is_dark: bool) {
        tracing::debug!(is_dark, "ambient scheme changed");
        self.ambient_dark.store(is_dark, Ordering::SeqCst);
        reapply(&self.store, &self.applier, &self.ambient_dark);
    }

    // ========== Language ==========

    /// Switch the active language, syncing the culture remotely on a
    /// best-effort basis. See [`CultureSync::change_language`].
    pub async fn change_language(&self, key: &str) -> Result<bool, PreferenceError> {
        self.sync.change_language(key).await
    }

    /// Supported languages in configuration order, with `is_current` set.
    pub fn languages(&self) -> Vec<SupportedLanguage> {
        self.store.catalog().list(&self.store.language())
    }

    pub fn language(&self) -> String {
        self.store.language()
    }

    /// Enrich language display names from the remote culture list.
    pub async fn refresh_cultures(&self) {
        self.sync.refresh_cultures().await;
    }

    /// Localized message for an error-presentation path. Never fails; the
    /// source degrades from live fetch to cache to static default.
    pub async fn error_message(&self, key: &str) -> String {
        self.messages.error_message(key).await
    }

    // ========== Derived views ==========

    pub fn resolved_theme(&self) -> ResolvedTheme {
        resolve(
            self.store.variant(),
            self.store.mode(),
            self.store.color_profile(),
            self.ambient_dark.load(Ordering::SeqCst),
        )
    }

    pub fn css_variables(&self) -> CssVariableMap {
        to_css_variables(&self.resolved_theme())
    }

    // ========== Collaborator access ==========

    /// The underlying store, for UI layers that subscribe per axis.
    pub fn store(&self) -> &Arc<PreferenceStore> {
        &self.store
    }

    /// Subscribe to one axis. Sugar over [`PreferenceStore::subscribe`].
    pub fn subscribe(
        &self,
        axis: PrefAxis,
        callback: impl Fn(&hirely_prefs::PrefValue) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(axis, callback)
    }

    /// Inspect the document host, e.g. to assert on applied side effects.
    pub fn inspect_document<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        f(self.applier.lock().unwrap().document())
    }
}

fn reapply<D: DocumentHost>(
    store: &PreferenceStore,
    applier: &Mutex<StyleApplier<D>>,
    ambient: &AtomicBool,
) {
    let theme = resolve(
        store.variant(),
        store.mode(),
        store.color_profile(),
        ambient.load(Ordering::SeqCst),
    );
    let vars = to_css_variables(&theme);
    let language = store.language();
    applier.lock().unwrap().apply(&vars, &theme, &language);
}
