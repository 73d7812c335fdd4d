//! Durable preference storage.
//!
//! The storage layer is a plain string key/value surface; enum validation on
//! read happens in [`read_axis`]. Absent, corrupt, or foreign data is always
//! treated as "no preference", never as an error, and I/O failures are
//! logged and swallowed so a full disk can not block a preference change.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use hirely_locale::LocaleCatalog;
use tracing::{debug, warn};

use crate::axis::{parse_axis_value, PrefAxis, PrefValue};

/// String key/value storage with durable intent.
pub trait PrefStorage: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
}

/// Read one axis from storage, validating against its allowed set.
///
/// Returns `None` for absent and invalid data alike; the caller falls back
/// to the axis default.
pub fn read_axis(
    storage: &dyn PrefStorage,
    axis: PrefAxis,
    catalog: &LocaleCatalog,
) -> Option<PrefValue> {
    let raw = storage.load(axis.storage_key())?;
    let parsed = parse_axis_value(axis, &raw, catalog);
    if parsed.is_none() {
        debug!(%axis, %raw, "discarding persisted value outside the allowed set");
    }
    parsed
}

/// Write one axis value through to storage.
pub fn write_axis(storage: &dyn PrefStorage, value: &PrefValue) {
    storage.store(value.axis().storage_key(), value.as_str());
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStorage for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

/// File-backed storage: a single TOML table, one entry per axis.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_table(&self) -> toml::Table {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return toml::Table::new(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read preference file");
                return toml::Table::new();
            }
        };
        match raw.parse::<toml::Table>() {
            Ok(table) => table,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "preference file is not valid TOML");
                toml::Table::new()
            }
        }
    }
}

impl PrefStorage for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        self.read_table()
            .get(key)
            .and_then(|v| v.as_str())
            .map(String::from)
    }

    fn store(&self, key: &str, value: &str) {
        let mut table = self.read_table();
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(path = %self.path.display(), %err, "failed to create preference directory");
                return;
            }
        }
        match toml::to_string(&table) {
            Ok(serialized) => {
                if let Err(err) = fs::write(&self.path, serialized) {
                    warn!(path = %self.path.display(), %err, "failed to write preference file");
                }
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to serialize preferences");
            }
        }
    }
}
