//! Dashboard preference persistence
//!
//! All preferences live in one JSON object stored under a single key of a
//! [`KeyValueStore`]. Every call re-reads the store; nothing is cached.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::PREFS_STORAGE_KEY;
use crate::error::{DashboardError, Result};

/// Preference object as stored
pub type PrefMap = Map<String, Value>;

/// String key-value storage, the shape of browser `localStorage`.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

// =============================================================================
// Stores
// =============================================================================

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Store keeping each key as `<key>.json` inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the stored files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DashboardError::Storage(format!("Failed to read {:?}: {}", path, e))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            DashboardError::Storage(format!("Failed to create directory {:?}: {}", self.dir, e))
        })?;

        let path = self.path_for(key);
        fs::write(&path, value)
            .map_err(|e| DashboardError::Storage(format!("Failed to write to {:?}: {}", path, e)))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DashboardError::Storage(format!("Failed to delete {:?}: {}", path, e))),
        }
    }
}

// =============================================================================
// Preferences
// =============================================================================

/// Dashboard preferences over a key-value store.
///
/// `save`, `load`, `remove` and `clear` never fail: storage faults and corrupt
/// data are logged and replaced by a harmless default. The `try_` variants
/// report them instead.
///
/// Swallowed faults go to `tracing` and to the warning sink installed with
/// [`on_warning`](Self::on_warning), if any.
pub struct DashboardPreferences<S: KeyValueStore> {
    store: S,
    storage_key: String,
    warning_sink: Option<Box<dyn Fn(&str)>>,
}

impl<S: KeyValueStore + fmt::Debug> fmt::Debug for DashboardPreferences<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardPreferences")
            .field("store", &self.store)
            .field("storage_key", &self.storage_key)
            .field("warning_sink", &self.warning_sink.is_some())
            .finish()
    }
}

impl<S: KeyValueStore> DashboardPreferences<S> {
    /// Preferences under the standard dashboard storage key
    pub fn new(store: S) -> Self {
        Self::with_key(store, PREFS_STORAGE_KEY)
    }

    /// Preferences under a custom storage key
    pub fn with_key(store: S, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
            warning_sink: None,
        }
    }

    /// Also report swallowed faults to `sink` (e.g. the browser console).
    pub fn on_warning(mut self, sink: impl Fn(&str) + 'static) -> Self {
        self.warning_sink = Some(Box::new(sink));
        self
    }

    /// Storage key holding the preference object
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the whole preference object.
    ///
    /// A missing or empty slot is an empty object. Unparseable data or JSON
    /// that is not an object is an error.
    pub fn try_load(&self) -> Result<PrefMap> {
        let content = match self.store.get_item(&self.storage_key)? {
            Some(c) if !c.trim().is_empty() => c,
            _ => return Ok(PrefMap::new()),
        };

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            other => Err(DashboardError::Storage(format!(
                "Stored preferences are not an object: {}",
                other
            ))),
        }
    }

    /// Read the whole preference object, empty on any fault.
    pub fn load(&self) -> PrefMap {
        self.try_load().unwrap_or_else(|e| {
            self.warn(&format!("Failed to load preferences: {}", e));
            PrefMap::new()
        })
    }

    /// Set one preference and persist the whole object.
    ///
    /// Existing data that cannot be read is discarded, like [`load`](Self::load).
    pub fn try_save(&self, key: &str, value: Value) -> Result<()> {
        let mut prefs = self.load();
        prefs.insert(key.to_string(), value);
        self.write(&prefs)
    }

    /// Set one preference, logging instead of failing.
    pub fn save(&self, key: &str, value: Value) {
        if let Err(e) = self.try_save(key, value) {
            self.warn(&format!("Failed to save preferences: {}", e));
        }
    }

    /// Get a preference; `None` only when the key is absent.
    ///
    /// Stored `false`, `0` and `null` are returned as present values.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.load().remove(key)
    }

    /// Get a preference, falling back to `default` when absent.
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).unwrap_or(default)
    }

    /// Remove one preference.
    pub fn try_remove(&self, key: &str) -> Result<()> {
        let mut prefs = self.load();
        if prefs.remove(key).is_some() {
            self.write(&prefs)?;
        }
        Ok(())
    }

    /// Remove one preference, logging instead of failing.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.try_remove(key) {
            self.warn(&format!("Failed to remove preference {:?}: {}", key, e));
        }
    }

    /// Drop the whole preference object, logging instead of failing.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove_item(&self.storage_key) {
            self.warn(&format!("Failed to clear preferences: {}", e));
        }
    }

    fn warn(&self, message: &str) {
        tracing::warn!(key = %self.storage_key, "{}", message);
        if let Some(sink) = &self.warning_sink {
            sink(message);
        }
    }

    fn write(&self, prefs: &PrefMap) -> Result<()> {
        let content = serde_json::to_string(prefs)?;
        self.store.set_item(&self.storage_key, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::env::temp_dir;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_store(name: &str) -> FileStore {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        FileStore::new(temp_dir().join(format!("dx_dashboard_prefs_test_{}_{}", id, name)))
    }

    /// Store that refuses every write
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(DashboardError::Storage("quota exceeded".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Err(DashboardError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_save_then_get() {
        let prefs = DashboardPreferences::new(MemoryStore::new());
        prefs.save("x", json!(42));
        assert_eq!(prefs.get("x"), Some(json!(42)));
    }

    #[test]
    fn test_default_only_when_absent() {
        let prefs = DashboardPreferences::new(MemoryStore::new());
        assert_eq!(prefs.get_or("missing", json!("fallback")), json!("fallback"));

        prefs.save("muted", json!(false));
        prefs.save("volume", json!(0));
        prefs.save("filter", Value::Null);
        assert_eq!(prefs.get_or("muted", json!(true)), json!(false));
        assert_eq!(prefs.get_or("volume", json!(5)), json!(0));
        assert_eq!(prefs.get_or("filter", json!("all")), Value::Null);
    }

    #[test]
    fn test_uses_standard_key() {
        let prefs = DashboardPreferences::new(MemoryStore::new());
        prefs.save("band", json!("20m"));

        let raw = prefs.store().get_item("dxspider_dashboard_prefs").unwrap().unwrap();
        assert_eq!(raw, r#"{"band":"20m"}"#);
    }

    #[test]
    fn test_save_keeps_other_keys() {
        let prefs = DashboardPreferences::new(MemoryStore::new());
        prefs.save("a", json!(1));
        prefs.save("b", json!([1, 2]));
        prefs.save("a", json!(3));

        let all = prefs.load();
        assert_eq!(all.len(), 2);
        assert_eq!(all["a"], json!(3));
        assert_eq!(all["b"], json!([1, 2]));
    }

    #[test]
    fn test_corrupt_data_loads_empty() {
        let store = MemoryStore::new();
        store.set_item(PREFS_STORAGE_KEY, "{not json").unwrap();
        let prefs = DashboardPreferences::new(store);

        assert!(prefs.load().is_empty());
        assert!(prefs.try_load().is_err());

        // A save replaces the corrupt blob
        prefs.save("x", json!(1));
        assert_eq!(prefs.get("x"), Some(json!(1)));
    }

    fn recording_prefs(store: MemoryStore) -> (DashboardPreferences<MemoryStore>, Rc<RefCell<Vec<String>>>) {
        let warnings = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&warnings);
        let prefs = DashboardPreferences::new(store)
            .on_warning(move |msg| sink.borrow_mut().push(msg.to_string()));
        (prefs, warnings)
    }

    #[test]
    fn test_corrupt_data_reports_warning() {
        let store = MemoryStore::new();
        store.set_item(PREFS_STORAGE_KEY, "{bad").unwrap();
        let (prefs, warnings) = recording_prefs(store);

        assert_eq!(prefs.get_or("x", json!("fallback")), json!("fallback"));
        assert_eq!(warnings.borrow().len(), 1);
        assert!(warnings.borrow()[0].starts_with("Failed to load preferences"));

        // Saving over the corrupt blob reports the unreadable data too
        prefs.save("x", json!(1));
        assert_eq!(warnings.borrow().len(), 2);
        assert_eq!(prefs.get("x"), Some(json!(1)));
        assert_eq!(warnings.borrow().len(), 2);
    }

    #[test]
    fn test_healthy_store_reports_nothing() {
        let (prefs, warnings) = recording_prefs(MemoryStore::new());
        prefs.save("x", json!(1));
        prefs.remove("x");
        prefs.clear();
        assert!(warnings.borrow().is_empty());
    }

    #[test]
    fn test_non_object_loads_empty() {
        let store = MemoryStore::new();
        store.set_item(PREFS_STORAGE_KEY, "[1,2,3]").unwrap();
        let prefs = DashboardPreferences::new(store);
        assert!(prefs.load().is_empty());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let prefs = DashboardPreferences::new(ReadOnlyStore);
        prefs.save("x", json!(1));
        prefs.clear();
        assert!(prefs.try_save("x", json!(1)).is_err());
        assert_eq!(prefs.get("x"), None);
    }

    #[test]
    fn test_remove_and_clear() {
        let prefs = DashboardPreferences::new(MemoryStore::new());
        prefs.save("a", json!(1));
        prefs.save("b", json!(2));

        prefs.remove("a");
        assert_eq!(prefs.get("a"), None);
        assert_eq!(prefs.get("b"), Some(json!(2)));

        prefs.clear();
        assert!(prefs.load().is_empty());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let store = temp_store("roundtrip");
        let dir = store.dir().to_path_buf();
        let prefs = DashboardPreferences::new(store.clone());

        prefs.save("theme", json!("dark"));
        assert!(dir.join("dxspider_dashboard_prefs.json").exists());

        // A second handle sees the persisted value
        let reopened = DashboardPreferences::new(store);
        assert_eq!(reopened.get("theme"), Some(json!("dark")));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_missing_and_remove() {
        let store = temp_store("missing");
        assert_eq!(store.get_item("nothing").unwrap(), None);
        store.remove_item("nothing").unwrap();
    }

    #[test]
    fn test_custom_key() {
        let prefs = DashboardPreferences::with_key(MemoryStore::new(), "other_prefs");
        prefs.save("x", json!(true));
        assert!(prefs.store().get_item("other_prefs").unwrap().is_some());
        assert!(prefs.store().get_item(PREFS_STORAGE_KEY).unwrap().is_none());
    }
}
