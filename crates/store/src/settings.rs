//! Durable string-to-string settings file

use asyncstore_core::{Error, Result};
use asyncstore_utils::{read_optional, write_atomic, StoreLock};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A settings file holding string keys and string values.
///
/// The file is a JSON object and is rewritten through an atomic rename,
/// under the store lock, after every mutation. Keys enumerate in lexical
/// order.
///
/// Reads that miss can be satisfied by fallback stores while fallbacks are
/// enabled (the default). Writes only ever touch this store.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    fallbacks: Vec<SettingsStore>,
    fallbacks_enabled: bool,
}

impl SettingsStore {
    /// Open the settings file at `path`, creating its directory if needed.
    ///
    /// A missing or empty file opens as an empty store. The file itself is
    /// only created by the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::file_system(parent, "create settings directory", e))?;
        }

        let entries = match read_optional(&path)? {
            Some(content) if !content.trim().is_empty() => Self::parse(&path, &content)?,
            _ => BTreeMap::new(),
        };

        debug!(path = %path.display(), keys = entries.len(), "opened settings file");

        Ok(Self {
            path,
            entries,
            fallbacks: Vec::new(),
            fallbacks_enabled: true,
        })
    }

    fn parse(path: &Path, content: &str) -> Result<BTreeMap<String, String>> {
        serde_json::from_str(content)
            .map_err(|e| Error::store_corrupt(path, format!("expected an object of strings: {e}")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fallbacks_enabled(&self) -> bool {
        self.fallbacks_enabled
    }

    pub fn set_fallbacks_enabled(&mut self, enabled: bool) {
        self.fallbacks_enabled = enabled;
    }

    /// Append a store consulted when a key is missing here
    pub fn add_fallback(&mut self, fallback: SettingsStore) {
        self.fallbacks.push(fallback);
    }

    /// Look a key up, falling through to fallback stores when enabled
    pub fn value(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.entries.get(key) {
            return Some(value);
        }
        if !self.fallbacks_enabled {
            return None;
        }
        self.fallbacks.iter().find_map(|fallback| fallback.value(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Every visible key, including those only present in fallbacks when
    /// they are enabled
    pub fn all_keys(&self) -> Vec<String> {
        if !self.fallbacks_enabled || self.fallbacks.is_empty() {
            return self.entries.keys().cloned().collect();
        }

        let mut keys: BTreeSet<String> = self.entries.keys().cloned().collect();
        for fallback in &self.fallbacks {
            keys.extend(fallback.all_keys());
        }
        keys.into_iter().collect()
    }

    /// Number of keys stored in this file, fallbacks excluded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.entries.insert(key.into(), value.into());
        self.sync()
    }

    /// Insert every pair in order and write once. Later pairs for the same
    /// key replace earlier ones.
    pub fn set_values<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.entries.insert(key.into(), value.into());
        }
        self.sync()
    }

    /// Remove one key. Missing keys leave the file untouched.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.remove_keys([key])
    }

    /// Remove several keys, writing only if something was actually removed
    pub fn remove_keys<I, K>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut removed = 0usize;
        for key in keys {
            if self.entries.remove(key.as_ref()).is_some() {
                removed += 1;
            }
        }

        if removed == 0 {
            trace!(path = %self.path.display(), "no keys removed, skipping write");
            return Ok(());
        }
        self.sync()
    }

    /// Drop every key stored in this file
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.sync()
    }

    /// Write the current contents to disk
    pub fn sync(&self) -> Result<()> {
        let _lock = StoreLock::acquire(&self.path)?;

        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| Error::json("serialize settings", e))?;
        write_atomic(&self.path, content.as_bytes())?;

        trace!(path = %self.path.display(), keys = self.entries.len(), "settings file written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> SettingsStore {
        SettingsStore::open(temp_dir.path().join("app").join("react-state-store")).unwrap()
    }

    #[test]
    fn test_open_missing_file_is_empty_and_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        assert!(store.is_empty());
        assert!(temp_dir.path().join("app").is_dir());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        store.set_value("theme", "dark").unwrap();
        store
            .set_values([("lang", "en"), ("tz", "UTC")])
            .unwrap();
        drop(store);

        let reopened = store_in(&temp_dir);
        assert_eq!(reopened.value("theme"), Some("dark"));
        assert_eq!(reopened.all_keys(), vec!["lang", "theme", "tz"]);
    }

    #[test]
    fn test_last_pair_wins_within_batch() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        store.set_values([("k", "a"), ("k", "b")]).unwrap();

        assert_eq!(store.value("k"), Some("b"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_removing_missing_key_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        store.remove("nonexistent").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_persists_empty_object() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        store.set_value("a", "1").unwrap();
        store.clear().unwrap();

        assert!(store.is_empty());
        assert_eq!(fs::read_to_string(store.path()).unwrap().trim(), "{}");
    }

    #[test]
    fn test_corrupt_file_fails_to_open() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("react-state-store");
        fs::write(&path, r#"{"a": 1}"#).unwrap();

        match SettingsStore::open(&path) {
            Err(Error::StoreCorrupt { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected corrupt store error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_opens_as_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("react-state-store");
        fs::write(&path, "\n").unwrap();

        assert!(SettingsStore::open(&path).unwrap().is_empty());
    }

    #[test]
    fn test_fallbacks_only_apply_while_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let mut defaults = SettingsStore::open(temp_dir.path().join("defaults")).unwrap();
        defaults.set_value("shared", "from-defaults").unwrap();

        let mut store = store_in(&temp_dir);
        store.set_value("own", "1").unwrap();
        store.add_fallback(defaults);

        assert!(store.fallbacks_enabled());
        assert_eq!(store.value("shared"), Some("from-defaults"));
        assert_eq!(store.all_keys(), vec!["own", "shared"]);

        store.set_fallbacks_enabled(false);
        assert_eq!(store.value("shared"), None);
        assert!(!store.contains("shared"));
        assert_eq!(store.all_keys(), vec!["own"]);
    }
}
