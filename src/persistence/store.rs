//! String key/value stores.
//!
//! This module provides the [`KeyValueStore`] trait and two implementations:
//! [`MemoryStore`] for tests and ephemeral servers, and [`FileStore`], which
//! keeps the map in a JSON file so inputs survive restarts.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

/// A string key to string value store.
///
/// Implementations use interior mutability so a single store can be shared
/// behind an `Arc` between request handlers.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> EngineResult<Option<String>>;

    /// Returns the values of `keys`, in order, read from one snapshot.
    fn get_many(&self, keys: &[&str]) -> EngineResult<Vec<Option<String>>>;

    /// Stores every `(key, value)` pair as one update.
    ///
    /// Concurrent readers and writers see either none or all of the pairs.
    /// On error the store is left unchanged.
    fn set_many(&self, entries: &[(&str, &str)]) -> EngineResult<()>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> EngineResult<()> {
        self.set_many(&[(key, value)])
    }
}

fn batch_key(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(key, _)| *key)
        .collect::<Vec<_>>()
        .join(",")
}

fn read_keys(entries: &BTreeMap<String, String>, keys: &[&str]) -> Vec<Option<String>> {
    keys.iter().map(|key| entries.get(*key).cloned()).collect()
}

fn poisoned(key: &str) -> EngineError {
    EngineError::PersistenceError {
        key: key.to_string(),
        message: "store lock poisoned".to_string(),
    }
}

/// An in-memory store.
///
/// # Example
///
/// ```
/// use loan_engine::persistence::{KeyValueStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set("zipcode", "10001").unwrap();
/// assert_eq!(store.get("zipcode").unwrap().as_deref(), Some("10001"));
/// assert_eq!(store.get("missing").unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| poisoned(key))?;
        Ok(entries.get(key).cloned())
    }

    fn get_many(&self, keys: &[&str]) -> EngineResult<Vec<Option<String>>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| poisoned(&keys.join(",")))?;
        Ok(read_keys(&entries, keys))
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> EngineResult<()> {
        let mut stored = self
            .entries
            .write()
            .map_err(|_| poisoned(&batch_key(entries)))?;
        for (key, value) in entries {
            stored.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}

/// A store backed by a JSON object file.
///
/// The file is read once when the store is opened and replaced in full on
/// every write, by writing a sibling temporary file and renaming it over the
/// original.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file yields an empty store; the file is created on the first
    /// write. A file that is not a JSON object of strings is logged and
    /// treated as empty, and is replaced on the next write. A file that
    /// cannot be read is an error.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries: BTreeMap<String, String> = if path.exists() {
            let content =
                fs::read_to_string(&path).map_err(|e| EngineError::PersistenceError {
                    key: path.display().to_string(),
                    message: e.to_string(),
                })?;
            match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "Malformed store file, starting empty"
                    );
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "Opened file store");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("store"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_file(&self, key: &str, entries: &BTreeMap<String, String>) -> EngineResult<()> {
        let to_error = |message: String| EngineError::PersistenceError {
            key: key.to_string(),
            message,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| to_error(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(entries).map_err(|e| to_error(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| to_error(e.to_string()))?;
        fs::rename(&temp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp);
            to_error(e.to_string())
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| poisoned(key))?;
        Ok(entries.get(key).cloned())
    }

    fn get_many(&self, keys: &[&str]) -> EngineResult<Vec<Option<String>>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| poisoned(&keys.join(",")))?;
        Ok(read_keys(&entries, keys))
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> EngineResult<()> {
        let key = batch_key(entries);
        let mut stored = self.entries.write().map_err(|_| poisoned(&key))?;

        let mut updated = stored.clone();
        for (key, value) in entries {
            updated.insert(key.to_string(), value.to_string());
        }
        self.write_file(&key, &updated)?;
        *stored = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_memory_store_overwrites_values() {
        let store = MemoryStore::new();
        store.set("annualInt", "6").unwrap();
        store.set("annualInt", "7").unwrap();
        assert_eq!(store.get("annualInt").unwrap().as_deref(), Some("7"));
    }

    #[test]
    fn test_file_store_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("inputs.json")).unwrap();
        assert_eq!(store.get("loanAmount").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("inputs.json");

        {
            let store = FileStore::open(&path).unwrap();
            store.set("loanAmount", "250000").unwrap();
            store.set("zipcode", "94103").unwrap();
        }

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("loanAmount").unwrap().as_deref(), Some("250000"));
        assert_eq!(reopened.get("zipcode").unwrap().as_deref(), Some("94103"));
    }

    #[test]
    fn test_file_store_truncated_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.json");
        fs::write(&path, r#"{"loanAmount": "10"#).unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("loanAmount").unwrap(), None);

        store.set("loanAmount", "20000").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("loanAmount").unwrap().as_deref(), Some("20000"));
    }

    #[test]
    fn test_file_store_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.json");

        let store = FileStore::open(&path).unwrap();
        store.set_many(&[("loanAmount", "1"), ("zipcode", "2")]).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![OsString::from("inputs.json")]);
    }

    #[test]
    fn test_file_store_failed_write_keeps_previous_values() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        // the parent of the store path is a regular file, so every write fails
        let store = FileStore::open(blocker.join("inputs.json")).unwrap();
        assert!(store.set("loanAmount", "5000").is_err());
        assert_eq!(store.get("loanAmount").unwrap(), None);
    }

    #[test]
    fn test_set_many_is_all_or_nothing_for_readers() {
        let store = Arc::new(MemoryStore::new());
        store.set_many(&[("a", "0"), ("b", "0")]).unwrap();

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 1..500 {
                    let value = i.to_string();
                    store
                        .set_many(&[("a", value.as_str()), ("b", value.as_str())])
                        .unwrap();
                }
            })
        };
        for _ in 0..500 {
            let a = store.get("a").unwrap();
            let b = store.get("b").unwrap();
            // b is read after a, so it can only be newer
            let a: u32 = a.unwrap().parse().unwrap();
            let b: u32 = b.unwrap().parse().unwrap();
            assert!(b >= a);
        }
        writer.join().unwrap();
        assert_eq!(store.get("a").unwrap(), store.get("b").unwrap());
    }

    #[test]
    fn test_stores_are_object_safe() {
        let stores: Vec<Box<dyn KeyValueStore>> = vec![Box::new(MemoryStore::new())];
        stores[0].set("k", "v").unwrap();
        assert_eq!(stores[0].get("k").unwrap().as_deref(), Some("v"));
    }
}
