//! String key-value stores.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::StoreError;

/// A persistent map from string keys to string values.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Platform data directory for moodboard (e.g. `~/.local/share/moodboard`).
pub fn default_data_dir() -> Result<PathBuf, StoreError> {
    ProjectDirs::from("", "", "moodboard")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .ok_or(StoreError::NoDataDir)
}

/// Store that keeps one file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        // Write beside the target and rename so readers never see a partial value.
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(&path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("mood").unwrap(), None);
        store.set("mood", "sad").unwrap();
        assert_eq!(store.get("mood").unwrap().as_deref(), Some("sad"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("nested")).unwrap();

        assert_eq!(store.get("moodHistory").unwrap(), None);
        store.set("moodHistory", "[]").unwrap();
        store.set("moodHistory", r#"[{"mood":"sad"}]"#).unwrap();

        let reopened = FileStore::open(dir.path().join("nested")).unwrap();
        assert_eq!(
            reopened.get("moodHistory").unwrap().as_deref(),
            Some(r#"[{"mood":"sad"}]"#)
        );
        assert!(!dir.path().join("nested").join("moodHistory.tmp").exists());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        for key in ["", "../escape", "a/b", "x.y"] {
            assert!(matches!(store.get(key), Err(StoreError::InvalidKey(_))));
            assert!(matches!(store.set(key, "v"), Err(StoreError::InvalidKey(_))));
        }
    }
}
