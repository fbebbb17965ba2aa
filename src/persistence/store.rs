use serde_json::{Map, Value};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode defaults: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

/// Flat key-value defaults (tasks, durations, theme, language)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Defaults kept in one JSON object file, rewritten atomically on every change
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; a file
    /// that is not a JSON object is treated as empty and replaced on the
    /// next write.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let content = if path.exists() {
            std::fs::read_to_string(&path).map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?
        } else {
            String::new()
        };

        let values = if content.trim().is_empty() {
            Map::new()
        } else {
            match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => map,
                Ok(_) | Err(_) => {
                    warn!(path = %path.display(), "defaults file is malformed, starting empty");
                    Map::new()
                }
            }
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        crate::persistence::atomic_write(&self.path, &json).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            reason: format!("{:#}", e),
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}

/// In-memory store. Clones share the same map, so a second store instance
/// can observe what the first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<Map<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_open_nonexistent_store() {
        let temp_dir = tempdir().unwrap();
        let store = JsonFileStore::open(temp_dir.path().join("defaults.json")).unwrap();
        assert!(store.get("tasks").is_none());
    }

    #[test]
    fn test_set_and_reopen() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("defaults.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("workDuration", json!(1800)).unwrap();
        store.set("themeMode", json!("businessMotion")).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("workDuration"), Some(json!(1800)));
        assert_eq!(reopened.get("themeMode"), Some(json!("businessMotion")));
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("defaults.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.get("tasks").is_none());

        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.get("tasks").is_none());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("defaults.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        let result = store.set("workDuration", json!(60));
        assert!(matches!(result, Err(StoreError::Write { .. })));
    }

    #[test]
    fn test_memory_store_clones_share_values() {
        let mut first = MemoryStore::new();
        let second = first.clone();

        first.set("workDuration", json!(600)).unwrap();
        assert_eq!(second.get("workDuration"), Some(json!(600)));
    }
}
