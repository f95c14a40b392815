//! Persisted credential storage
//!
//! A thin key/value abstraction over wherever the host keeps session
//! material (browser localStorage, a config-dir file). The store is
//! deliberately infallible at the call site, like the storage API it
//! mirrors; persistence failures are logged, not propagated.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::warn;

/// Fixed storage keys; all of them are cleared together on logout or 401
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER: &str = "user";
    pub const REFRESH_TOKEN: &str = "refreshToken";
    pub const ROLES: &str = "roles";
    pub const PERMISSIONS: &str = "permissions";

    /// Every key that makes up a session
    pub const SESSION: [&str; 5] = [TOKEN, USER, REFRESH_TOKEN, ROLES, PERMISSIONS];
}

/// String key/value persistence for session material
pub trait CredentialStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str);

    /// Delete a value; deleting an absent key is a no-op
    fn remove(&self, key: &str);

    /// Remove every session key
    fn clear_session(&self) {
        for key in keys::SESSION {
            self.remove(key);
        }
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        read_lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        write_lock(&self.values).insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        write_lock(&self.values).remove(key);
    }
}

/// File-backed store: one JSON object per session file
///
/// Loads the file once at open; every mutation rewrites it. Good enough
/// for the handful of keys a session holds.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open a store at `path`, creating parent directories as needed.
    /// A missing file starts an empty session; an unreadable one fails.
    pub fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!("Discarding corrupt session file {}: {}", path.display(), e);
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    fn persist(&self, values: &HashMap<String, String>) {
        let serialized = match serde_json::to_string_pretty(values) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!("Failed to serialize session file: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, serialized) {
            warn!("Failed to write session file {}: {}", self.path.display(), e);
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        read_lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = write_lock(&self.values);
        values.insert(key.to_string(), value.to_string());
        self.persist(&values);
    }

    fn remove(&self, key: &str) {
        let mut values = write_lock(&self.values);
        if values.remove(key).is_some() {
            self.persist(&values);
        }
    }
}

// Lock poisoning only happens after a panic in another thread holding the
// guard; the map stays usable, so recover the inner value.
fn read_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.get(keys::TOKEN), None);

        store.set(keys::TOKEN, "abc123");
        assert_eq!(store.get(keys::TOKEN), Some("abc123".to_string()));

        store.remove(keys::TOKEN);
        assert_eq!(store.get(keys::TOKEN), None);
    }

    #[test]
    fn test_clear_session_removes_every_key() {
        let store = MemoryCredentialStore::new();
        for key in keys::SESSION {
            store.set(key, "value");
        }
        store.set("unrelated", "stays");

        store.clear_session();

        for key in keys::SESSION {
            assert_eq!(store.get(key), None, "{key} should be cleared");
        }
        assert_eq!(store.get("unrelated"), Some("stays".to_string()));
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set(keys::TOKEN, "persisted");
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(keys::TOKEN), Some("persisted".to_string()));
    }

    #[test]
    fn test_file_store_tolerates_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get(keys::TOKEN), None);
    }
}
