//! Durable key-value storage collaborator.
//!
//! The cart persists its snapshot as a single opaque string under a fixed
//! namespaced key. The [`Storage`] trait is the seam: the store only ever
//! calls `get` once (at load) and `set` once per mutation.
//!
//! Implementations:
//! - [`MemoryStorage`] - process-local map, used in tests and as a
//!   no-durability fallback
//! - [`FileStorage`] - one file per key under a directory, with atomic
//!   tmp-file + rename writes for crash safety

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

/// Fixed namespaced key under which the cart blob is persisted.
pub const CART_STORAGE_KEY: &str = "@GoMarket:cart";

/// Errors from the durable storage collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure (read, write, or rename).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure (quota, poisoned state, ...).
    #[error("{0}")]
    Backend(String),
}

/// Async key-value storage of opaque strings.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `None` if no value has ever been stored.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Durably store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage backend.
///
/// Not durable across process restarts; intended for tests and for running
/// without a writable data directory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `value` under `key`.
    ///
    /// Test helper for simulating a previously persisted cart.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("storage mutex poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("storage mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: one file per key under a base directory.
///
/// Writes go to a `.tmp` sibling first and are renamed into place, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file-backed store rooted at `dir`.
    ///
    /// The directory is created on first write, not here.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Map a storage key to a file path, replacing characters that are not
    /// filesystem-safe.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(key);
        let tmp_path = path.with_extension("tmp");
        tokio::fs::write(&tmp_path, value).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        tracing::debug!(key, path = %path.display(), "Persisted storage value");
        Ok(())
    }
}

/// Borrow the base directory (for diagnostics and tests).
impl AsRef<Path> for FileStorage {
    fn as_ref(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_get_absent() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get(CART_STORAGE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_storage_set_then_get() {
        let storage = MemoryStorage::new();
        storage.set(CART_STORAGE_KEY, "[]").await.unwrap();
        assert_eq!(
            storage.get(CART_STORAGE_KEY).await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_memory_storage_set_replaces() {
        let storage = MemoryStorage::with_entry(CART_STORAGE_KEY, "old");
        storage.set(CART_STORAGE_KEY, "new").await.unwrap();
        assert_eq!(
            storage.get(CART_STORAGE_KEY).await.unwrap().as_deref(),
            Some("new")
        );
    }

    #[tokio::test]
    async fn test_file_storage_get_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get(CART_STORAGE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set(CART_STORAGE_KEY, "[{\"id\":\"a\"}]").await.unwrap();
        assert_eq!(
            storage.get(CART_STORAGE_KEY).await.unwrap().as_deref(),
            Some("[{\"id\":\"a\"}]")
        );
    }

    #[tokio::test]
    async fn test_file_storage_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set(CART_STORAGE_KEY, "[]").await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].ends_with(".json"), "unexpected file: {}", names[0]);
    }

    #[tokio::test]
    async fn test_file_storage_sanitizes_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set("@Weird/Key:1", "x").await.unwrap();
        assert_eq!(storage.get("@Weird/Key:1").await.unwrap().as_deref(), Some("x"));
    }
}
