//! Persistent key/value storage backing the session store
//!
//! The interface mirrors browser local storage: string keys, string values,
//! and removal of absent keys is not an error.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;
use tracing::warn;

use crate::{ClientConfig, CoreError, CoreResult};

/// Key/value persistence for session state
pub trait SessionStorage: Send + Sync {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> CoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Remove `key`
    fn remove_item(&self, key: &str) -> CoreResult<()>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for Arc<S> {
    fn get_item(&self, key: &str) -> CoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> CoreResult<()> {
        (**self).remove_item(key)
    }
}

/// In-process storage. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_items<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> CoreResult<T> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| CoreError::storage_error("memory storage lock poisoned"))?;
        Ok(f(&mut items))
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> CoreResult<Option<String>> {
        self.with_items(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()> {
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> CoreResult<()> {
        self.with_items(|items| {
            items.remove(key);
        })
    }
}

/// Storage persisted as a JSON object in a single file
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serialises read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileStorage {
    /// File name used inside the storage directory
    pub const FILE_NAME: &'static str = "session.json";

    /// Store session state in `dir/session.json`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(Self::FILE_NAME),
            lock: Mutex::new(()),
        }
    }

    /// Store session state in the platform data directory
    pub fn in_data_dir() -> Self {
        Self::new(default_storage_dir())
    }

    /// Store session state in the configured `storage_dir`
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.storage_dir)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> CoreResult<HashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    // Readers see either the old file or the new one, never a partial write
    fn write_all(&self, items: &HashMap<String, String>) -> CoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let contents = serde_json::to_string_pretty(items)?;
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(contents.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| CoreError::from(e.error))?;
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut HashMap<String, String>)) -> CoreResult<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| CoreError::storage_error("file storage lock poisoned"))?;
        let mut items = match self.read_all() {
            Ok(items) => items,
            Err(CoreError::Serialization { message }) => {
                warn!(
                    path = %self.path.display(),
                    error = %message,
                    "Discarding unreadable session file"
                );
                HashMap::new()
            }
            Err(e) => return Err(e),
        };
        f(&mut items);
        self.write_all(&items)
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()> {
        self.modify(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> CoreResult<()> {
        self.modify(|items| {
            items.remove(key);
        })
    }
}

/// Default directory for persisted session state
pub fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fancyspaces")
}
