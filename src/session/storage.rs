// SPDX-License-Identifier: MPL-2.0
//! String key/value stores backing the session.

use crate::app::paths;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "storage.cbor";

/// Minimal persistent string map, shaped like browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store persisted as a CBOR map, written through on every mutation.
///
/// When no data directory can be resolved the store still works, but only
/// in memory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in the default data directory.
    ///
    /// Returns a tuple of (store, optional_warning). An unreadable file
    /// yields an empty store and an i18n key for a notification.
    pub fn open() -> (Self, Option<String>) {
        Self::open_in(None)
    }

    /// Opens the store in a custom directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STORAGE_FILE);
            path
        }) else {
            tracing::warn!("no data directory available; session will not persist");
            return (Self::in_memory(), None);
        };

        match Self::open_at(&path) {
            Ok(store) => (store, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "discarding unreadable session storage");
                (
                    Self {
                        path: Some(path),
                        entries: BTreeMap::new(),
                    },
                    Some("notification-session-load-error".to_string()),
                )
            }
        }
    }

    /// Opens the store at an explicit file path. A missing file is an empty store.
    pub fn open_at(path: &Path) -> Result<Self> {
        let entries = if path.exists() {
            let reader = BufReader::new(fs::File::open(path)?);
            ciborium::from_reader(reader)?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path: Some(path.to_path_buf()),
            entries,
        })
    }

    fn in_memory() -> Self {
        Self {
            path: None,
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(path)?);
        ciborium::into_writer(&self.entries, writer)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
