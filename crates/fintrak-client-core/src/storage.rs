//! Durable key-value storage the session is persisted to
//!
//! The surface mirrors browser local storage: string keys to string values,
//! with reads that return nothing for absent keys.

use std::{
    collections::BTreeMap,
    fmt::Debug,
    fs,
    io::{self, ErrorKind},
    path::PathBuf,
    sync::{Arc, Mutex},
    time::SystemTime,
};

use tracing::{info, instrument, warn};

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("failed to access storage file {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("storage file {path:?} does not contain a valid key-value map: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("storage lock poisoned")]
    Poisoned,
}

pub trait KeyValueStorage: Debug + Send {
    /// Returns `None` if nothing is stored under the key
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a key that is not present is not an error
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;

    /// Returns `true` once for each batch of changes made through some other
    /// handle since this handle last wrote or checked. Backends that cannot
    /// be shared never report changes
    fn take_external_change(&mut self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    items: BTreeMap<String, String>,
    /// Bumped on every write
    version: u64,
}

/// In process storage. Clones share the same underlying map, which is how two
/// independent session stores can observe each other's writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryInner>>,
    last_seen_version: u64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.items.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryInner>, StorageError> {
        self.inner.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let version = {
            let mut inner = self.lock()?;
            inner.items.insert(key.to_string(), value.to_string());
            inner.version += 1;
            inner.version
        };
        self.last_seen_version = version;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let version = {
            let mut inner = self.lock()?;
            if inner.items.remove(key).is_some() {
                inner.version += 1;
            }
            inner.version
        };
        self.last_seen_version = version;
        Ok(())
    }

    fn take_external_change(&mut self) -> bool {
        let Ok(version) = self.lock().map(|inner| inner.version) else {
            return false;
        };
        let has_changed = version != self.last_seen_version;
        self.last_seen_version = version;
        has_changed
    }
}

/// Stores all items as one JSON object in a single file. A missing file is the
/// same as empty storage
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    /// Modification time of the file the last time this instance read or
    /// wrote it
    last_seen_modified: Option<SystemTime>,
}

impl FileStorage {
    #[instrument]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            last_seen_modified: None,
        }
    }

    /// Returns `true` if the file was modified (or created or deleted) by
    /// someone else since this instance last touched it. A host can poll this
    /// to know when to reload the session
    pub fn has_changed_since_last_access(&self) -> bool {
        self.modified_time() != self.last_seen_modified
    }

    /// Reads through the trait only take `&self` so they cannot record that the
    /// file was seen. Call this after acting on a change
    pub fn mark_seen(&mut self) {
        self.last_seen_modified = self.modified_time();
    }

    fn modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    fn io_err(&self) -> impl FnOnce(io::Error) -> StorageError + '_ {
        |source| StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_err()(e)),
        };
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Reads the map for modification. A corrupt file is discarded because
    /// there is nothing in it we could preserve. The flag is `true` if that
    /// happened, the file then needs rewriting even if nothing else changes
    fn read_map_for_update(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
        match self.read_map() {
            Ok(map) => Ok((map, false)),
            Err(e @ StorageError::Corrupt { .. }) => {
                warn!(?e, "discarding corrupt storage file");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    /// Writes to a temporary file first then renames it over the target so a
    /// reader never sees a half written file
    fn write_map(&mut self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(self.io_err())?;
        }
        let contents = serde_json::to_string_pretty(map).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);
        fs::write(&tmp_path, contents).map_err(self.io_err())?;
        fs::rename(&tmp_path, &self.path).map_err(self.io_err())?;
        self.last_seen_modified = self.modified_time();
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    #[instrument(skip(value))]
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let (mut map, _) = self.read_map_for_update()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    #[instrument]
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let (mut map, was_corrupt) = self.read_map_for_update()?;
        if map.remove(key).is_none() && !was_corrupt {
            // Nothing to do but still count this as having seen the file
            self.last_seen_modified = self.modified_time();
            return Ok(());
        }
        if map.is_empty() {
            info!("last item removed, deleting storage file");
            match fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(self.io_err()(e)),
            }
            self.last_seen_modified = None;
            Ok(())
        } else {
            self.write_map(&map)
        }
    }

    fn take_external_change(&mut self) -> bool {
        let has_changed = self.has_changed_since_last_access();
        self.mark_seen();
        has_changed
    }
}
