use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StorageError;

/// Byte-level access to the single persisted entry.
///
/// `read` returns `Ok(None)` when the entry has never been written; that
/// is the normal first-run case, not an error. Implementations replace
/// the entry wholesale on `write`.
pub trait StateStore {
    fn read(&self) -> Result<Option<Vec<u8>>, StorageError>;
    fn write(&self, bytes: &[u8]) -> Result<(), StorageError>;
}

/// One JSON file on disk.
///
/// Writes go through a temp file in the same directory followed by a
/// rename, so a crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform data directory, e.g.
    /// `~/.local/share/spellbook/spells.json` on Linux.
    pub fn at_default_path() -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(base.join("spellbook").join("spells.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn read(&self) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, bytes: &[u8]) -> Result<(), StorageError> {
        let dir = self.path.parent().ok_or_else(|| {
            StorageError::Unavailable(format!("no parent directory for {}", self.path.display()))
        })?;
        fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(bytes)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// In-memory store, for tests and for running without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entry: Mutex<Option<Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn read(&self) -> Result<Option<Vec<u8>>, StorageError> {
        let entry = self
            .entry
            .lock()
            .map_err(|_| StorageError::Unavailable("state mutex poisoned".to_string()))?;
        Ok(entry.clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<(), StorageError> {
        let mut entry = self
            .entry
            .lock()
            .map_err(|_| StorageError::Unavailable("state mutex poisoned".to_string()))?;
        *entry = Some(bytes.to_vec());
        Ok(())
    }
}
