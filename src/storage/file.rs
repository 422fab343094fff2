//! Directory-backed CriteriaStore, one JSON file per key

use crate::core::error::StorageError;
use crate::storage::CriteriaStore;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Criteria store keeping each key in `<dir>/<key>.json`
///
/// Writes go through a temporary file in the same directory that is then
/// renamed over the old one, so a crash mid-write never leaves a truncated
/// value behind.
#[derive(Debug, Clone)]
pub struct FileCriteriaStore {
    dir: PathBuf,
}

impl FileCriteriaStore {
    /// Use `dir` for storage; it is created on first save if missing
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn io_error(key: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl CriteriaStore for FileCriteriaStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(key, e))?;

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|e| Self::io_error(key, e))?;
        temp.write_all(value.as_bytes()).map_err(|e| Self::io_error(key, e))?;
        temp.as_file().sync_all().map_err(|e| Self::io_error(key, e))?;
        temp.persist(&path).map_err(|e| Self::io_error(key, e.error))?;

        Ok(())
    }
}
