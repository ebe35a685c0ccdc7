//! File-backed store: one JSON document per key under the data directory.

use std::path::PathBuf;

use super::{data_dir, Store};
use crate::error::StorageError;

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store at the default data directory
    /// (`~/.config/tempo/`, see [`data_dir`]).
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open the store at an explicit directory (tests, custom layouts).
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), value).map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path());
        assert!(store.get("settings").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path());
        store.set("settings", r#"{"notifications":true}"#).unwrap();
        assert_eq!(
            store.get("settings").unwrap().as_deref(),
            Some(r#"{"notifications":true}"#)
        );
    }

    #[test]
    fn set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path());
        store.set("sessions", "[]").unwrap();
        store.set("sessions", r#"[{"duration":60}]"#).unwrap();
        assert_eq!(
            store.get("sessions").unwrap().as_deref(),
            Some(r#"[{"duration":60}]"#)
        );
    }
}
