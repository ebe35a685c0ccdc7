//! Persistence contract and backends.
//!
//! Storage is an opaque key-value collaborator: `get` a serialized value by
//! key, `set` one back. Both keys used by the core carry JSON documents whose
//! field names and units are part of the external contract:
//!
//! - `settings` -> `{"focusDuration", "breakDuration", "notifications"}`
//!   (durations in seconds)
//! - `sessions` -> ordered array of `{"timestamp", "type", "duration"}`
//!   (epoch-millis timestamps, durations in seconds)
//!
//! A backend is allowed to be absent ([`NullStore`]): the core then runs on
//! in-memory defaults and nothing survives a restart. Storage failures are
//! never surfaced to the user; callers log and keep going.

mod file;
mod memory;
mod persist;

pub use file::FileStore;
pub use memory::{MemoryStore, NullStore};
pub use persist::Persister;

use std::path::PathBuf;

use crate::error::StorageError;

/// Key holding the serialized [`crate::Settings`].
pub const SETTINGS_KEY: &str = "settings";
/// Key holding the serialized session history.
pub const SESSIONS_KEY: &str = "sessions";

/// Opaque key-value persistence collaborator.
pub trait Store: Send + Sync {
    /// Fetch the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Returns `~/.config/tempo[-dev]/` based on TEMPO_ENV.
///
/// Set TEMPO_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TEMPO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tempo-dev")
    } else {
        base_dir.join("tempo")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDirUnavailable {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
