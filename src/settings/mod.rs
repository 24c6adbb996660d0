//! Key-value settings storage.
//!
//! The grocery list persists itself as a single blob under one key. Anything
//! that can read and write string values by key can back it: an in-memory map
//! for tests, or a TOML file on disk for the CLI.

mod file;
mod memory;

use std::path::PathBuf;
use thiserror::Error;

pub use file::FileSettings;
pub use memory::MemorySettings;

/// Errors raised by a settings backend.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write settings file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock settings file '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings store is read-only")]
    ReadOnly,
}

/// String-valued key-value store.
pub trait SettingsStore {
    /// Read the value stored under `key`. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Replace the value stored under `key`.
    ///
    /// Implementations must either store the whole value or leave the
    /// previous one in place.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}
