//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use grocerylist::grocery::{GroceryPersistence, ItemStore};
use grocerylist::settings::{FileSettings, MemorySettings};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn memory_store() -> ItemStore<MemorySettings> {
    ItemStore::open(GroceryPersistence::new(MemorySettings::new()))
}

/// A store backed by a settings file inside a fresh temp dir.
pub fn file_store() -> (TempDir, PathBuf, ItemStore<FileSettings>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.toml");
    let store = ItemStore::open(GroceryPersistence::new(FileSettings::new(&path)));
    (temp_dir, path, store)
}

pub fn reopen(path: &PathBuf) -> ItemStore<FileSettings> {
    ItemStore::open(GroceryPersistence::new(FileSettings::new(path)))
}

/// A memory-backed store plus a shared handle on its backend.
pub fn observed_store() -> (ItemStore<MemorySettings>, MemorySettings) {
    let settings = MemorySettings::new();
    let store = ItemStore::open(GroceryPersistence::new(settings.clone()));
    (store, settings)
}
