//! Blob persistence for the grocery list.
//!
//! The whole collection is stored as one JSON array under a single settings
//! key, in insertion order. Failures never escape this module: a failed save
//! leaves the previous blob in place, a failed load yields an empty list.

use std::collections::HashSet;

use thiserror::Error;

use super::item::GroceryItem;
use super::store::CAPACITY;
use crate::settings::{SettingsError, SettingsStore};

/// Settings key holding the encoded list.
pub const ITEMS_KEY: &str = "groceryItems";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to encode grocery items: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] SettingsError),
}

/// Reads and writes the grocery list blob through a settings backend.
#[derive(Debug)]
pub struct GroceryPersistence<S> {
    settings: S,
}

impl<S: SettingsStore> GroceryPersistence<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    /// Save the full collection. Failures are logged and swallowed.
    pub fn save(&mut self, items: &[GroceryItem]) {
        if let Err(e) = self.try_save(items) {
            tracing::warn!(error = %e, count = items.len(), "grocery list not saved");
        }
    }

    /// Save the full collection, reporting failure.
    ///
    /// Encoding happens before the store is touched, so an encode failure
    /// never reaches the backend.
    pub fn try_save(&mut self, items: &[GroceryItem]) -> Result<(), PersistError> {
        let blob = serde_json::to_string(items)?;
        self.settings.set(ITEMS_KEY, &blob)?;
        tracing::debug!(count = items.len(), bytes = blob.len(), "grocery list saved");
        Ok(())
    }

    /// Load the stored collection, degrading to empty on any failure.
    pub fn load(&self) -> Vec<GroceryItem> {
        let blob = match self.settings.get(ITEMS_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "grocery list unreadable, starting empty");
                return Vec::new();
            }
        };
        decode(&blob)
    }
}

/// Decode a stored blob.
///
/// A blob that is not a JSON array decodes to an empty list. Inside the
/// array each record stands alone: records that fail to decode (including an
/// unknown category), have a blank name, or repeat an earlier id are dropped.
/// Records past the capacity are discarded.
fn decode(blob: &str) -> Vec<GroceryItem> {
    if blob.trim().is_empty() {
        return Vec::new();
    }

    let records: Vec<serde_json::Value> = match serde_json::from_str(blob) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "grocery list blob corrupt, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(records.len().min(CAPACITY));
    for (index, record) in records.into_iter().enumerate() {
        let item: GroceryItem = match serde_json::from_value(record) {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!(index, error = %e, "dropping undecodable grocery item");
                continue;
            }
        };
        if item.name().trim().is_empty() {
            tracing::warn!(index, "dropping grocery item with blank name");
            continue;
        }
        if !seen.insert(item.id()) {
            tracing::warn!(index, id = %item.id(), "dropping grocery item with duplicate id");
            continue;
        }
        if items.len() == CAPACITY {
            tracing::warn!(index, capacity = CAPACITY, "grocery list over capacity, truncating");
            break;
        }
        items.push(item);
    }
    items
}
