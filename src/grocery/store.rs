//! The authoritative grocery list.
//!
//! Every successful mutation is followed by a save through
//! [`GroceryPersistence`] before the call returns. Reads never touch storage.

use std::collections::HashSet;

use thiserror::Error;

use super::category::{Category, CategoryFilter};
use super::item::{GroceryItem, ItemId};
use super::persistence::GroceryPersistence;
use crate::settings::SettingsStore;

/// Maximum number of items the list can hold.
pub const CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddError {
    #[error("Item name is empty")]
    EmptyName,

    #[error("Grocery list is full ({capacity} items)")]
    CapacityExceeded { capacity: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("Grocery item '{id}' not found")]
    NotFound { id: ItemId },
}

/// Bounded, persistent grocery list.
#[derive(Debug)]
pub struct ItemStore<S> {
    items: Vec<GroceryItem>,
    persistence: GroceryPersistence<S>,
}

impl<S: SettingsStore> ItemStore<S> {
    /// Open the list, loading whatever the backend holds.
    pub fn open(persistence: GroceryPersistence<S>) -> Self {
        let items = persistence.load();
        tracing::debug!(count = items.len(), "grocery list loaded");
        Self { items, persistence }
    }

    /// Add a new unchecked item.
    ///
    /// The name is trimmed first; a blank name is rejected before the
    /// capacity check.
    pub fn add(&mut self, raw_name: &str, category: Category) -> Result<GroceryItem, AddError> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(AddError::EmptyName);
        }
        if self.is_full() {
            return Err(AddError::CapacityExceeded { capacity: CAPACITY });
        }

        let item = GroceryItem::new(name.to_string(), category);
        self.items.push(item.clone());
        tracing::debug!(id = %item.id(), category = %category, "grocery item added");
        self.persist();
        Ok(item)
    }

    /// Flip the checked flag of an item.
    pub fn toggle(&mut self, id: ItemId) -> Result<(), ToggleError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(ToggleError::NotFound { id })?;
        item.toggle();
        tracing::debug!(%id, checked = item.is_checked(), "grocery item toggled");
        self.persist();
        Ok(())
    }

    /// Remove every item whose id is listed. Unknown ids are ignored.
    ///
    /// Returns how many items were removed. Nothing is written when nothing
    /// matched, since the stored blob would be identical.
    pub fn delete(&mut self, ids: &[ItemId]) -> usize {
        let doomed: HashSet<ItemId> = ids.iter().copied().collect();
        let before = self.items.len();
        self.items.retain(|item| !doomed.contains(&item.id()));
        let removed = before - self.items.len();

        if removed > 0 {
            tracing::debug!(removed, "grocery items deleted");
            self.persist();
        }
        removed
    }

    /// Remove items by their position in `view(filter)`.
    ///
    /// Positions are resolved against the display order, not insertion
    /// order. Out-of-range positions are ignored.
    pub fn delete_at(&mut self, filter: CategoryFilter, positions: &[usize]) -> usize {
        let ids: Vec<ItemId> = {
            let view = self.view(filter);
            positions
                .iter()
                .filter_map(|&pos| view.get(pos).map(|item| item.id()))
                .collect()
        };
        self.delete(&ids)
    }

    /// The list in display order.
    ///
    /// Unchecked items come first, then checked ones; within each group items
    /// are ordered by category label. The sort is stable, so items that tie
    /// keep their insertion order.
    pub fn view(&self, filter: CategoryFilter) -> Vec<&GroceryItem> {
        let mut view: Vec<&GroceryItem> = self
            .items
            .iter()
            .filter(|item| filter.matches(item.category()))
            .collect();
        view.sort_by(|a, b| {
            a.is_checked()
                .cmp(&b.is_checked())
                .then_with(|| a.category().label().cmp(b.category().label()))
        });
        view
    }

    pub fn get(&self, id: ItemId) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= CAPACITY
    }

    /// How many more items fit.
    pub fn remaining(&self) -> usize {
        CAPACITY.saturating_sub(self.items.len())
    }

    pub fn count(&self, filter: CategoryFilter) -> usize {
        self.items
            .iter()
            .filter(|item| filter.matches(item.category()))
            .count()
    }

    fn persist(&mut self) {
        self.persistence.save(&self.items);
    }
}
