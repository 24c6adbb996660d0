use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// Opaque, immutable identifier of a grocery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A single entry on the grocery list.
///
/// Fields are read-only outside the crate; `ItemStore` is the only writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    id: ItemId,
    name: String,
    #[serde(default)]
    is_checked: bool,
    #[serde(default)]
    category: Category,
}

impl GroceryItem {
    /// Build an unchecked item from an already-trimmed, non-empty name.
    pub(crate) fn new(name: String, category: Category) -> Self {
        Self {
            id: ItemId::new(),
            name,
            is_checked: false,
            category,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    pub(crate) fn toggle(&mut self) {
        self.is_checked = !self.is_checked;
    }
}
