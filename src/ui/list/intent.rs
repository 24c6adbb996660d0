use crate::grocery::{AddError, Category, GroceryItem};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    ToggleShowAll,
    SelectCategory(Category),
    EditDraft(String),
    /// The draft was added to the list.
    ItemAdded,
    /// The store refused the draft because the list is full.
    CapacityReached,
    DismissNotice,
}

impl Intent for ListIntent {}

impl ListIntent {
    /// Map the outcome of `ItemStore::add` to the intent the screen reacts to.
    ///
    /// A blank name changes nothing on screen, so it maps to `None`.
    pub fn from_add_result(result: &Result<GroceryItem, AddError>) -> Option<Self> {
        match result {
            Ok(_) => Some(Self::ItemAdded),
            Err(AddError::CapacityExceeded { .. }) => Some(Self::CapacityReached),
            Err(AddError::EmptyName) => None,
        }
    }
}
