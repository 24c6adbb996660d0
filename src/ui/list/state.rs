use crate::grocery::{Category, CategoryFilter};
use crate::ui::mvi::UiState;

/// Presentation state of the grocery list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListScreenState {
    /// Show every item instead of the selected category.
    pub showing_all: bool,
    pub selected_category: Category,
    /// Text typed into the "add item" field.
    pub draft: String,
    /// Set when an add was refused because the list is full.
    pub limit_notice: bool,
}

impl Default for ListScreenState {
    fn default() -> Self {
        Self {
            showing_all: false,
            selected_category: Category::Other,
            draft: String::new(),
            limit_notice: false,
        }
    }
}

impl UiState for ListScreenState {}

impl ListScreenState {
    /// The filter to pass to `ItemStore::view`.
    pub fn filter(&self) -> CategoryFilter {
        if self.showing_all {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(self.selected_category)
        }
    }

    /// Label of the button that switches display mode.
    pub fn mode_button_label(&self) -> &'static str {
        if self.showing_all {
            "Filter by Category"
        } else {
            "See All Items"
        }
    }
}
