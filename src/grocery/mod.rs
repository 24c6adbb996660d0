//! Grocery list core: categories, items, the bounded store and its blob
//! persistence.

mod category;
mod item;
mod persistence;
mod store;

pub use category::{Category, CategoryFilter};
pub use item::{GroceryItem, ItemId};
pub use persistence::{GroceryPersistence, PersistError, ITEMS_KEY};
pub use store::{AddError, ItemStore, ToggleError, CAPACITY};
