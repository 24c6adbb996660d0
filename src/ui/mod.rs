//! Presentation-side state. Nothing here mutates the grocery list.

pub mod list;
pub mod mvi;
