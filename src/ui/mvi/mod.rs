//! Model-View-Intent primitives for the screens.
//!
//! ```text
//! ListIntent ──→ ListReducer ──→ ListScreenState ──→ ItemStore::view
//!     ↑                                                  │
//!     └──────────────────────────────────────────────────┘
//! ```
//!
//! Reducers only touch presentation state. Changes to the grocery list itself
//! go through `ItemStore`, and their outcome comes back as an intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
