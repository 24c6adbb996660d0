//! Intents: what the screen is asked to react to.

/// Marker trait for intent objects.
///
/// Covers both user actions (picking a category, typing a draft) and
/// outcomes reported back by `ItemStore` (an add that hit the capacity).
pub trait Intent: Send + 'static {}
