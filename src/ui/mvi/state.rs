//! Screen state.

/// Marker trait for screen state.
///
/// Cheap to clone, comparable for change detection, and self-contained
/// enough to pick the `view` filter and render without other input.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
