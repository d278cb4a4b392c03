//! Base trait for screen state.

/// Marker trait for screen state objects.
///
/// States are cloned rather than mutated in place and carry everything a
/// screen needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
