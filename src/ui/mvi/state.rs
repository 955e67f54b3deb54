//! Marker trait for demo state.

/// Demo state. `PartialEq` is what lets a parent tell a real change
/// from a no-op intent (e.g. pressing End with the slider already at 500).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
