//! Base trait for screen state.

/// Marker trait for state objects.
///
/// States are cloned to produce snapshots for rendering and compared to
/// detect whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
