//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (entering a screen, pressing back) or
/// results coming back from a service call.
pub trait Intent: Send + 'static {}
