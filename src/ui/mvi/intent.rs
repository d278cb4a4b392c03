//! Base trait for screen intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User input (typing into a filter, choosing stars)
/// - Outcomes of backend calls (trips loaded, booking confirmed)
///
/// Intents are processed by reducers to produce new screen states.
pub trait Intent: Send + 'static {}
