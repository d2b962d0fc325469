//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (like, follow, tab switches)
/// - System events (fetch responses)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
