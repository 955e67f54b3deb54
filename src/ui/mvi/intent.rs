//! Marker trait for intents.

/// An input event a demo parent reacts to: a button press or a slider move.
pub trait Intent: Send + 'static {}
