//! Satisfaction slider state (range input, 0..=500).

mod intent;
mod reducer;
mod state;

pub use intent::SliderIntent;
pub use reducer::SliderReducer;
pub use state::SliderState;
