//! Counter/toggle parent state.
//!
//! - `state.rs` - counter and toggle flag
//! - `intent.rs` - the two buttons (Increment, Toggle)
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
