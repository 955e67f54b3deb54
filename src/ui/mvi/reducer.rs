//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place demo state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure: no logging, no rendering. Callers decide what a change means.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
