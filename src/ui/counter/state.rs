use crate::ui::mvi::UiState;
use serde::Serialize;

/// Two independent pieces of state; neither intent touches the other.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CounterState {
    pub count: u64,
    pub toggled: bool,
}

impl UiState for CounterState {}
