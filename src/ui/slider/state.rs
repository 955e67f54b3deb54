use crate::demo::satisfaction::SatisfactionLevel;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SliderState {
    pub level: SatisfactionLevel,
}

impl UiState for SliderState {}
