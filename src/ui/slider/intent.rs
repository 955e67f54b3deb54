use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderIntent {
    /// Set an absolute value. Out-of-range values are clamped.
    Set(i64),
    /// Move by a signed delta, saturating at the ends.
    Step(i64),
    /// Jump to 0.
    Min,
    /// Jump to 500.
    Max,
}

impl Intent for SliderIntent {}
