use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// Increment button: replace the counter with counter + 1.
    Increment,
    /// Toggle button: negate the flag.
    Toggle,
}

impl Intent for CounterIntent {}
