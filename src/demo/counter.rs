//! Counter/toggle demo.
//!
//! The parent holds a counter and an unrelated toggle flag. Its child
//! displays twice the counter and recomputes on every parent render,
//! including renders caused by the toggle.

use serde::Serialize;

use crate::demo::render_log::{RenderKind, RenderLog};
use crate::demo::Component;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;

/// The "expensive" derived value. Deliberately trivial.
pub fn compute_double(count: u64) -> u64 {
    count.saturating_mul(2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComputedValue(pub u64);

/// Child that recomputes on every render call.
pub struct ExpensiveComponent {
    log: RenderLog,
}

impl ExpensiveComponent {
    pub fn new(log: RenderLog) -> Self {
        Self { log }
    }
}

impl Component for ExpensiveComponent {
    type Props = u64;
    type Output = ComputedValue;

    fn render(&mut self, count: &u64) -> ComputedValue {
        let value = compute_double(*count);
        self.log.record(
            RenderKind::ExpensiveComputation,
            format!("count={count} value={value}"),
        );
        ComputedValue(value)
    }
}

pub struct CounterDemo {
    state: CounterState,
    child: ExpensiveComponent,
    output: ComputedValue,
}

impl CounterDemo {
    /// Mount the demo. Mounting renders the child once.
    pub fn new(log: RenderLog) -> Self {
        let state = CounterState::default();
        let mut child = ExpensiveComponent::new(log);
        let output = child.render(&state.count);
        Self {
            state,
            child,
            output,
        }
    }

    /// Apply an intent and re-render when state changed.
    ///
    /// Returns true if a render happened.
    pub fn dispatch(&mut self, intent: CounterIntent) -> bool {
        let next = CounterReducer::reduce(self.state.clone(), intent);
        if next == self.state {
            return false;
        }
        self.state = next;
        tracing::debug!(count = self.state.count, toggled = self.state.toggled, "counter state changed");
        self.output = self.child.render(&self.state.count);
        true
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    pub fn computed(&self) -> ComputedValue {
        self.output
    }
}
