//! The three demo component trees.
//!
//! Each demo is a parent that owns its state and renders one child:
//! - [`counter::CounterDemo`] renders an unmemoized [`counter::ExpensiveComponent`]
//! - [`face::FaceDemo`] renders a face either directly or through a [`memo::Memo`]
//!
//! Parents render their child on mount and again after every state change.
//! Whether the child actually re-renders is visible in the [`RenderLog`].

pub mod counter;
pub mod face;
pub mod memo;
pub mod render_log;
pub mod satisfaction;

pub use render_log::{RenderEvent, RenderKind, RenderLog};
pub use satisfaction::{classify, Satisfaction, SatisfactionLevel};

/// A component maps props to output. Rendering may have side effects
/// (render-log entries), which is exactly what the demos observe.
pub trait Component {
    type Props;
    type Output;

    fn render(&mut self, props: &Self::Props) -> Self::Output;
}
