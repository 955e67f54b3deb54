//! Model-View-Intent primitives shared by the demo parents.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ child render
//!     ↑                                              │
//!     └──────────────── next frame ──────────────────┘
//! ```
//!
//! - **State**: the parent's own data (counter, toggle, slider level)
//! - **Intent**: a button press or slider movement
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! A parent compares the reduced state with the previous one; only a real
//! change triggers a child render.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
