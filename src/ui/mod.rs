pub mod app;
pub mod chrome;
pub mod counter;
pub mod events;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod slider;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
