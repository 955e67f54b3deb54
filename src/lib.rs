//! Memoization and re-render demos in the terminal.
//!
//! Three independent demos share one idea: a child renders whenever its
//! parent re-renders, unless a guard decides the new props are equal to the
//! previous ones.
//!
//! - [`demo`] - components, the render guard, the render log
//! - [`ui`] - state reducers and the ratatui front end
//! - [`simulate`] - headless replay of scripted input
//! - [`config`], [`logging`], [`args`] - ambient plumbing

pub mod args;
pub mod config;
pub mod demo;
pub mod logging;
pub mod shutdown;
pub mod simulate;
pub mod ui;
