//! Headless replay of demo input.
//!
//! Mounts a demo, feeds it a scripted sequence of button presses or slider
//! values, and reports the render log. Each input produces at most one
//! render event, so the log is sized to hold the whole run.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::demo::counter::CounterDemo;
use crate::demo::face::{FaceDemo, FaceVariant};
use crate::demo::render_log::{RenderEvent, RenderKind, RenderLog};
use crate::demo::satisfaction::{Satisfaction, SatisfactionLevel};
use crate::ui::counter::CounterIntent;
use crate::ui::slider::SliderIntent;

#[derive(Debug, Error)]
pub enum SimulateError {
    #[error("Unknown counter action '{0}' (expected inc, increment or toggle)")]
    InvalidAction(String),

    #[error("Invalid slider level '{0}' (expected an integer)")]
    InvalidLevel(String),

    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Parse `inc`/`increment`/`toggle` tokens. Blank tokens are ignored.
pub fn parse_actions(tokens: &[String]) -> Result<Vec<CounterIntent>, SimulateError> {
    tokens
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(|token| match token.to_ascii_lowercase().as_str() {
            "inc" | "increment" => Ok(CounterIntent::Increment),
            "toggle" => Ok(CounterIntent::Toggle),
            _ => Err(SimulateError::InvalidAction(token.to_string())),
        })
        .collect()
}

/// Parse integer slider values. Blank tokens are ignored; range is not
/// checked here because the slider clamps.
pub fn parse_levels(tokens: &[String]) -> Result<Vec<i64>, SimulateError> {
    tokens
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| SimulateError::InvalidLevel(token.to_string()))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "demo", rename_all = "kebab-case")]
pub enum FinalState {
    Counter {
        count: u64,
        toggled: bool,
        computed: u64,
    },
    Face {
        variant: FaceVariant,
        level: i64,
        class: Satisfaction,
        rendered_level: i64,
        /// Slider changes that reused the previous output.
        skipped: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub events: Vec<RenderEvent>,
    /// Actual renders, the mount included.
    pub renders: u64,
    #[serde(rename = "final")]
    pub final_state: FinalState,
}

impl SimulationReport {
    pub fn to_json(&self) -> Result<String, SimulateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{}  [{}]", event.message, event.detail)?;
        }
        writeln!(f, "renders: {}", self.renders)?;
        match &self.final_state {
            FinalState::Counter {
                count,
                toggled,
                computed,
            } => writeln!(
                f,
                "final: count={count} toggled={toggled} computed={computed}"
            ),
            FinalState::Face {
                variant,
                level,
                class,
                rendered_level,
                skipped,
            } => writeln!(
                f,
                "final: variant={variant} level={level} class={class} rendered_level={rendered_level} skipped={skipped}"
            ),
        }
    }
}

pub fn simulate_counter(actions: &[CounterIntent]) -> SimulationReport {
    let log = RenderLog::new(actions.len() + 1);
    let mut demo = CounterDemo::new(log.clone());
    for &intent in actions {
        demo.dispatch(intent);
    }

    let state = demo.state();
    SimulationReport {
        events: log.events(),
        renders: log.count(RenderKind::ExpensiveComputation),
        final_state: FinalState::Counter {
            count: state.count,
            toggled: state.toggled,
            computed: demo.computed().0,
        },
    }
}

pub fn simulate_face(
    variant: FaceVariant,
    initial: SatisfactionLevel,
    levels: &[i64],
) -> SimulationReport {
    let log = RenderLog::new(levels.len() + 1);
    let mut demo = FaceDemo::new(variant, initial, log.clone());
    for &level in levels {
        demo.dispatch(SliderIntent::Set(level));
    }

    let view = demo.view();
    SimulationReport {
        events: log.events(),
        renders: log.count(RenderKind::FaceRerender),
        final_state: FinalState::Face {
            variant,
            level: demo.level().value(),
            class: demo.level().classification(),
            rendered_level: view.level,
            skipped: demo.skipped(),
        },
    }
}
