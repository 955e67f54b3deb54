//! Satisfaction level and its five-bucket classification.

use serde::Serialize;
use std::fmt;

/// Lowest value the slider can produce.
pub const MIN_LEVEL: i64 = 0;
/// Highest value the slider can produce.
pub const MAX_LEVEL: i64 = 500;
/// Level the face demos start at.
pub const DEFAULT_LEVEL: i64 = 300;

/// Derived classification of a satisfaction level.
///
/// Never stored; recomputed from the level on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Satisfaction {
    VeryDissatisfied,
    SomewhatDissatisfied,
    Neither,
    SomewhatSatisfied,
    VerySatisfied,
}

impl Satisfaction {
    pub const ALL: [Satisfaction; 5] = [
        Satisfaction::VeryDissatisfied,
        Satisfaction::SomewhatDissatisfied,
        Satisfaction::Neither,
        Satisfaction::SomewhatSatisfied,
        Satisfaction::VerySatisfied,
    ];

    /// Classify a level. Total over all integers: the thresholds are
    /// strict less-than comparisons checked in ascending order.
    pub fn classify(level: i64) -> Self {
        if level < 100 {
            return Satisfaction::VeryDissatisfied;
        }
        if level < 200 {
            return Satisfaction::SomewhatDissatisfied;
        }
        if level < 300 {
            return Satisfaction::Neither;
        }
        if level < 400 {
            return Satisfaction::SomewhatSatisfied;
        }
        Satisfaction::VerySatisfied
    }

    /// The CSS-style class label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Satisfaction::VeryDissatisfied => "very-dissatisfied",
            Satisfaction::SomewhatDissatisfied => "somewhat-dissatisfied",
            Satisfaction::Neither => "neither",
            Satisfaction::SomewhatSatisfied => "somewhat-satisfied",
            Satisfaction::VerySatisfied => "very-satisfied",
        }
    }

    /// Face glyph drawn by the TUI for this class.
    pub fn face(&self) -> &'static str {
        match self {
            Satisfaction::VeryDissatisfied => "(>_<)",
            Satisfaction::SomewhatDissatisfied => "(-_-)",
            Satisfaction::Neither => "(o_o)",
            Satisfaction::SomewhatSatisfied => "(^_^)",
            Satisfaction::VerySatisfied => "(^o^)",
        }
    }
}

impl fmt::Display for Satisfaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a raw level. See [`Satisfaction::classify`].
pub fn classify(level: i64) -> Satisfaction {
    Satisfaction::classify(level)
}

/// Slider value, always within `MIN_LEVEL..=MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SatisfactionLevel(i64);

impl SatisfactionLevel {
    /// Build a level, clamping out-of-range input to the slider bounds.
    pub fn new(level: i64) -> Self {
        Self(level.clamp(MIN_LEVEL, MAX_LEVEL))
    }

    pub fn min() -> Self {
        Self(MIN_LEVEL)
    }

    pub fn max() -> Self {
        Self(MAX_LEVEL)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Move by `delta`, saturating at the slider bounds.
    pub fn step(&self, delta: i64) -> Self {
        Self::new(self.0.saturating_add(delta))
    }

    pub fn classification(&self) -> Satisfaction {
        Satisfaction::classify(self.0)
    }
}

impl Default for SatisfactionLevel {
    fn default() -> Self {
        Self(DEFAULT_LEVEL)
    }
}

impl fmt::Display for SatisfactionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
