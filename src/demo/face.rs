//! Slider-driven satisfaction face, with and without render skipping.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use crate::demo::memo::Memo;
use crate::demo::render_log::{RenderKind, RenderLog};
use crate::demo::satisfaction::{Satisfaction, SatisfactionLevel};
use crate::demo::Component;
use crate::ui::mvi::Reducer;
use crate::ui::slider::{SliderIntent, SliderReducer, SliderState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaceProps {
    pub level: i64,
}

/// What the face displays. `level` is the level the output was rendered
/// for; with the skip variant it can lag behind the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaceView {
    pub class: Satisfaction,
    pub level: i64,
}

/// Equality predicate: props are equal when they classify the same.
pub fn same_range(previous: &FaceProps, next: &FaceProps) -> bool {
    Satisfaction::classify(previous.level) == Satisfaction::classify(next.level)
}

pub type PropsEq<P> = fn(&P, &P) -> bool;

pub struct Face {
    log: RenderLog,
}

impl Face {
    pub fn new(log: RenderLog) -> Self {
        Self { log }
    }
}

impl Component for Face {
    type Props = FaceProps;
    type Output = FaceView;

    fn render(&mut self, props: &FaceProps) -> FaceView {
        let class = Satisfaction::classify(props.level);
        self.log.record(
            RenderKind::FaceRerender,
            format!("level={} class={}", props.level, class),
        );
        FaceView {
            class,
            level: props.level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FaceVariant {
    /// Skip re-renders while the classification is unchanged.
    #[default]
    Skip,
    /// Re-render on every slider change.
    NoSkip,
}

impl fmt::Display for FaceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceVariant::Skip => f.write_str("skip"),
            FaceVariant::NoSkip => f.write_str("no-skip"),
        }
    }
}

enum FaceRenderer {
    NoSkip(Face),
    Skip(Memo<Face, PropsEq<FaceProps>>),
}

impl FaceRenderer {
    fn render(&mut self, props: &FaceProps) -> FaceView {
        match self {
            FaceRenderer::NoSkip(face) => face.render(props),
            FaceRenderer::Skip(memo) => memo.render(props),
        }
    }

    fn skipped(&self) -> u64 {
        match self {
            FaceRenderer::NoSkip(_) => 0,
            FaceRenderer::Skip(memo) => memo.skipped(),
        }
    }
}

pub struct FaceDemo {
    variant: FaceVariant,
    slider: SliderState,
    face: FaceRenderer,
    output: FaceView,
}

impl FaceDemo {
    /// Mount the demo at `initial`. Mounting renders the face once.
    pub fn new(variant: FaceVariant, initial: SatisfactionLevel, log: RenderLog) -> Self {
        let face = Face::new(log);
        let mut face = match variant {
            FaceVariant::NoSkip => FaceRenderer::NoSkip(face),
            FaceVariant::Skip => {
                FaceRenderer::Skip(Memo::new(face, same_range as PropsEq<FaceProps>))
            }
        };
        let slider = SliderState { level: initial };
        let output = face.render(&FaceProps {
            level: initial.value(),
        });
        Self {
            variant,
            slider,
            face,
            output,
        }
    }

    /// Apply a slider intent. The face is offered new props only when the
    /// level actually moved; the skip variant may still decline to render.
    ///
    /// Returns true if the slider value changed.
    pub fn dispatch(&mut self, intent: SliderIntent) -> bool {
        let next = SliderReducer::reduce(self.slider.clone(), intent);
        if next == self.slider {
            return false;
        }
        self.slider = next;
        tracing::debug!(level = self.slider.level.value(), "slider moved");
        self.output = self.face.render(&FaceProps {
            level: self.slider.level.value(),
        });
        true
    }

    pub fn variant(&self) -> FaceVariant {
        self.variant
    }

    pub fn level(&self) -> SatisfactionLevel {
        self.slider.level
    }

    pub fn view(&self) -> FaceView {
        self.output
    }

    /// Slider changes the equality predicate turned away. Always 0 for
    /// the no-skip variant.
    pub fn skipped(&self) -> u64 {
        self.face.skipped()
    }
}
