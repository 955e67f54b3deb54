use crate::demo::counter::CounterDemo;
use crate::demo::face::{FaceDemo, FaceVariant};
use crate::demo::render_log::RenderLog;
use crate::demo::satisfaction::SatisfactionLevel;
use crate::ui::counter::CounterIntent;
use crate::ui::slider::SliderIntent;

/// The demo mounted in the terminal. Demos never talk to each other.
pub enum Demo {
    Counter(CounterDemo),
    Face(FaceDemo),
}

pub struct App {
    should_quit: bool,
    demo: Demo,
    log: RenderLog,
    slider_step: i64,
}

impl App {
    pub fn counter(log: RenderLog) -> Self {
        let demo = Demo::Counter(CounterDemo::new(log.clone()));
        Self {
            should_quit: false,
            demo,
            log,
            slider_step: 1,
        }
    }

    pub fn face(
        variant: FaceVariant,
        initial: SatisfactionLevel,
        slider_step: i64,
        log: RenderLog,
    ) -> Self {
        let demo = Demo::Face(FaceDemo::new(variant, initial, log.clone()));
        Self {
            should_quit: false,
            demo,
            log,
            slider_step: slider_step.max(1),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn demo(&self) -> &Demo {
        &self.demo
    }

    pub fn render_log(&self) -> &RenderLog {
        &self.log
    }

    pub fn slider_step(&self) -> i64 {
        self.slider_step
    }

    /// Press a counter button. Ignored when another demo is mounted.
    pub fn press(&mut self, intent: CounterIntent) {
        if let Demo::Counter(demo) = &mut self.demo {
            demo.dispatch(intent);
        }
    }

    /// Move the slider. Ignored when another demo is mounted.
    pub fn slide(&mut self, intent: SliderIntent) {
        if let Demo::Face(demo) = &mut self.demo {
            demo.dispatch(intent);
        }
    }
}
