use crate::ui::app::{App, Demo};
use crate::ui::counter::CounterIntent;
use crate::ui::slider::SliderIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// PageUp/PageDown move this many slider steps.
const PAGE_STEPS: i64 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_quit(key) {
        app.request_quit();
        return;
    }

    if matches!(app.demo(), Demo::Counter(_)) {
        if let Some(intent) = counter_intent(key) {
            app.press(intent);
        }
    } else if let Some(intent) = slider_intent(key, app.slider_step()) {
        app.slide(intent);
    }
}

fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'c') => {
            key.modifiers.contains(KeyModifiers::CONTROL)
        }
        KeyCode::Char('q') => true,
        _ => false,
    }
}

fn counter_intent(key: KeyEvent) -> Option<CounterIntent> {
    match key.code {
        KeyCode::Char('i') | KeyCode::Char('+') => Some(CounterIntent::Increment),
        KeyCode::Char('t') | KeyCode::Char(' ') => Some(CounterIntent::Toggle),
        _ => None,
    }
}

fn slider_intent(key: KeyEvent, step: i64) -> Option<SliderIntent> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(SliderIntent::Step(-step)),
        KeyCode::Right | KeyCode::Char('l') => Some(SliderIntent::Step(step)),
        KeyCode::PageDown => Some(SliderIntent::Step(-step * PAGE_STEPS)),
        KeyCode::PageUp => Some(SliderIntent::Step(step * PAGE_STEPS)),
        KeyCode::Home => Some(SliderIntent::Min),
        KeyCode::End => Some(SliderIntent::Max),
        _ => None,
    }
}
