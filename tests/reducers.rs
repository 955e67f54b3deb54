use rerender_lab::demo::satisfaction::SatisfactionLevel;
use rerender_lab::ui::counter::{CounterIntent, CounterReducer, CounterState};
use rerender_lab::ui::mvi::Reducer;
use rerender_lab::ui::slider::{SliderIntent, SliderReducer, SliderState};

fn slider_at(level: i64) -> SliderState {
    SliderState {
        level: SatisfactionLevel::new(level),
    }
}

#[test]
fn increment_adds_one() {
    let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Increment);
    assert_eq!(state, CounterState { count: 1, toggled: false });
}

#[test]
fn toggle_twice_reverts() {
    let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Toggle);
    assert!(state.toggled);
    let state = CounterReducer::reduce(state, CounterIntent::Toggle);
    assert_eq!(state, CounterState::default());
}

#[test]
fn step_moves_and_saturates() {
    let state = SliderReducer::reduce(slider_at(300), SliderIntent::Step(-40));
    assert_eq!(state.level.value(), 260);
    let state = SliderReducer::reduce(slider_at(20), SliderIntent::Step(-40));
    assert_eq!(state.level.value(), 0);
    let state = SliderReducer::reduce(slider_at(490), SliderIntent::Step(i64::MAX));
    assert_eq!(state.level.value(), 500);
}

#[test]
fn min_and_max_jump_to_ends() {
    assert_eq!(SliderReducer::reduce(slider_at(250), SliderIntent::Min), slider_at(0));
    assert_eq!(SliderReducer::reduce(slider_at(250), SliderIntent::Max), slider_at(500));
}

#[test]
fn setting_same_value_yields_equal_state() {
    let state = SliderReducer::reduce(slider_at(250), SliderIntent::Set(250));
    assert_eq!(state, slider_at(250));
}
