use crate::demo::satisfaction::SatisfactionLevel;
use crate::ui::mvi::Reducer;
use crate::ui::slider::intent::SliderIntent;
use crate::ui::slider::state::SliderState;

pub struct SliderReducer;

impl Reducer for SliderReducer {
    type State = SliderState;
    type Intent = SliderIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let level = match intent {
            SliderIntent::Set(value) => SatisfactionLevel::new(value),
            SliderIntent::Step(delta) => state.level.step(delta),
            SliderIntent::Min => SatisfactionLevel::min(),
            SliderIntent::Max => SatisfactionLevel::max(),
        };
        SliderState { level }
    }
}
