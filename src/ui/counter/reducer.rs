use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                count: state.count.saturating_add(1),
                ..state
            },
            CounterIntent::Toggle => CounterState {
                toggled: !state.toggled,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_untoggled() {
        let state = CounterState::default();
        assert_eq!(state.count, 0);
        assert!(!state.toggled);
    }

    #[test]
    fn increment_saturates() {
        let state = CounterState {
            count: u64::MAX,
            toggled: false,
        };
        let state = CounterReducer::reduce(state, CounterIntent::Increment);
        assert_eq!(state.count, u64::MAX);
    }
}
