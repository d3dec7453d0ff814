use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::{CounterState, MAX, MIN};
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    /// One clamped successor per intent: read once, clamp, store.
    /// Repeated dispatches at a boundary are idempotent.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let value = match intent {
            CounterIntent::Increment => (state.value + 1).min(MAX),
            CounterIntent::Decrement => (state.value - 1).max(MIN),
        };
        CounterState { value }
    }
}
