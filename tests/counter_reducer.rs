mod common;

use uikata::ui::counter::{CounterIntent, CounterReducer, CounterState, DEFAULT, MAX, MIN};
use uikata::ui::mvi::Reducer;

fn at(value: i32) -> CounterState {
    CounterState { value }
}

fn apply(state: CounterState, intents: &[CounterIntent]) -> CounterState {
    intents
        .iter()
        .fold(state, |state, intent| CounterReducer::reduce(state, *intent))
}

#[test]
fn fresh_counter_starts_at_default() {
    assert_eq!(CounterState::default().value, DEFAULT);
    assert_eq!(CounterState::default().value, 10);
}

#[test]
fn increment_moves_up_by_one() {
    let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Increment);
    assert_eq!(state.value, 11);
}

#[test]
fn decrement_moves_down_by_one() {
    let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Decrement);
    assert_eq!(state.value, 9);
}

#[test]
fn increment_clamps_at_max() {
    let state = CounterReducer::reduce(at(24), CounterIntent::Increment);
    assert_eq!(state.value, 25);

    let state = CounterReducer::reduce(state, CounterIntent::Increment);
    assert_eq!(state.value, 25);
}

#[test]
fn decrement_clamps_at_min() {
    let state = CounterReducer::reduce(at(-4), CounterIntent::Decrement);
    assert_eq!(state.value, -5);

    let state = CounterReducer::reduce(state, CounterIntent::Decrement);
    assert_eq!(state.value, -5);
}

#[test]
fn twenty_increments_from_default_saturate_at_max() {
    let state = apply(CounterState::default(), &[CounterIntent::Increment; 20]);
    assert_eq!(state.value, MAX);
}

#[test]
fn twenty_decrements_from_default_saturate_at_min() {
    let state = apply(CounterState::default(), &[CounterIntent::Decrement; 20]);
    assert_eq!(state.value, MIN);
}

#[test]
fn five_increments_from_default() {
    let state = apply(CounterState::default(), &[CounterIntent::Increment; 5]);
    assert_eq!(state.value, 15);
    assert_eq!(state.doubled(), 30);
}

#[test]
fn doubled_tracks_value_over_full_range() {
    for value in MIN..=MAX {
        assert_eq!(at(value).doubled(), value * 2);
    }
}

#[test]
fn mixed_sequences_never_leave_bounds() {
    let sequence = [
        CounterIntent::Decrement,
        CounterIntent::Decrement,
        CounterIntent::Increment,
        CounterIntent::Decrement,
        CounterIntent::Increment,
        CounterIntent::Increment,
        CounterIntent::Increment,
        CounterIntent::Decrement,
    ];

    for start in MIN..=MAX {
        let mut state = at(start);
        for intent in sequence {
            state = CounterReducer::reduce(state, intent);
            assert!(
                (MIN..=MAX).contains(&state.value),
                "value {} escaped bounds starting from {}",
                state.value,
                start
            );
        }
    }
}
