mod common;

use std::sync::{Arc, Mutex};

use uikata::ui::counter::{CounterIntent, CounterReducer, CounterState};
use uikata::ui::mvi::Store;

fn recording_store() -> (Store<CounterReducer>, Arc<Mutex<Vec<i32>>>) {
    let mut store = Store::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |state: &CounterState| {
        sink.lock().expect("listener lock").push(state.value);
    });
    (store, seen)
}

#[test]
fn dispatch_commits_and_notifies() {
    let (mut store, seen) = recording_store();

    store.dispatch(CounterIntent::Increment);
    store.dispatch(CounterIntent::Increment);
    store.dispatch(CounterIntent::Decrement);

    assert_eq!(store.get().value, 11);
    assert_eq!(*seen.lock().expect("lock"), vec![11, 12, 11]);
}

#[test]
fn boundary_noop_does_not_notify() {
    let (mut store, seen) = recording_store();

    // Walk to the ceiling, then keep pushing
    for _ in 0..20 {
        store.dispatch(CounterIntent::Increment);
    }
    let commits_at_max = seen.lock().expect("lock").len();
    assert_eq!(store.get().value, 25);

    store.dispatch(CounterIntent::Increment);
    assert_eq!(store.get().value, 25);
    assert_eq!(seen.lock().expect("lock").len(), commits_at_max);
}

#[test]
fn get_reflects_latest_commit() {
    let mut store: Store<CounterReducer> = Store::new();
    assert_eq!(store.get(), CounterState::default());

    store.dispatch(CounterIntent::Decrement);
    assert_eq!(store.get().value, 9);
}

#[test]
fn every_subscriber_sees_the_commit() {
    let mut store: Store<CounterReducer> = Store::new();
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&first);
    store.subscribe(move |state: &CounterState| sink.lock().expect("lock").push(state.value));
    let sink = Arc::clone(&second);
    store.subscribe(move |state: &CounterState| sink.lock().expect("lock").push(state.doubled()));

    store.dispatch(CounterIntent::Increment);

    assert_eq!(*first.lock().expect("lock"), vec![11]);
    assert_eq!(*second.lock().expect("lock"), vec![22]);
}

#[test]
fn explicit_initial_state_is_committed_from() {
    let mut store: Store<CounterReducer> = Store::with_state(CounterState { value: 24 });

    store.dispatch(CounterIntent::Increment);
    assert_eq!(store.get().value, 25);
}
