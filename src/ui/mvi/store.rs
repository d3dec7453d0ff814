//! Observable state container built on the reducer traits.

use super::reducer::Reducer;

type Listener<S> = Box<dyn Fn(&S) + Send>;

/// Owns a reducer's state and notifies subscribers on every commit.
///
/// The store is the single writer for its state: reads go through
/// [`Store::get`], writes only through [`Store::dispatch`]. Listeners
/// fire after a dispatch whose reduced state differs from the previous
/// one, so transitions that hit a boundary no-op stay silent.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<Listener<R::State>>,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the state type's default value.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store holding an explicit initial state.
    pub fn with_state(state: R::State) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    /// Current committed state.
    pub fn get(&self) -> R::State {
        self.state.clone()
    }

    /// Register an observer for committed state changes.
    ///
    /// The listener is called with the new state after every dispatch
    /// that changed it. Listeners registered here stay for the lifetime
    /// of the store.
    pub fn subscribe(&mut self, listener: impl Fn(&R::State) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Run one intent through the reducer and commit the result.
    pub fn dispatch(&mut self, intent: R::Intent) {
        let next = R::reduce(self.state.clone(), intent);
        if next == self.state {
            return;
        }
        self.state = next;
        for listener in &self.listeners {
            listener(&self.state);
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
