//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits for unidirectional data flow in
//! the UI layer, plus an observable [`Store`] that owns a reducer's
//! state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                     │
//!    └──── subscribers ────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Owns the current state and notifies subscribers when a
//!   dispatch commits a change

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
