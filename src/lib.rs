//! uikata — small terminal UI exercises.
//!
//! Three screens in one binary: a bounded counter, a background-color
//! switcher, and a props-driven card gallery. State is managed through a
//! Model-View-Intent split with an observable store; see [`ui::mvi`].

pub mod config;
pub mod trace;
pub mod ui;
