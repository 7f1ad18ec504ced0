//! Reactive view-models for two single-screen demos: a text field that
//! echoes its input after a debounce window, and a registration form with
//! live validation gating a submit action.
//!
//! State flows one way: user events become intents, reducers derive the
//! next state, and per-field [`reactive::Observable`]s notify whoever renders
//! it.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod reactive;
pub mod ui;
pub mod validation;
