//! Echo field feature module.
//!
//! Mirrors typed text back with a prefix once typing pauses.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Raw input and published output
//! - `intent.rs` - Keystrokes and settled publications
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `model.rs` - Debounce + dedup pipeline and observable bindings

mod intent;
mod model;
mod reducer;
mod state;

pub use intent::EchoIntent;
pub use model::InputEchoModel;
pub use reducer::EchoReducer;
pub use state::EchoState;
