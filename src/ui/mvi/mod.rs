//! State containers shared by the echo field and the registration form.
//!
//! Each view-model keeps its screen in a [`Store`]. Setters turn a user
//! event into an intent, the reducer computes the next snapshot with every
//! derived flag filled in, and the view-model then pushes whatever changed
//! into its observables:
//!
//! ```text
//! set_name("Ana") ─→ SetName ─→ RegistrationReducer ─→ Store ─→ Observable<bool> ─→ view
//! poll(now)       ─→ Publish ─→ EchoReducer         ─→ Store ─→ Observable<String> ─→ view
//! ```
//!
//! Timers and side effects (debounce, submit) stay in the view-model; the
//! reducers never see a clock.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
