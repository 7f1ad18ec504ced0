//! Registration form feature module.
//!
//! Name, email, password and gender fields with live validation and a
//! submit action gated on the aggregate flag.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Raw fields, derived flags, validation hints
//! - `intent.rs` - Field edits, batched updates, reset
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `model.rs` - Observable bindings and the submit action
//! - `submit.rs` - Submission collaborator seam

mod intent;
mod model;
mod reducer;
mod state;
mod submit;

pub use intent::{FormUpdate, RegistrationIntent};
pub use model::RegistrationFormModel;
pub use reducer::RegistrationReducer;
pub use state::{FormField, FormRules, FormSnapshot, Gender, ParseGenderError, RegistrationState};
pub use submit::{NoopSubmitter, Registration, SubmitError, Submitter};
