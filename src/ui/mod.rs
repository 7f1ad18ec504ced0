//! View-models, their events, and the loop that drives them.

pub mod echo;
pub mod events;
pub mod mvi;
pub mod registration;
pub mod runtime;
