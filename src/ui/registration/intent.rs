//! Intents for the registration form.

use crate::ui::mvi::Intent;

use super::state::Gender;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationIntent {
    SetName(String),
    SetEmail(String),
    SetPassword(String),
    SetGender(Gender),

    /// Several fields changed as one logical update (autofill, paste of a
    /// saved profile). Flags are derived once, after all fields are applied.
    Apply(FormUpdate),

    /// Clear every field back to its default, keeping the rules.
    Reset,
}

impl Intent for RegistrationIntent {}

/// Partial set of raw field values; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub gender: Option<Gender>,
}

impl FormUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.gender.is_none()
    }
}
