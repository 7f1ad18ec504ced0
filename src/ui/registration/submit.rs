//! Submission seam for the registration form.

use std::fmt;

use thiserror::Error;

use super::state::{Gender, RegistrationState};

/// Values handed to a [`Submitter`].
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: Gender,
}

impl From<&RegistrationState> for Registration {
    fn from(state: &RegistrationState) -> Self {
        Self {
            name: state.name.clone(),
            email: state.email.clone(),
            password: state.password.clone(),
            gender: state.gender,
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("gender", &self.gender)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Submission unavailable: {0}")]
    Unavailable(String),
}

/// Receives a registration when the user presses submit.
///
/// Network calls, persistence and retries belong to implementations; the
/// form only reports the outcome.
pub trait Submitter {
    fn submit(&self, registration: &Registration) -> Result<(), SubmitError>;
}

/// Accepts every registration and does nothing with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSubmitter;

impl Submitter for NoopSubmitter {
    fn submit(&self, registration: &Registration) -> Result<(), SubmitError> {
        tracing::debug!(name = %registration.name, "noop submitter accepted registration");
        Ok(())
    }
}

impl<F> Submitter for F
where
    F: Fn(&Registration) -> Result<(), SubmitError>,
{
    fn submit(&self, registration: &Registration) -> Result<(), SubmitError> {
        self(registration)
    }
}
