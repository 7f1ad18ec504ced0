//! View-model for the registration form.

use crate::config::RegistrationConfig;
use crate::reactive::{Batch, Observable, Watch};
use crate::ui::mvi::Store;

use super::intent::{FormUpdate, RegistrationIntent};
use super::reducer::RegistrationReducer;
use super::state::{FormField, FormRules, Gender, RegistrationState};
use super::submit::{NoopSubmitter, Registration, SubmitError, Submitter};

/// One observable per raw and derived field.
struct FormBindings {
    name: Observable<String>,
    email: Observable<String>,
    password: Observable<String>,
    gender: Observable<Gender>,
    name_valid: Observable<bool>,
    email_valid: Observable<bool>,
    password_valid: Observable<bool>,
    form_valid: Observable<bool>,
}

impl FormBindings {
    fn new(state: &RegistrationState) -> Self {
        Self {
            name: Observable::new(state.name.clone()),
            email: Observable::new(state.email.clone()),
            password: Observable::new(state.password.clone()),
            gender: Observable::new(state.gender),
            name_valid: Observable::new(state.name_valid),
            email_valid: Observable::new(state.email_valid),
            password_valid: Observable::new(state.password_valid),
            form_valid: Observable::new(state.form_valid),
        }
    }

    /// Write the whole state, then notify: raw fields, component flags,
    /// aggregate last.
    fn publish(&self, state: &RegistrationState) {
        let mut batch = Batch::new();
        self.name.stage(state.name.clone(), &mut batch);
        self.email.stage(state.email.clone(), &mut batch);
        self.password.stage(state.password.clone(), &mut batch);
        self.gender.stage(state.gender, &mut batch);
        self.name_valid.stage(state.name_valid, &mut batch);
        self.email_valid.stage(state.email_valid, &mut batch);
        self.password_valid.stage(state.password_valid, &mut batch);
        self.form_valid.stage(state.form_valid, &mut batch);
        batch.flush();
    }
}

/// Registration form with live validation and a submit gate.
///
/// Setters are synchronous: flags reflect the latest keystroke as soon as
/// the setter returns. Invalid input is never an error, only a `false` flag.
pub struct RegistrationFormModel {
    store: Store<RegistrationReducer>,
    bindings: FormBindings,
    submitter: Box<dyn Submitter>,
}

impl Default for RegistrationFormModel {
    fn default() -> Self {
        Self::new(&RegistrationConfig::default())
    }
}

impl RegistrationFormModel {
    pub fn new(config: &RegistrationConfig) -> Self {
        let state = RegistrationState::with_rules(FormRules {
            min_password_len: config.min_password_len,
        });
        Self {
            bindings: FormBindings::new(&state),
            store: Store::new(state),
            submitter: Box::new(NoopSubmitter),
        }
    }

    /// Replace the submission collaborator.
    pub fn with_submitter(mut self, submitter: impl Submitter + 'static) -> Self {
        self.submitter = Box::new(submitter);
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.dispatch(RegistrationIntent::SetName(name.into()));
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.dispatch(RegistrationIntent::SetEmail(email.into()));
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.dispatch(RegistrationIntent::SetPassword(password.into()));
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.dispatch(RegistrationIntent::SetGender(gender));
    }

    /// Apply several field changes as one update.
    pub fn apply(&mut self, update: FormUpdate) {
        if update.is_empty() {
            return;
        }
        self.dispatch(RegistrationIntent::Apply(update));
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        self.dispatch(RegistrationIntent::Reset);
    }

    /// Hand the current values to the submitter.
    ///
    /// Callable in any state; the presentation layer is expected to disable
    /// the button while [`form_valid`](Self::form_valid) is false.
    pub fn submit(&self) -> Result<(), SubmitError> {
        let state = self.store.state();
        if !state.form_valid {
            tracing::warn!("submit invoked while form is invalid");
        }
        let registration = Registration::from(state);
        match self.submitter.submit(&registration) {
            Ok(()) => {
                tracing::info!(email = %registration.email, "registration submitted");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "registration submit failed");
                Err(err)
            }
        }
    }

    fn dispatch(&mut self, intent: RegistrationIntent) {
        if self.store.dispatch(intent).is_none() {
            return;
        }
        let state = self.store.state();
        tracing::trace!(
            name_valid = state.name_valid,
            email_valid = state.email_valid,
            password_valid = state.password_valid,
            form_valid = state.form_valid,
            "registration form updated"
        );
        self.bindings.publish(state);
    }

    pub fn state(&self) -> &RegistrationState {
        self.store.state()
    }

    pub fn is_form_valid(&self) -> bool {
        self.store.state().form_valid
    }

    pub fn field_error(&self, field: FormField) -> Option<String> {
        self.store.state().field_error(field)
    }

    pub fn name(&self) -> Watch<String> {
        self.bindings.name.watch()
    }

    pub fn email(&self) -> Watch<String> {
        self.bindings.email.watch()
    }

    pub fn password(&self) -> Watch<String> {
        self.bindings.password.watch()
    }

    pub fn gender(&self) -> Watch<Gender> {
        self.bindings.gender.watch()
    }

    pub fn name_valid(&self) -> Watch<bool> {
        self.bindings.name_valid.watch()
    }

    pub fn email_valid(&self) -> Watch<bool> {
        self.bindings.email_valid.watch()
    }

    pub fn password_valid(&self) -> Watch<bool> {
        self.bindings.password_valid.watch()
    }

    pub fn form_valid(&self) -> Watch<bool> {
        self.bindings.form_valid.watch()
    }
}
