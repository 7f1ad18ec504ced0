use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::mvi::UiState;
use crate::validation::{self, DEFAULT_MIN_PASSWORD_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gender '{0}' (expected male, female or other)")]
pub struct ParseGenderError(String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseGenderError(s.to_string()))
    }
}

/// Text fields that carry a validity flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
}

/// Validation rules applied by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRules {
    pub min_password_len: usize,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

/// Snapshot of the registration form: raw fields plus everything derived
/// from them.
///
/// The flags are only ever written by [`RegistrationState::derive`], so a
/// state produced by the reducer is always self-consistent.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: Gender,
    pub name_valid: bool,
    pub email_valid: bool,
    pub password_valid: bool,
    pub form_valid: bool,
    pub rules: FormRules,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::with_rules(FormRules::default())
    }
}

impl UiState for RegistrationState {}

// Password stays out of debug output.
impl fmt::Debug for RegistrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationState")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &format_args!("<{} chars>", self.password.chars().count()))
            .field("gender", &self.gender)
            .field("name_valid", &self.name_valid)
            .field("email_valid", &self.email_valid)
            .field("password_valid", &self.password_valid)
            .field("form_valid", &self.form_valid)
            .finish()
    }
}

impl RegistrationState {
    /// Empty form with the given rules and consistent flags.
    pub fn with_rules(rules: FormRules) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            gender: Gender::default(),
            name_valid: false,
            email_valid: false,
            password_valid: false,
            form_valid: false,
            rules,
        }
        .derive()
    }

    /// Recompute every flag from the raw fields.
    ///
    /// Component flags first, then the aggregate from the new components.
    pub fn derive(mut self) -> Self {
        self.name_valid = validation::is_valid_name(&self.name);
        self.email_valid = validation::is_valid_email(&self.email);
        self.password_valid =
            validation::is_valid_password(&self.password, self.rules.min_password_len);
        self.form_valid = self.name_valid && self.email_valid && self.password_valid;
        self
    }

    pub fn is_valid(&self, field: FormField) -> bool {
        match field {
            FormField::Name => self.name_valid,
            FormField::Email => self.email_valid,
            FormField::Password => self.password_valid,
        }
    }

    fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    /// Hint to show next to an invalid field the user has typed into.
    ///
    /// Empty fields get no hint. A name is only invalid when empty, so it
    /// never gets one either.
    pub fn field_error(&self, field: FormField) -> Option<String> {
        if self.is_valid(field) || self.text(field).is_empty() {
            return None;
        }
        match field {
            FormField::Name => None,
            FormField::Email => Some("Enter a valid email address".to_string()),
            FormField::Password => Some(format!(
                "Password must be at least {} characters",
                self.rules.min_password_len
            )),
        }
    }

    /// Serializable view of the form without the password text.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            name: self.name.clone(),
            email: self.email.clone(),
            password_len: self.password.chars().count(),
            gender: self.gender,
            name_valid: self.name_valid,
            email_valid: self.email_valid,
            password_valid: self.password_valid,
            form_valid: self.form_valid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub password_len: usize,
    pub gender: Gender,
    pub name_valid: bool,
    pub email_valid: bool,
    pub password_valid: bool,
    pub form_valid: bool,
}
