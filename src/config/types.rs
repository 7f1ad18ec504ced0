use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::validation::DEFAULT_MIN_PASSWORD_LEN;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub echo: EchoConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
}

/// Settings for the debounced echo field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoConfig {
    /// Quiet period before a typed value settles, in milliseconds (default: 300).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Literal placed in front of the settled value (default: "You typed: ").
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

/// Settings for the registration form validators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Minimum password length in characters (default: 8).
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_prefix() -> String {
    "You typed: ".to_string()
}

fn default_min_password_len() -> usize {
    DEFAULT_MIN_PASSWORD_LEN
}

impl EchoConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            prefix: default_prefix(),
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            min_password_len: default_min_password_len(),
        }
    }
}
