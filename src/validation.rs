//! Field validators for the registration form.
//!
//! Every validator is a pure predicate over the raw field text. None of
//! them can fail: input that cannot be judged is simply invalid.

use std::sync::LazyLock;

use regex::Regex;

/// Local part `@` domain `.` TLD, TLD 2-64 ASCII letters.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$";

/// Default minimum password length, in characters.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN) {
    Ok(re) => Some(re),
    Err(err) => {
        tracing::error!(error = %err, "email pattern failed to compile");
        None
    }
});

/// A name is valid when it is non-empty.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
}

/// Full-string match against [`EMAIL_PATTERN`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// A password is valid when it has at least `min_len` characters.
pub fn is_valid_password(password: &str, min_len: usize) -> bool {
    password.chars().count() >= min_len
}
