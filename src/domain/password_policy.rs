use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};
use secrecy::ExposeSecret;
use serde::Deserialize;

use super::{ChangePasswordForm, Field, FieldErrors};

/// Character classes a new password must contain: lowercase, uppercase,
/// digit and one of `!@#$%^&*`.
static REQUIRED_CLASSES: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([r"[a-z]", r"[A-Z]", r"[0-9]", r"[!@#$%^&*]"])
        .expect("password policy patterns are valid")
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s").expect("whitespace pattern is valid"));

/// User-facing validation messages. Every entry can be overridden from the
/// `messages` configuration section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationMessages {
    pub current_password_required: String,
    pub new_password_required: String,
    pub new_password_policy: String,
    pub confirm_password_required: String,
    pub confirm_password_mismatch: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            current_password_required: "Please enter current password".to_string(),
            new_password_required: "Please enter new password".to_string(),
            new_password_policy: "Must contain at least one upper case, lower case, digit, \
                special character and no white space"
                .to_string(),
            confirm_password_required: "Please enter confirm password".to_string(),
            confirm_password_mismatch: "The re-entered password does not match".to_string(),
        }
    }
}

pub fn is_compliant(password: &str) -> bool {
    REQUIRED_CLASSES.matches(password).matched_all() && !WHITESPACE.is_match(password)
}

/// Client-side checks run before a change request is sent. Each field gets
/// at most one message, the first rule it fails.
pub fn validate(form: &ChangePasswordForm, messages: &ValidationMessages) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    let current_password = form.current_password.expose_secret();
    let new_password = form.new_password.expose_secret();
    let confirm_password = form.confirm_password.expose_secret();

    if current_password.is_empty() {
        errors.insert(Field::CurrentPassword, &messages.current_password_required);
    }

    if new_password.is_empty() {
        errors.insert(Field::NewPassword, &messages.new_password_required);
    } else if !is_compliant(new_password) {
        errors.insert(Field::NewPassword, &messages.new_password_policy);
    }

    if confirm_password.is_empty() {
        errors.insert(Field::ConfirmPassword, &messages.confirm_password_required);
    } else if confirm_password != new_password {
        errors.insert(Field::ConfirmPassword, &messages.confirm_password_mismatch);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
