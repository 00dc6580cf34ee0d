mod get;
mod post;

pub use get::*;
pub use post::*;

use secrecy::ExposeSecret;
use serde::Serialize;

use crate::domain::{ChangePasswordForm, FieldErrors};

/// Template data of the change password modal.
#[derive(Debug, Serialize)]
pub struct PasswordModalView<'a> {
    pub form: FormValues<'a>,
    pub errors: &'a FieldErrors,
    pub messages: Vec<String>,
    /// The last submission failed for a reason unrelated to the fields.
    pub failed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
    pub confirm_password: &'a str,
}

impl<'a> From<&'a ChangePasswordForm> for FormValues<'a> {
    fn from(form: &'a ChangePasswordForm) -> Self {
        Self {
            current_password: form.current_password.expose_secret(),
            new_password: form.new_password.expose_secret(),
            confirm_password: form.confirm_password.expose_secret(),
        }
    }
}
