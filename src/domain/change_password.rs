use std::collections::HashMap;

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::Field;

/// The three password fields of the change password modal.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangePasswordForm {
    pub current_password: Secret<String>,
    pub new_password: Secret<String>,
    pub confirm_password: Secret<String>,
}

impl Default for ChangePasswordForm {
    fn default() -> Self {
        Self {
            current_password: Secret::new(String::new()),
            new_password: Secret::new(String::new()),
            confirm_password: Secret::new(String::new()),
        }
    }
}

impl ChangePasswordForm {
    pub fn get(&self, field: Field) -> &Secret<String> {
        match field {
            Field::CurrentPassword => &self.current_password,
            Field::NewPassword => &self.new_password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let value = Secret::new(value);
        match field {
            Field::CurrentPassword => self.current_password = value,
            Field::NewPassword => self.new_password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL
            .iter()
            .all(|field| self.get(*field).expose_secret().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Body returned by the remote password change endpoint.
///
/// `flag` is true on success; otherwise `errors` maps wire field names
/// to messages.
#[derive(Debug, Default, Deserialize)]
pub struct PasswordChangeResponse {
    #[serde(default)]
    pub flag: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, String>,
}
