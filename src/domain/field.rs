use std::{collections::BTreeMap, collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 3] = [
        Field::CurrentPassword,
        Field::NewPassword,
        Field::ConfirmPassword,
    ];

    /// Wire name, as used in forms and by the auth API.
    pub fn name(self) -> &'static str {
        serde_variant::to_variant_name(&self).unwrap_or_default()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("{} is not a change password field", s))
    }
}

/// Field-error mapping shown next to the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Builds the mapping from the auth API's error map. Names that are
    /// not form fields are dropped.
    pub fn from_remote(errors: HashMap<String, String>) -> Self {
        let mut field_errors = Self::default();
        for (name, message) in errors {
            match name.parse::<Field>() {
                Ok(field) => field_errors.insert(field, message),
                Err(e) => tracing::warn!(error.message = %e, "Ignoring error for unknown field"),
            }
        }
        field_errors
    }
}
