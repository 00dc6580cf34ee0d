use secrecy::{ExposeSecret, Secret};

/// Authentication token of the signed-in user. Its presence is what makes
/// the change password entry available.
#[derive(Clone, Debug)]
pub struct SessionToken(Secret<String>);

impl SessionToken {
    pub fn parse(s: &str) -> Result<Self, String> {
        let token = s.trim();
        if token.is_empty() {
            return Err("session token is empty".to_string());
        }
        Ok(Self(Secret::new(token.to_string())))
    }

    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}
