use std::time::Duration;

use axum::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::{
    domain::{ChangePasswordForm, CurrentUser, PasswordChangeResponse, SessionToken},
    password_change::PasswordChangeService,
    Result,
};

/// HTTP client for the remote authentication API.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http_client: Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
    confirm_password: &'a str,
}

impl AuthClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends a change request. Validation failures come back as a
    /// `flag: false` body with a 2xx, 400 or 422 status; any other status is
    /// an error.
    #[tracing::instrument(name = "Requesting password change", skip_all)]
    pub async fn request_password_change(
        &self,
        token: &SessionToken,
        form: &ChangePasswordForm,
    ) -> Result<PasswordChangeResponse, reqwest::Error> {
        let url = format!("{}/auth/change-password", self.base_url);
        let request_body = ChangePasswordRequest {
            current_password: form.current_password.expose_secret(),
            new_password: form.new_password.expose_secret(),
            confirm_password: form.confirm_password.expose_secret(),
        };
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token.expose_secret())
            .json(&request_body)
            .send()
            .await?;
        accept_validation_failures(response)?
            .json::<PasswordChangeResponse>()
            .await
    }

    #[tracing::instrument(name = "Fetching current user", skip_all)]
    pub async fn current_user(&self, token: &SessionToken) -> Result<CurrentUser, reqwest::Error> {
        let url = format!("{}/auth/me", self.base_url);
        self.http_client
            .get(&url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?
            .error_for_status()?
            .json::<CurrentUser>()
            .await
    }

    #[tracing::instrument(name = "Ending remote session", skip_all)]
    pub async fn logout(&self, token: &SessionToken) -> Result<(), reqwest::Error> {
        let url = format!("{}/auth/logout", self.base_url);
        self.http_client
            .post(&url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

fn accept_validation_failures(response: Response) -> Result<Response, reqwest::Error> {
    match response.status() {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Ok(response),
        _ => response.error_for_status(),
    }
}

#[async_trait]
impl PasswordChangeService for AuthClient {
    async fn change_password(
        &self,
        token: &SessionToken,
        form: &ChangePasswordForm,
    ) -> Result<PasswordChangeResponse> {
        Ok(self.request_password_change(token, form).await?)
    }
}
