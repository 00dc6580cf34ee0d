//! Change password modal: form state, client-side validation and the
//! submission state machine around the remote change request.
//!
//! The flow is driven either by a single [`PasswordChangeFlow::submit`] or,
//! from an event loop that must keep handling input while the request is
//! outstanding, by [`PasswordChangeFlow::begin_submit`] followed by
//! [`PasswordChangeFlow::complete_submit`].

use std::sync::Arc;

use axum::async_trait;
use secrecy::ExposeSecret;

use crate::{
    domain::{
        validate, ChangePasswordForm, Field, FieldErrors, PasswordChangeResponse, SessionToken,
        ValidationMessages,
    },
    Result,
};

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Password changed successfully";
pub const FAILURE_MESSAGE: &str = "Your password could not be changed. Please try again.";

/// Remote capability that performs the password change.
#[async_trait]
pub trait PasswordChangeService: Send + Sync {
    async fn change_password(
        &self,
        token: &SessionToken,
        form: &ChangePasswordForm,
    ) -> Result<PasswordChangeResponse>;
}

#[async_trait]
impl<T: PasswordChangeService + ?Sized> PasswordChangeService for Arc<T> {
    async fn change_password(
        &self,
        token: &SessionToken,
        form: &ChangePasswordForm,
    ) -> Result<PasswordChangeResponse> {
        (**self).change_password(token, form).await
    }
}

/// Transient user-facing notifications.
pub trait FlashNotifier {
    fn flash_success(&self, message: &str);
    fn flash_error(&self, message: &str);
}

impl<T: FlashNotifier + ?Sized> FlashNotifier for &T {
    fn flash_success(&self, message: &str) {
        (**self).flash_success(message)
    }

    fn flash_error(&self, message: &str) {
        (**self).flash_error(message)
    }
}

impl FlashNotifier for axum_messages::Messages {
    fn flash_success(&self, message: &str) {
        self.clone().success(message);
    }

    fn flash_error(&self, message: &str) {
        self.clone().error(message);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The password was changed; the modal is closed and the form cleared.
    Changed { message: String },
    /// The auth API refused the change; errors are attached to the fields.
    Rejected(FieldErrors),
    /// The request itself failed. The modal stays open for a manual retry.
    Failed,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("the form has invalid fields")]
    Invalid(FieldErrors),
    #[error("a password change is already in flight")]
    InFlight,
    #[error("the change password modal is not open")]
    Closed,
    #[error("password change requires a signed-in user")]
    Unavailable,
    #[error("no password change is in flight")]
    NotInFlight,
}

/// A validated request handed out by `begin_submit`.
#[derive(Debug)]
pub struct PendingSubmission {
    pub token: SessionToken,
    pub form: ChangePasswordForm,
}

pub struct PasswordChangeFlow<S, N> {
    token: Option<SessionToken>,
    service: S,
    notifier: N,
    messages: ValidationMessages,
    visible: bool,
    state: SubmissionState,
    form: ChangePasswordForm,
    errors: FieldErrors,
}

impl<S, N> PasswordChangeFlow<S, N>
where
    S: PasswordChangeService,
    N: FlashNotifier,
{
    pub fn new(token: Option<SessionToken>, service: S, notifier: N) -> Self {
        Self {
            token,
            service,
            notifier,
            messages: ValidationMessages::default(),
            visible: false,
            state: SubmissionState::Idle,
            form: ChangePasswordForm::default(),
            errors: FieldErrors::default(),
        }
    }

    #[must_use]
    pub fn with_messages(mut self, messages: ValidationMessages) -> Self {
        self.messages = messages;
        self
    }

    /// The feature is offered only to a signed-in user.
    pub fn is_available(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn form(&self) -> &ChangePasswordForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Dismisses the modal and resets the form. Ignored while a request is
    /// in flight.
    pub fn close(&mut self) {
        if self.state == SubmissionState::InFlight {
            tracing::debug!("Ignoring close while a password change is in flight");
            return;
        }
        self.visible = false;
        self.form.clear();
        self.errors.clear();
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value.into());
        self.errors.remove(field);
    }

    pub fn fill(&mut self, form: ChangePasswordForm) {
        for field in Field::ALL {
            self.set_field(field, form.get(field).expose_secret().as_str());
        }
    }

    /// Validates the form and, when it passes, moves to `InFlight` and hands
    /// out the request to send.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.state == SubmissionState::InFlight {
            return Err(SubmitError::InFlight);
        }
        if !self.visible {
            return Err(SubmitError::Closed);
        }
        let token = self.token.clone().ok_or(SubmitError::Unavailable)?;
        if let Err(errors) = validate(&self.form, &self.messages) {
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }
        self.errors.clear();
        self.state = SubmissionState::InFlight;
        Ok(PendingSubmission {
            token,
            form: self.form.clone(),
        })
    }

    /// Applies the result of the remote call and returns to `Idle`. A
    /// completion with nothing in flight is stale and leaves the flow as is.
    pub fn complete_submit(
        &mut self,
        result: Result<PasswordChangeResponse>,
    ) -> Result<SubmitOutcome, SubmitError> {
        if self.state != SubmissionState::InFlight {
            tracing::debug!("Ignoring a password change completion with nothing in flight");
            return Err(SubmitError::NotInFlight);
        }
        self.state = SubmissionState::Idle;
        let outcome = match result {
            Ok(response) if response.flag => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
                self.notifier.flash_success(&message);
                self.close();
                tracing::info!("Password changed");
                SubmitOutcome::Changed { message }
            }
            Ok(response) => {
                for (field, message) in FieldErrors::from_remote(response.errors).iter() {
                    self.errors.insert(field, message);
                }
                tracing::info!(fields = self.errors.len(), "Password change rejected");
                SubmitOutcome::Rejected(self.errors.clone())
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to change password"
                );
                self.notifier.flash_error(FAILURE_MESSAGE);
                SubmitOutcome::Failed
            }
        };
        Ok(outcome)
    }

    #[tracing::instrument(name = "Submitting password change", skip(self))]
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let pending = self.begin_submit()?;
        let result = self
            .service
            .change_password(&pending.token, &pending.form)
            .await;
        self.complete_submit(result)
    }
}
