use axum::{debug_handler, extract::State, response::Response, Form};
use axum_messages::Messages;
use hyper::StatusCode;

use crate::{
    controller::format,
    domain::{ChangePasswordForm, SessionToken},
    menu::routes,
    password_change::{PasswordChangeFlow, SubmitError, SubmitOutcome},
    startup::AppState,
    Result,
};

use super::PasswordModalView;

#[debug_handler]
pub async fn change_password(
    token: SessionToken,
    messages: Messages,
    State(state): State<AppState>,
    Form(params): Form<ChangePasswordForm>,
) -> Result<Response> {
    let mut flow = PasswordChangeFlow::new(Some(token), state.auth_client.clone(), messages)
        .with_messages(state.validation_messages.as_ref().clone());
    flow.open();
    flow.fill(params);

    let (status, failed) = match flow.submit().await {
        Ok(SubmitOutcome::Changed { .. }) => return format::render().redirect(routes::PROFILE),
        Ok(SubmitOutcome::Rejected(_)) | Err(SubmitError::Invalid(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, false)
        }
        Ok(SubmitOutcome::Failed) => (StatusCode::BAD_GATEWAY, true),
        Err(e) => return Err(e.into()),
    };

    format::render().status(status).view(
        &state.tera_engine,
        "password.html",
        PasswordModalView {
            form: flow.form().into(),
            errors: flow.errors(),
            messages: Vec::new(),
            failed,
        },
    )
}
