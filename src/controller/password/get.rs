use axum::{debug_handler, extract::State, response::Response};
use axum_messages::Messages;

use crate::{
    controller::format,
    domain::{ChangePasswordForm, FieldErrors},
    startup::AppState,
    Result,
};

use super::PasswordModalView;

#[debug_handler]
pub async fn change_password_form(
    messages: Messages,
    State(state): State<AppState>,
) -> Result<Response> {
    let messages = messages
        .into_iter()
        .map(|msg| format!("{}", msg))
        .collect::<Vec<_>>();
    let form = ChangePasswordForm::default();
    let errors = FieldErrors::default();

    format::render().view(
        &state.tera_engine,
        "password.html",
        PasswordModalView {
            form: (&form).into(),
            errors: &errors,
            messages,
            failed: false,
        },
    )
}
