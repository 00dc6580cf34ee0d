use axum::{debug_handler, extract::State, response::Response};
use axum_messages::Messages;
use reqwest::StatusCode;
use serde::Serialize;

use crate::{
    domain::{CurrentUser, SessionToken},
    menu::{edit_profile_target, routes, view_profile_target, ProfileMenu},
    startup::AppState,
    Result,
};

use super::format;

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub menu: ProfileMenu,
    pub messages: Vec<String>,
}

impl ProfileView {
    pub fn signed_out() -> Self {
        Self {
            menu: ProfileMenu::signed_out(),
            messages: Vec::new(),
        }
    }
}

/// Looks up the signed-in user. A token the auth API no longer accepts is
/// treated as no session at all.
async fn load_user(state: &AppState, token: Option<SessionToken>) -> Result<Option<CurrentUser>> {
    let Some(token) = token else {
        return Ok(None);
    };
    match state.auth_client.current_user(&token).await {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.status() == Some(StatusCode::UNAUTHORIZED) => {
            tracing::info!("Session token rejected by the auth API");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[debug_handler]
pub async fn profile_menu(
    token: Option<SessionToken>,
    messages: Messages,
    State(state): State<AppState>,
) -> Result<Response> {
    let menu = match load_user(&state, token).await? {
        Some(user) => ProfileMenu::for_user(&user, state.show_profile),
        None => ProfileMenu::signed_out(),
    };
    let messages = messages
        .into_iter()
        .map(|msg| format!("{}", msg))
        .collect::<Vec<_>>();

    format::render().view(
        &state.tera_engine,
        "profile_menu.html",
        ProfileView { menu, messages },
    )
}

#[debug_handler]
pub async fn view_profile(
    token: Option<SessionToken>,
    State(state): State<AppState>,
) -> Result<Response> {
    match load_user(&state, token).await? {
        Some(user) => format::render().redirect(view_profile_target(&user.role)),
        None => format::render().redirect(routes::LOGIN),
    }
}

#[debug_handler]
pub async fn edit_profile(
    token: Option<SessionToken>,
    State(state): State<AppState>,
) -> Result<Response> {
    let Some(user) = load_user(&state, token).await? else {
        return format::render().redirect(routes::LOGIN);
    };
    let target = edit_profile_target(&user.role).unwrap_or(routes::PROFILE);
    format::render().redirect(target)
}
