use axum::{
    debug_handler,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{cookie::Cookie, CookieJar};

use crate::{
    authentication::TOKEN_COOKIE, domain::SessionToken, menu::routes, startup::AppState, Result,
};

use super::format;

#[debug_handler]
pub async fn logout(
    token: SessionToken,
    jar: CookieJar,
    State(state): State<AppState>,
) -> Result<Response> {
    if let Err(e) = state.auth_client.logout(&token).await {
        tracing::warn!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to end the remote session"
        );
    }
    let jar = jar.remove(Cookie::build(TOKEN_COOKIE).path("/"));
    Ok((jar, format::render().redirect(routes::LOGIN)?).into_response())
}
