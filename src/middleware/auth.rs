use axum::{extract::Request, middleware::Next, response::Response};

use crate::{controller::render, domain::SessionToken, menu::routes, Result};

/// Sends visitors without a session token to the login page.
pub async fn auth_middleware(
    token: Option<SessionToken>,
    request: Request,
    next: Next,
) -> Result<Response> {
    if token.is_none() {
        return render().redirect(routes::LOGIN);
    }
    Ok(next.run(request).await)
}
