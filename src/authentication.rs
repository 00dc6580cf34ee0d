use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::{domain::SessionToken, errors::Error, Result};

/// Cookie carrying the session token for browser requests.
pub const TOKEN_COOKIE: &str = "token";

/// Reads the session token from `Authorization: Bearer`, falling back to
/// the `token` cookie.
#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Ok(TypedHeader(Authorization(bearer))) =
            parts.extract::<TypedHeader<Authorization<Bearer>>>().await
        {
            return SessionToken::parse(bearer.token()).map_err(Error::Unauthorized);
        }

        let jar = CookieJar::from_headers(&parts.headers);
        match jar.get(TOKEN_COOKIE) {
            Some(cookie) => SessionToken::parse(cookie.value()).map_err(Error::Unauthorized),
            None => Err(Error::Unauthorized("missing session token".to_string())),
        }
    }
}
