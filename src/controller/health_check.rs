use axum::response::Response;

use crate::Result;

use super::format;

pub async fn health() -> Result<Response> {
    format::empty()
}
