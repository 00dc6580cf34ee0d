use axum::http::header::SET_COOKIE;
use wiremock::{
    matchers::{bearer_token, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{assert_response_redirect_to, spawn_app};

#[tokio::test]
async fn logout_ends_the_remote_session_and_clears_the_token() {
    let test_app = spawn_app().await;
    Mock::given(path("/auth/logout"))
        .and(method("POST"))
        .and(bearer_token(test_app.token.as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&test_app.auth_server)
        .await;

    let response = test_app.post_logout(&test_app.token_cookie()).await;

    let cleared = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.starts_with("token="));
    assert!(cleared, "the token cookie was not cleared");
    assert_response_redirect_to(response, "/login");
}

#[tokio::test]
async fn logout_still_signs_out_when_the_auth_api_fails() {
    let test_app = spawn_app().await;
    Mock::given(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test_app.auth_server)
        .await;

    let response = test_app.post_logout(&test_app.token_cookie()).await;

    assert_response_redirect_to(response, "/login");
}
