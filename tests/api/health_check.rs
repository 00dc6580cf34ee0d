use axum::http::{header::CONTENT_LENGTH, HeaderValue};

use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_works() {
    let test_app = spawn_app().await;

    let response = test_app.get("/health", None).await;

    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get(CONTENT_LENGTH),
        Some(&HeaderValue::from_str("0").unwrap())
    );
}

#[tokio::test]
async fn health_check_does_not_need_a_session() {
    let test_app = spawn_app().await;

    let response = test_app.get("/health", Some("token=whatever")).await;

    assert_eq!(response.status().as_u16(), 200);
}
