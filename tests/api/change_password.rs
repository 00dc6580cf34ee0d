use fake::{faker::internet::en::Password, Fake};
use wiremock::{
    matchers::{any, bearer_token, body_json, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{assert_response_redirect_to, body_text, session_cookie, spawn_app};

fn change_password_body(current: &str, new: &str, confirm: &str) -> serde_json::Value {
    serde_json::json!({
        "currentPassword": current,
        "newPassword": new,
        "confirmPassword": confirm,
    })
}

#[tokio::test]
async fn you_must_be_logged_in_to_see_the_change_password_form() {
    let test_app = spawn_app().await;

    let response = test_app.get("/password", None).await;

    assert_response_redirect_to(response, "/login");
}

#[tokio::test]
async fn you_must_be_logged_in_to_change_your_password() {
    let test_app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.auth_server)
        .await;

    let body = change_password_body("old-password", "Abc123!x", "Abc123!x");
    let response = test_app.post_change_password(&body, None).await;

    assert_response_redirect_to(response, "/login");
}

#[tokio::test]
async fn change_password_form_shows_the_three_fields() {
    let test_app = spawn_app().await;

    let response = test_app
        .get("/password", Some(&test_app.token_cookie()))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let html = body_text(response).await;
    assert!(html.contains(r#"name="currentPassword""#));
    assert!(html.contains(r#"name="newPassword""#));
    assert!(html.contains(r#"name="confirmPassword""#));
}

#[tokio::test]
async fn missing_fields_are_rejected_without_calling_the_auth_api() {
    let test_app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.auth_server)
        .await;

    let test_cases = vec![
        (
            change_password_body("", "Abc123!x", "Abc123!x"),
            "Please enter current password",
        ),
        (
            change_password_body("old-password", "", "Abc123!x"),
            "Please enter new password",
        ),
        (
            change_password_body("old-password", "Abc123!x", ""),
            "Please enter confirm password",
        ),
    ];

    for (body, message) in test_cases {
        let response = test_app
            .post_change_password(&body, Some(&test_app.token_cookie()))
            .await;
        assert_eq!(response.status().as_u16(), 422);
        let html = body_text(response).await;
        assert!(html.contains(message), "expected `{}` in the page", message);
    }
}

#[tokio::test]
async fn new_password_must_follow_the_policy() {
    let test_app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.auth_server)
        .await;

    let body = change_password_body("old-password", "abc123", "abc123");
    let response = test_app
        .post_change_password(&body, Some(&test_app.token_cookie()))
        .await;

    assert_eq!(response.status().as_u16(), 422);
    let html = body_text(response).await;
    assert!(html.contains(
        "Must contain at least one upper case, lower case, digit, special character and no white space"
    ));
}

#[tokio::test]
async fn new_password_fields_must_match() {
    let test_app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.auth_server)
        .await;

    let body = change_password_body("old-password", "Abc123!x", "Abc123!y");
    let response = test_app
        .post_change_password(&body, Some(&test_app.token_cookie()))
        .await;

    assert_eq!(response.status().as_u16(), 422);
    let html = body_text(response).await;
    assert!(html.contains("The re-entered password does not match"));
}

#[tokio::test]
async fn a_successful_change_redirects_and_flashes_the_message() {
    let test_app = spawn_app().await;
    let current_password: String = Password(8..16).fake();
    let body = change_password_body(&current_password, "Abc123!x", "Abc123!x");

    Mock::given(path("/auth/change-password"))
        .and(method("POST"))
        .and(bearer_token(test_app.token.as_str()))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "flag": true,
            "message": "OK",
        })))
        .expect(1)
        .mount(&test_app.auth_server)
        .await;

    let response = test_app
        .post_change_password(&body, Some(&test_app.token_cookie()))
        .await;
    let session = session_cookie(&response).expect("A session cookie was not set.");
    assert_response_redirect_to(response, "/profile");

    let cookie = format!("{}; {}", test_app.token_cookie(), session);
    let html = body_text(test_app.get("/password", Some(&cookie)).await).await;
    assert!(html.contains("OK"));
}

#[tokio::test]
async fn server_field_errors_are_shown_next_to_their_fields() {
    let test_app = spawn_app().await;
    Mock::given(path("/auth/change-password"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "flag": false,
            "errors": { "newPassword": "too weak" },
        })))
        .expect(1)
        .mount(&test_app.auth_server)
        .await;

    let body = change_password_body("old-password", "Abc123!x", "Abc123!x");
    let response = test_app
        .post_change_password(&body, Some(&test_app.token_cookie()))
        .await;

    assert_eq!(response.status().as_u16(), 422);
    let html = body_text(response).await;
    assert!(html.contains("too weak"));
    assert!(html.contains(r#"value="Abc123!x""#));
}

#[tokio::test]
async fn an_auth_api_failure_keeps_the_form_open() {
    let test_app = spawn_app().await;
    Mock::given(path("/auth/change-password"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test_app.auth_server)
        .await;

    let body = change_password_body("old-password", "Abc123!x", "Abc123!x");
    let response = test_app
        .post_change_password(&body, Some(&test_app.token_cookie()))
        .await;

    assert_eq!(response.status().as_u16(), 502);
    let session = session_cookie(&response).expect("A session cookie was not set.");
    let html = body_text(response).await;
    assert!(html.contains("could not be changed"));
    assert!(html.contains(r#"value="old-password""#));

    // The failure is also flashed on the next page.
    let cookie = format!("{}; {}", test_app.token_cookie(), session);
    let html = body_text(test_app.get("/password", Some(&cookie)).await).await;
    assert!(html.contains("Your password could not be changed. Please try again."));
}
