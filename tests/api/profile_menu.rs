use wiremock::{matchers::any, Mock, ResponseTemplate};

use crate::helpers::{assert_response_redirect_to, body_text, spawn_app};

#[tokio::test]
async fn visitors_without_a_session_see_a_login_link() {
    let test_app = spawn_app().await;

    let response = test_app.get("/profile", None).await;

    assert_eq!(response.status().as_u16(), 200);
    let html = body_text(response).await;
    assert!(html.contains(">Login</a>"));
    assert!(!html.contains("Logout"));
}

#[tokio::test]
async fn candidates_see_their_connections() {
    let test_app = spawn_app().await;
    test_app.mock_current_user("candidate").await;

    let response = test_app
        .get("/profile", Some(&test_app.token_cookie()))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let html = body_text(response).await;
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("Connection Notifications"));
    assert!(html.contains(">Connections</a>"));
    assert!(html.contains(">Change Password</a>"));
    assert!(html.contains("Logout"));
}

#[tokio::test]
async fn companies_do_not_see_connections() {
    let test_app = spawn_app().await;
    test_app.mock_current_user("company").await;

    let response = test_app
        .get("/profile", Some(&test_app.token_cookie()))
        .await;

    let html = body_text(response).await;
    assert!(html.contains(">View Profile</a>"));
    assert!(html.contains(">Create a company</a>"));
    assert!(!html.contains("Connections"));
}

#[tokio::test]
async fn a_rejected_token_is_treated_as_signed_out() {
    let test_app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(401))
        .mount(&test_app.auth_server)
        .await;

    let response = test_app
        .get("/profile", Some(&test_app.token_cookie()))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(body_text(response).await.contains(">Login</a>"));
}

#[tokio::test]
async fn an_unavailable_auth_api_is_a_bad_gateway() {
    let test_app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .mount(&test_app.auth_server)
        .await;

    let response = test_app
        .get("/profile", Some(&test_app.token_cookie()))
        .await;

    assert_eq!(response.status().as_u16(), 502);
}

#[tokio::test]
async fn view_profile_redirects_by_role() {
    let test_app = spawn_app().await;
    test_app.mock_current_user("company").await;

    let response = test_app
        .get("/profile/view", Some(&test_app.token_cookie()))
        .await;

    assert_response_redirect_to(response, "/company");
}

#[tokio::test]
async fn edit_profile_redirects_candidates_to_their_profile() {
    let test_app = spawn_app().await;
    test_app.mock_current_user("candidate").await;

    let response = test_app
        .get("/profile/edit", Some(&test_app.token_cookie()))
        .await;

    assert_response_redirect_to(response, "/candidate/profile");
}

#[tokio::test]
async fn edit_profile_without_an_editable_profile_stays_on_the_menu() {
    let test_app = spawn_app().await;
    test_app.mock_current_user("admin").await;

    let response = test_app
        .get("/profile/edit", Some(&test_app.token_cookie()))
        .await;

    assert_response_redirect_to(response, "/profile");
}

#[tokio::test]
async fn profile_navigation_requires_a_session() {
    let test_app = spawn_app().await;

    let response = test_app.get("/profile/view", None).await;

    assert_response_redirect_to(response, "/login");
}
