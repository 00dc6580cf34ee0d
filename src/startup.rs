use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use axum_messages::MessagesManagerLayer;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use uuid::Uuid;

use crate::{
    auth_client::AuthClient,
    configuration::Settings,
    controller::{
        change_password, change_password_form, edit_profile, health, logout, profile_menu,
        view_profile,
    },
    domain::ValidationMessages,
    middleware::auth_middleware,
    view_engine::TeraView,
    Result,
};

#[derive(Clone)]
pub struct AppState {
    pub auth_client: Arc<AuthClient>,
    pub tera_engine: Arc<TeraView>,
    pub validation_messages: Arc<ValidationMessages>,
    pub session_store: MemoryStore,
    pub show_profile: bool,
}

impl AppState {
    pub fn build(configuration: &Settings) -> Result<Self> {
        Ok(Self {
            auth_client: Arc::new(configuration.auth_api.client()?),
            tera_engine: Arc::new(TeraView::build()?),
            validation_messages: Arc::new(configuration.messages.clone()),
            session_store: MemoryStore::default(),
            show_profile: configuration.application.show_profile,
        })
    }
}

pub fn app(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(state.session_store.clone()).with_secure(false);

    let signed_in = Router::new()
        .route(
            "/password",
            get(change_password_form).post(change_password),
        )
        .route("/logout", post(logout))
        .route_layer(middleware::from_fn(auth_middleware));

    Router::new()
        .route("/health", get(health))
        .route("/profile", get(profile_menu))
        .route("/profile/view", get(view_profile))
        .route("/profile/edit", get(edit_profile))
        .merge(signed_in)
        .layer(MessagesManagerLayer)
        .layer(session_layer)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    request_id = %Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
}

pub async fn run(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let app = app(state);
    axum::serve(listener, app).await
}
