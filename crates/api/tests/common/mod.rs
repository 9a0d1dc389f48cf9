#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use rpm_api::auth::jwt::{generate_access_token, JwtConfig};
use rpm_api::auth::password::hash_password;
use rpm_api::auth::two_factor::{CodeDelivery, TwoFactorConfig};
use rpm_api::config::ServerConfig;
use rpm_api::rag::RagConfig;
use rpm_api::router::build_app_router;
use rpm_api::state::AppState;
use std::sync::Arc;
use rpm_core::roles::{PROVIDER_LOCAL, ROLE_ADMIN, ROLE_USER};
use rpm_db::models::user::{CreateUser, User};
use rpm_db::repositories::UserRepo;

pub const ADMIN_ROLE_ID: i64 = 1;
pub const USER_ROLE_ID: i64 = 2;
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
///
/// The RAG service points at a closed port so any accidental call fails
/// fast; tests that need it use [`config_with_rag`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
            refresh_token_expiry_days: 7,
        },
        rag: RagConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            extraction_timeout_secs: 5,
            upload_max_bytes: 50 * 1024 * 1024,
        },
        google: None,
        two_factor: TwoFactorConfig::default(),
        n8n_webhook_url: None,
    }
}

/// [`test_config`] with the RAG service at `base_url`.
pub fn config_with_rag(base_url: &str) -> ServerConfig {
    let mut config = test_config();
    config.rag.base_url = base_url.trim_end_matches('/').to_string();
    config
}

/// Build the full application router over `pool` with the default test config.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Build the full application router with an explicit config.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState::new(pool, config.clone(), reqwest::Client::new());
    build_app_router(state, &config)
}

/// Build the application with sign-in codes going to `delivery`.
pub fn build_test_app_with_delivery(
    pool: PgPool,
    config: ServerConfig,
    delivery: Arc<dyn CodeDelivery>,
) -> Router {
    let state =
        AppState::new(pool, config.clone(), reqwest::Client::new()).with_code_delivery(delivery);
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Users and tokens
// ---------------------------------------------------------------------------

/// Insert a local user with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, email: &str, role_id: i64) -> User {
    let input = CreateUser {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        google_id: None,
        profile_picture_url: None,
        provider: PROVIDER_LOCAL.to_string(),
        role_id,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Mint an access token the test config accepts.
pub fn token_for(user: &User) -> String {
    let role = if user.role_id == ADMIN_ROLE_ID {
        ROLE_ADMIN
    } else {
        ROLE_USER
    };
    generate_access_token(user.id, role, &test_config().jwt).expect("token generation")
}

/// Create a `Usuario` account and return it with a valid token.
pub async fn user_token(pool: &PgPool) -> (User, String) {
    let user = create_user(pool, "member@test.com", USER_ROLE_ID).await;
    let token = token_for(&user);
    (user, token)
}

/// Create an `Administrador` account and return it with a valid token.
pub async fn admin_token(pool: &PgPool) -> (User, String) {
    let user = create_user(pool, "admin@test.com", ADMIN_ROLE_ID).await;
    let token = token_for(&user);
    (user, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should be served")
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
}

fn with_json(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    builder(method, uri, token)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, builder(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(
        app,
        builder(Method::GET, uri, Some(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, with_json(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, with_json(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, with_json(Method::PUT, uri, Some(token), body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(
        app,
        builder(Method::DELETE, uri, Some(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// Send a pre-built request, for cases the helpers above do not cover.
pub async fn send_request(app: Router, request: Request<Body>) -> Response {
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Assert the status and return the JSON body.
pub async fn expect_json(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
