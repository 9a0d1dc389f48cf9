//! Google sign-in against `wiremock` stand-ins for Google's token and
//! userinfo endpoints.

mod common;

use axum::http::StatusCode;
use common::{create_user, expect_json, get, post_json, USER_ROLE_ID};
use rpm_api::auth::google::GoogleConfig;
use rpm_api::config::ServerConfig;
use rpm_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn google_config(server: &MockServer) -> ServerConfig {
    let mut config = common::test_config();
    config.google = Some(GoogleConfig {
        client_id: "client-123".into(),
        client_secret: "very-secret".into(),
        redirect_uri: "http://localhost:3000/auth/google/callback".into(),
        auth_url: "https://accounts.google.com/o/oauth2/v2/auth".into(),
        token_url: format!("{}/token", server.uri()),
        userinfo_url: format!("{}/userinfo", server.uri()),
    });
    config
}

async fn mount_google(server: &MockServer, profile: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("code=good-code"))
        .and(body_string_contains("client_secret=very-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "google-access",
            "token_type": "Bearer",
            "expires_in": 3599
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .and(header("authorization", "Bearer google-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("code=bad-code"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid_grant" })))
        .mount(server)
        .await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn authorization_url_hides_the_secret(pool: PgPool) {
    let server = MockServer::start().await;
    let app = common::build_test_app_with(pool, google_config(&server));

    let json = expect_json(get(app, "/api/v1/auth/google/url").await, StatusCode::OK).await;

    let url = json["authUrl"].as_str().unwrap();
    assert!(url.contains("client_id=client-123"));
    assert!(!url.contains("very-secret"));
    assert_eq!(json["state"].as_str().unwrap().len(), 32);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn callback_provisions_a_google_user(pool: PgPool) {
    let server = MockServer::start().await;
    mount_google(
        &server,
        json!({
            "id": "g-1",
            "email": "Nueva@Gmail.com",
            "verified_email": true,
            "given_name": "Nueva",
            "family_name": "Persona",
            "picture": "https://example.org/p.png"
        }),
    )
    .await;
    let app = common::build_test_app_with(pool.clone(), google_config(&server));

    let json = expect_json(
        post_json(app, "/api/v1/auth/google/callback", json!({ "code": "good-code" })).await,
        StatusCode::OK,
    )
    .await;

    assert!(json["accessToken"].is_string());
    assert_eq!(json["user"]["email"], "nueva@gmail.com");
    assert_eq!(json["user"]["provider"], "google");
    assert_eq!(json["user"]["role"], "Usuario");

    let stored = UserRepo::find_by_google_id(&pool, "g-1").await.unwrap().unwrap();
    assert!(stored.password_hash.is_empty());

    // A Google-only account cannot use the password form.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "nueva@gmail.com", "password": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn callback_links_an_existing_account(pool: PgPool) {
    let existing = create_user(&pool, "ana@test.com", USER_ROLE_ID).await;
    let server = MockServer::start().await;
    mount_google(
        &server,
        json!({ "id": "g-ana", "email": "ana@test.com", "verified_email": true }),
    )
    .await;
    let app = common::build_test_app_with(pool.clone(), google_config(&server));

    let json = expect_json(
        post_json(app, "/api/v1/auth/google/callback", json!({ "code": "good-code" })).await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(json["user"]["id"], existing.id);
    let linked = UserRepo::find_by_id(&pool, existing.id).await.unwrap().unwrap();
    assert_eq!(linked.google_id.as_deref(), Some("g-ana"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rejected_code_is_401(pool: PgPool) {
    let server = MockServer::start().await;
    mount_google(&server, json!({ "id": "unused", "email": "x@test.com" })).await;
    let app = common::build_test_app_with(pool, google_config(&server));

    let response =
        post_json(app, "/api/v1/auth/google/callback", json!({ "code": "bad-code" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unverified_email_is_not_linked(pool: PgPool) {
    let existing = create_user(&pool, "ana@test.com", USER_ROLE_ID).await;
    let server = MockServer::start().await;
    mount_google(
        &server,
        json!({ "id": "g-intruder", "email": "ana@test.com", "verified_email": false }),
    )
    .await;
    let app = common::build_test_app_with(pool.clone(), google_config(&server));

    let response =
        post_json(app, "/api/v1/auth/google/callback", json!({ "code": "good-code" })).await;

    let json = expect_json(response, StatusCode::UNAUTHORIZED).await;
    assert_eq!(json["error"], "Google account email is not verified");
    let untouched = UserRepo::find_by_id(&pool, existing.id).await.unwrap().unwrap();
    assert_eq!(untouched.google_id, None);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unverified_email_is_not_provisioned(pool: PgPool) {
    let server = MockServer::start().await;
    // No `verified_email` field at all counts as unverified.
    mount_google(&server, json!({ "id": "g-new", "email": "nadie@test.com" })).await;
    let app = common::build_test_app_with(pool.clone(), google_config(&server));

    let response =
        post_json(app, "/api/v1/auth/google/callback", json!({ "code": "good-code" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(UserRepo::find_by_google_id(&pool, "g-new").await.unwrap().is_none());
}
