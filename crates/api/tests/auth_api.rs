//! HTTP-level integration tests for auth and admin endpoints.
//!
//! Covers registration, login, token refresh, logout, password change,
//! RBAC enforcement, and role/user administration.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, create_user, delete_auth, expect_json, get, get_auth, post_json,
    post_json_auth, put_json_auth, user_token, TEST_PASSWORD, USER_ROLE_ID,
};
use rpm_db::repositories::UserRepo;
use serde_json::{json, Value};
use sqlx::PgPool;

async fn login(app: axum::Router, email: &str, password: &str) -> Value {
    let body = json!({ "email": email, "password": password });
    expect_json(post_json(app, "/api/v1/auth/login", body).await, StatusCode::OK).await
}

// ---------------------------------------------------------------------------
// Registration and login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn register_creates_usuario_and_signs_in(pool: PgPool) {
    let app = common::build_test_app(pool);

    let json = expect_json(
        post_json(
            app,
            "/api/v1/auth/register",
            json!({
                "firstName": "Ana",
                "lastName": "Rojas",
                "email": "Ana@Example.org",
                "password": "suficiente"
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    assert!(json["accessToken"].is_string());
    assert!(json["refreshToken"].is_string());
    assert_eq!(json["expiresIn"], 3600);
    assert_eq!(json["user"]["email"], "ana@example.org");
    assert_eq!(json["user"]["role"], "Usuario");
    assert_eq!(json["user"]["provider"], "local");
    assert!(json["user"].get("passwordHash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_rejects_short_password_and_duplicate_email(pool: PgPool) {
    create_user(&pool, "taken@test.com", USER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let short = post_json(
        app.clone(),
        "/api/v1/auth/register",
        json!({ "firstName": "A", "lastName": "B", "email": "new@test.com", "password": "corta" }),
    )
    .await;
    assert_eq!(short.status(), StatusCode::BAD_REQUEST);

    let duplicate = post_json(
        app,
        "/api/v1/auth/register",
        json!({
            "firstName": "A",
            "lastName": "B",
            "email": "TAKEN@test.com",
            "password": "suficiente"
        }),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_success_and_failures(pool: PgPool) {
    let user = create_user(&pool, "login@test.com", USER_ROLE_ID).await;
    let app = common::build_test_app(pool.clone());

    let json = login(app.clone(), "LOGIN@test.com", TEST_PASSWORD).await;
    assert_eq!(json["user"]["id"], user.id);

    let wrong = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "email": "login@test.com", "password": "incorrect" }),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let ghost = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "email": "ghost@test.com", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(ghost.status(), StatusCode::UNAUTHORIZED);

    UserRepo::update(
        &pool,
        user.id,
        &rpm_db::models::user::UpdateUser {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role_id: user.role_id,
            is_active: false,
        },
    )
    .await
    .unwrap();

    let inactive = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "login@test.com", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(inactive.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn refresh_rotates_the_token(pool: PgPool) {
    create_user(&pool, "refresh@test.com", USER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let first = login(app.clone(), "refresh@test.com", TEST_PASSWORD).await;
    let original = first["refreshToken"].as_str().unwrap().to_string();

    let rotated = expect_json(
        post_json(
            app.clone(),
            "/api/v1/auth/refresh",
            json!({ "refreshToken": original }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_ne!(rotated["refreshToken"].as_str().unwrap(), original);

    let reused = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({ "refreshToken": original }),
    )
    .await;
    assert_eq!(reused.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_revokes_refresh_tokens(pool: PgPool) {
    create_user(&pool, "logout@test.com", USER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let session = login(app.clone(), "logout@test.com", TEST_PASSWORD).await;
    let access = session["accessToken"].as_str().unwrap();
    let refresh = session["refreshToken"].as_str().unwrap();

    let response = post_json_auth(app.clone(), "/api/v1/auth/logout", access, json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let after = post_json(app, "/api/v1/auth/refresh", json!({ "refreshToken": refresh })).await;
    assert_eq!(after.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn me_returns_the_caller(pool: PgPool) {
    let (user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);

    let json = expect_json(
        get_auth(app.clone(), "/api/v1/auth/me", &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["role"], "Usuario");

    let anonymous = get(app, "/api/v1/auth/me").await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn change_password_requires_current_password(pool: PgPool) {
    let (user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);

    let wrong = post_json_auth(
        app.clone(),
        "/api/v1/auth/change-password",
        &token,
        json!({ "currentPassword": "nope", "newPassword": "otra-clave-larga" }),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let ok = post_json_auth(
        app.clone(),
        "/api/v1/auth/change-password",
        &token,
        json!({ "currentPassword": TEST_PASSWORD, "newPassword": "otra-clave-larga" }),
    )
    .await;
    assert_eq!(ok.status(), StatusCode::NO_CONTENT);

    let json = login(app, &user.email, "otra-clave-larga").await;
    assert_eq!(json["user"]["id"], user.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn google_endpoints_are_501_when_unconfigured(pool: PgPool) {
    let app = common::build_test_app(pool);

    let url = get(app.clone(), "/api/v1/auth/google/url").await;
    assert_eq!(url.status(), StatusCode::NOT_IMPLEMENTED);

    let callback = post_json(app, "/api/v1/auth/google/callback", json!({ "code": "abc" })).await;
    assert_eq!(callback.status(), StatusCode::NOT_IMPLEMENTED);
}

// ---------------------------------------------------------------------------
// RBAC and administration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn usuario_cannot_administer(pool: PgPool) {
    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);

    for uri in ["/api/v1/roles", "/api/v1/users"] {
        let response = get_auth(app.clone(), uri, &token).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "FORBIDDEN");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_manages_roles(pool: PgPool) {
    let (_admin, token) = admin_token(&pool).await;
    let member = create_user(&pool, "member@test.com", USER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let roles = expect_json(
        get_auth(app.clone(), "/api/v1/roles", &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(roles.as_array().unwrap().len(), 2);

    let by_name = expect_json(
        get_auth(app.clone(), "/api/v1/roles/name/Usuario", &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(by_name["id"], USER_ROLE_ID);

    let missing = get_auth(app.clone(), "/api/v1/roles/name/Nadie", &token).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let reviewer = expect_json(
        post_json_auth(
            app.clone(),
            "/api/v1/roles",
            &token,
            json!({ "name": "Evaluador", "description": "Revisa proyectos" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let reviewer_id = reviewer["id"].as_i64().unwrap();
    assert_eq!(reviewer["isActive"], true);

    let duplicate = post_json_auth(
        app.clone(),
        "/api/v1/roles",
        &token,
        json!({ "name": "Evaluador" }),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let assigned = expect_json(
        post_json_auth(
            app.clone(),
            "/api/v1/roles/assign",
            &token,
            json!({ "userId": member.id, "roleId": reviewer_id }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(assigned["role"], "Evaluador");

    let members = expect_json(
        get_auth(app.clone(), &format!("/api/v1/roles/{reviewer_id}/users"), &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(members[0]["id"], member.id);

    // Still referenced by the member.
    let in_use = delete_auth(app.clone(), &format!("/api/v1/roles/{reviewer_id}"), &token).await;
    assert_eq!(in_use.status(), StatusCode::CONFLICT);

    let renamed = expect_json(
        put_json_auth(
            app,
            &format!("/api/v1/roles/{reviewer_id}"),
            &token,
            json!({
                "name": "Revisor",
                "description": "",
                "permissions": ["projects:read"],
                "isActive": false
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(renamed["name"], "Revisor");
    assert_eq!(renamed["permissions"], json!(["projects:read"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_manages_users(pool: PgPool) {
    let (admin, token) = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let created = expect_json(
        post_json_auth(
            app.clone(),
            "/api/v1/users",
            &token,
            json!({
                "firstName": "Luis",
                "lastName": "Mora",
                "email": "Luis@Test.com",
                "password": "clave-segura",
                "roleId": USER_ROLE_ID
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["email"], "luis@test.com");
    assert_eq!(created["role"], "Usuario");

    let users = expect_json(
        get_auth(app.clone(), "/api/v1/users", &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(users.as_array().unwrap().len(), 2);

    let updated = expect_json(
        put_json_auth(
            app.clone(),
            &format!("/api/v1/users/{id}"),
            &token,
            json!({
                "firstName": "Luis",
                "lastName": "Mora",
                "email": "luis@test.com",
                "roleId": USER_ROLE_ID,
                "isActive": false
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["isActive"], false);

    let self_delete =
        delete_auth(app.clone(), &format!("/api/v1/users/{}", admin.id), &token).await;
    assert_eq!(self_delete.status(), StatusCode::BAD_REQUEST);

    let deleted = delete_auth(app.clone(), &format!("/api/v1/users/{id}"), &token).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = get_auth(app, &format!("/api/v1/users/{id}"), &token).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}
