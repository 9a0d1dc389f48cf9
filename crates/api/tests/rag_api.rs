//! HTTP-level tests for the RAG proxy, against a `wiremock` stand-in for
//! the RAG service.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{
    body_bytes, body_json, expect_json, get_auth, post_json_auth, send_request, user_token,
};
use serde_json::json;
use sqlx::PgPool;
use std::time::Duration;
use wiremock::matchers::{body_json as body_matches, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[sqlx::test(migrations = "../db/migrations")]
async fn query_is_forwarded_and_answer_translated(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(body_matches(json!({
            "question": "Cuanto cuesta?",
            "project_id": 3,
            "top_k": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Unos 50.000",
            "sources": [{ "content": "Tabla 2", "metadata": { "page": 4 }, "similarity": 0.9 }],
            "confidence": 0.8
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app_with(pool, common::config_with_rag(&server.uri()));

    let json = expect_json(
        post_json_auth(
            app,
            "/api/v1/rag/query",
            &token,
            json!({ "question": "Cuanto cuesta?", "projectId": 3 }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(json["answer"], "Unos 50.000");
    assert_eq!(json["sources"][0]["metadata"]["page"], 4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_question_never_reaches_upstream(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app_with(pool, common::config_with_rag(&server.uri()));

    let response =
        post_json_auth(app.clone(), "/api/v1/rag/query", &token, json!({ "question": "  " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app,
        "/api/v1/rag/budget/generate",
        &token,
        json!({ "projectId": 0, "projectDescription": "Planta" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upstream_error_is_passed_through(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/9/documents"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw(r#"{"detail":"Project 9 has no documents"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app_with(pool, common::config_with_rag(&server.uri()));

    let response = get_auth(app, "/api/v1/rag/projects/9/documents", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_bytes(response).await,
        br#"{"detail":"Project 9 has no documents"}"#.to_vec()
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unreachable_service_is_500(pool: PgPool) {
    let (_user, token) = user_token(&pool).await;
    // Default test config points at a closed port.
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/rag/health", &token).await;

    let json = expect_json(response, StatusCode::INTERNAL_SERVER_ERROR).await;
    assert_eq!(json["code"], "UPSTREAM_UNAVAILABLE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn suggestions_forward_the_category(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/4/budget/suggestions"))
        .and(query_param("category", "GastosViaje"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "project_id": 4,
            "suggestions": [{
                "category": "GastosViaje",
                "suggested_items": [],
                "reasoning": "Sin viajes previstos",
                "confidence": 0.5
            }]
        })))
        .mount(&server)
        .await;

    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app_with(pool, common::config_with_rag(&server.uri()));

    let json = expect_json(
        get_auth(
            app,
            "/api/v1/rag/projects/4/budget/suggestions?category=GastosViaje",
            &token,
        )
        .await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(json["projectId"], 4);
    assert_eq!(json["suggestions"][0]["suggestedItems"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn extraction_body_is_returned_verbatim(pool: PgPool) {
    let raw = r#"{"project_id": 5, "activities": [{"name": "Diagnostico", "unit_value": 1200.0}], "total_activities": 1}"#;
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/5/activities/extract"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(raw, "application/json"))
        .mount(&server)
        .await;

    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app_with(pool, common::config_with_rag(&server.uri()));

    let response = get_auth(app, "/api/v1/rag/projects/5/activities/extract", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(body_bytes(response).await, raw.as_bytes().to_vec());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn extraction_error_status_is_passed_through(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/5/activities/extract"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_raw(r#"{"detail":"No documents indexed"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app_with(pool, common::config_with_rag(&server.uri()));

    let response = get_auth(app, "/api/v1/rag/projects/5/activities/extract", &token).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "No documents indexed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_extraction_is_502(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/5/activities/extract"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app_with(pool, common::config_with_rag(&server.uri()));

    let response = get_auth(app, "/api/v1/rag/projects/5/activities/extract", &token).await;

    let json = expect_json(response, StatusCode::BAD_GATEWAY).await;
    assert_eq!(json["code"], "UPSTREAM_INVALID_RESPONSE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn budget_save_is_not_implemented(pool: PgPool) {
    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);

    let response =
        post_json_auth(app, "/api/v1/rag/projects/1/budget/save", &token, json!({})).await;

    let json = expect_json(response, StatusCode::NOT_IMPLEMENTED).await;
    assert_eq!(json["code"], "NOT_IMPLEMENTED");
}

fn multipart_request(token: &str, parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
    let boundary = "rpm-test-boundary";
    let mut body = String::new();
    for (name, filename, content) in parts {
        body.push_str(&format!("--{boundary}\r\n"));
        match filename {
            Some(filename) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                 Content-Type: text/plain\r\n\r\n"
            )),
            None => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
            )),
        }
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/rag/documents/upload")
        .header("authorization", format!("Bearer {token}"))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_forwards_file_with_query_metadata(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/upload"))
        .and(query_param("project_id", "3"))
        .and(query_param("document_type", "budget"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Document uploaded",
            "document_id": "doc-42",
            "filename": "plan.txt",
            "project_id": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app_with(pool, common::config_with_rag(&server.uri()));

    let request = multipart_request(
        &token,
        &[
            ("file", Some("plan.txt"), "Presupuesto 2025"),
            ("projectId", None, "3"),
            ("documentType", None, "budget"),
        ],
    );
    let json = expect_json(send_request(app, request).await, StatusCode::OK).await;

    assert_eq!(json["documentId"], "doc-42");
    assert_eq!(json["projectId"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_without_file_is_rejected(pool: PgPool) {
    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);

    let request = multipart_request(&token, &[("projectId", None, "3")]);
    let json = expect_json(send_request(app, request).await, StatusCode::BAD_REQUEST).await;

    assert_eq!(json["error"], "No file provided");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_above_two_mebibytes_is_forwarded(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Document uploaded",
            "document_id": "doc-big",
            "filename": "anexo.txt",
            "project_id": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app_with(pool, common::config_with_rag(&server.uri()));

    let content = "a".repeat(3 * 1024 * 1024);
    let request = multipart_request(&token, &[("file", Some("anexo.txt"), &content)]);
    let json = expect_json(send_request(app, request).await, StatusCode::OK).await;

    assert_eq!(json["documentId"], "doc-big");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_over_configured_limit_is_413(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (_user, token) = user_token(&pool).await;
    let mut config = common::config_with_rag(&server.uri());
    config.rag.upload_max_bytes = 1024;
    let app = common::build_test_app_with(pool, config);

    let content = "a".repeat(4 * 1024);
    let request = multipart_request(&token, &[("file", Some("anexo.txt"), &content)]);
    let response = send_request(app, request).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

const EXTRACTION_BODY: &str = r#"{"project_id": 5, "activities": [], "total_activities": 0}"#;

#[sqlx::test(migrations = "../db/migrations")]
async fn extraction_may_outlast_the_request_timeout(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/5/activities/extract"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(EXTRACTION_BODY, "application/json")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let (_user, token) = user_token(&pool).await;
    let mut config = common::config_with_rag(&server.uri());
    config.request_timeout_secs = 1;
    config.rag.extraction_timeout_secs = 3;
    let app = common::build_test_app_with(pool, config);

    let response = get_auth(app, "/api/v1/rag/projects/5/activities/extract", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, EXTRACTION_BODY.as_bytes().to_vec());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn slow_extraction_past_its_timeout_is_500(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/5/activities/extract"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(EXTRACTION_BODY, "application/json")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let (_user, token) = user_token(&pool).await;
    let mut config = common::config_with_rag(&server.uri());
    config.rag.extraction_timeout_secs = 1;
    let app = common::build_test_app_with(pool, config);

    let response = get_auth(app, "/api/v1/rag/projects/5/activities/extract", &token).await;

    let json = expect_json(response, StatusCode::INTERNAL_SERVER_ERROR).await;
    assert_eq!(json["code"], "UPSTREAM_UNAVAILABLE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unreachable_extraction_is_500(pool: PgPool) {
    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/rag/projects/5/activities/extract", &token).await;

    let json = expect_json(response, StatusCode::INTERNAL_SERVER_ERROR).await;
    assert_eq!(json["code"], "UPSTREAM_UNAVAILABLE");
}
