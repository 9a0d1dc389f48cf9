//! HTTP-level tests for the project hierarchy: projects, objectives, value
//! chains, activities, tasks and task schedules.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, expect_json, get_auth, post_json_auth, put_json_auth, user_token,
};
use serde_json::json;
use sqlx::PgPool;

/// Create a project → objective → value chain → activity chain and return
/// the four ids.
async fn seed_hierarchy(app: &axum::Router, token: &str, usuario_id: i64) -> (i64, i64, i64, i64) {
    let project = expect_json(
        post_json_auth(
            app.clone(),
            "/api/v1/projects",
            token,
            json!({ "nombre": "Bioinsumos", "usuarioId": usuario_id }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let proyecto_id = project["proyectoId"].as_i64().unwrap();

    let objective = expect_json(
        post_json_auth(
            app.clone(),
            "/api/v1/objectives",
            token,
            json!({
                "proyectoId": proyecto_id,
                "nombre": "Objetivo 1",
                "descripcion": "Desarrollar el producto",
                "resultadoEsperado": "Prototipo validado"
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let objetivo_id = objective["objetivoId"].as_i64().unwrap();

    let chain = expect_json(
        post_json_auth(
            app.clone(),
            "/api/v1/value-chains",
            token,
            json!({
                "objetivoId": objetivo_id,
                "nombre": "Cadena 1",
                "objetivoEspecifico": "Escalar la produccion"
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let cadena_id = chain["cadenaDeValorId"].as_i64().unwrap();

    let activity = expect_json(
        post_json_auth(
            app.clone(),
            "/api/v1/activities",
            token,
            json!({
                "cadenaDeValorId": cadena_id,
                "nombre": "Ensayos de campo",
                "descripcion": "Pruebas en finca",
                "justificacion": "Validar eficacia",
                "duracionAnios": 2,
                "especificacionesTecnicas": "Parcelas de 1 ha",
                "valorUnitario": 1000.0,
                "totalesPorAnio": [1500.5, 1000.0]
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let actividad_id = activity["actividadId"].as_i64().unwrap();

    (proyecto_id, objetivo_id, cadena_id, actividad_id)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_get_project(pool: PgPool) {
    let (user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);

    let created = expect_json(
        post_json_auth(
            app.clone(),
            "/api/v1/projects",
            &token,
            json!({ "nombre": "P", "usuarioId": user.id }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let id = created["proyectoId"].as_i64().expect("proyectoId");
    assert_eq!(created["usuarioId"], user.id);
    assert_eq!(created["estado"], "Activo");

    let fetched = expect_json(
        get_auth(app, &format!("/api/v1/projects/{id}"), &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_empty_array_on_empty_table(pool: PgPool) {
    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);

    for uri in [
        "/api/v1/projects",
        "/api/v1/objectives",
        "/api/v1/activities",
        "/api/v1/task-schedules",
        "/api/v1/projects/999/objectives",
    ] {
        let json = expect_json(get_auth(app.clone(), uri, &token).await, StatusCode::OK).await;
        assert_eq!(json, json!([]), "{uri} should list nothing");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_project_name_is_rejected(pool: PgPool) {
    let (user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/projects",
        &token,
        json!({ "nombre": "", "usuarioId": user.id }),
    )
    .await;

    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_parent_is_a_conflict(pool: PgPool) {
    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/objectives",
        &token,
        json!({
            "proyectoId": 424242,
            "nombre": "Huerfano",
            "descripcion": "",
            "resultadoEsperado": ""
        }),
    )
    .await;

    let json = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "FK_VIOLATION");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_overwrites_every_field(pool: PgPool) {
    let (user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);
    let (proyecto_id, objetivo_id, _, _) = seed_hierarchy(&app, &token, user.id).await;

    let updated = expect_json(
        put_json_auth(
            app.clone(),
            &format!("/api/v1/objectives/{objetivo_id}"),
            &token,
            json!({
                "nombre": "Objetivo renombrado",
                "descripcion": "",
                "resultadoEsperado": "Otro resultado"
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(updated["objetivoId"], objetivo_id);
    assert_eq!(updated["proyectoId"], proyecto_id);
    assert_eq!(updated["nombre"], "Objetivo renombrado");
    assert_eq!(updated["descripcion"], "");
    assert_eq!(updated["resultadoEsperado"], "Otro resultado");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_of_missing_row_is_404(pool: PgPool) {
    let (_user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        app,
        "/api/v1/projects/999",
        &token,
        json!({ "nombre": "X", "estado": "Cerrado" }),
    )
    .await;

    let json = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn activity_total_is_sum_of_yearly_amounts(pool: PgPool) {
    let (user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);
    let (_, _, cadena_id, actividad_id) = seed_hierarchy(&app, &token, user.id).await;

    let activity = expect_json(
        get_auth(app.clone(), &format!("/api/v1/activities/{actividad_id}"), &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(activity["valorTotal"].as_f64(), Some(2500.5));
    assert_eq!(activity["totalesPorAnio"].as_array().unwrap().len(), 2);

    let by_chain = expect_json(
        get_auth(
            app,
            &format!("/api/v1/value-chains/{cadena_id}/activities"),
            &token,
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(by_chain.as_array().unwrap().len(), 1);
    assert_eq!(by_chain[0]["actividadId"], actividad_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn negative_yearly_amount_is_rejected(pool: PgPool) {
    let (user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);
    let (_, _, cadena_id, _) = seed_hierarchy(&app, &token, user.id).await;

    let response = post_json_auth(
        app,
        "/api/v1/activities",
        &token,
        json!({
            "cadenaDeValorId": cadena_id,
            "nombre": "Mala",
            "descripcion": "",
            "justificacion": "",
            "duracionAnios": 1,
            "especificacionesTecnicas": "",
            "valorUnitario": 0,
            "totalesPorAnio": [-1.0]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tasks_and_schedules_hang_off_activities(pool: PgPool) {
    let (user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);
    let (_, _, _, actividad_id) = seed_hierarchy(&app, &token, user.id).await;

    let task = expect_json(
        post_json_auth(
            app.clone(),
            "/api/v1/tasks",
            &token,
            json!({
                "actividadId": actividad_id,
                "nombre": "Preparar suelo",
                "descripcion": "",
                "periodo": "Mes 1",
                "monto": 300.25
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let tarea_id = task["tareaId"].as_i64().unwrap();
    assert_eq!(task["monto"].as_f64(), Some(300.25));

    let schedule = expect_json(
        post_json_auth(
            app.clone(),
            "/api/v1/task-schedules",
            &token,
            json!({
                "tareaId": tarea_id,
                "duracionMeses": 1,
                "duracionDias": 0,
                "fechaInicio": "2025-01-01T00:00:00Z",
                "fechaFin": "2025-02-01T00:00:00Z"
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(schedule["tareaId"], tarea_id);

    let schedules = expect_json(
        get_auth(app.clone(), &format!("/api/v1/tasks/{tarea_id}/schedules"), &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(schedules.as_array().unwrap().len(), 1);

    let backwards = post_json_auth(
        app.clone(),
        "/api/v1/task-schedules",
        &token,
        json!({
            "tareaId": tarea_id,
            "duracionMeses": 0,
            "duracionDias": 0,
            "fechaInicio": "2025-02-01T00:00:00Z",
            "fechaFin": "2025-01-01T00:00:00Z"
        }),
    )
    .await;
    assert_eq!(backwards.status(), StatusCode::BAD_REQUEST);

    let tasks = expect_json(
        get_auth(app, &format!("/api/v1/activities/{actividad_id}/tasks"), &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(tasks[0]["tareaId"], tarea_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_a_project_cascades(pool: PgPool) {
    let (user, token) = user_token(&pool).await;
    let app = common::build_test_app(pool);
    let (proyecto_id, objetivo_id, cadena_id, actividad_id) =
        seed_hierarchy(&app, &token, user.id).await;

    let response =
        delete_auth(app.clone(), &format!("/api/v1/projects/{proyecto_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    for uri in [
        format!("/api/v1/projects/{proyecto_id}"),
        format!("/api/v1/objectives/{objetivo_id}"),
        format!("/api/v1/value-chains/{cadena_id}"),
        format!("/api/v1/activities/{actividad_id}"),
    ] {
        let response = get_auth(app.clone(), &uri, &token).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri} should be gone");
    }

    let again = delete_auth(app, &format!("/api/v1/projects/{proyecto_id}"), &token).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn projects_are_listed_per_user(pool: PgPool) {
    let (user, token) = user_token(&pool).await;
    let other = common::create_user(&pool, "other@test.com", common::USER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    for (name, owner) in [("Mio", user.id), ("Ajeno", other.id)] {
        let response = post_json_auth(
            app.clone(),
            "/api/v1/projects",
            &token,
            json!({ "nombre": name, "usuarioId": owner }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get_auth(app, &format!("/api/v1/users/{}/projects", user.id), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["nombre"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mio"]);
}
