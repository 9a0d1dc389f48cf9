pub mod activity;
pub mod admin;
pub mod auth;
pub mod health;
pub mod integration;
pub mod objective;
pub mod partner;
pub mod project;
pub mod rag;
pub mod resource;
pub mod talent;
pub mod task;
pub mod value_chain;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/...                          register, login, login/init, 2fa/verify,
///                                    refresh, logout, change-password, me,
///                                    google/*
///
/// /projects                          list, create
/// /projects/{id}                     get, update, delete
/// /projects/{id}/objectives          objectives of a project
/// /objectives[/{id}]                 CRUD; /{id}/value-chains
/// /value-chains[/{id}]               CRUD; /{id}/activities
/// /activities[/{id}]                 CRUD; /{id}/tasks, /{id}/resources, /{id}/partners
/// /tasks[/{id}]                      CRUD; /{id}/schedules, /{id}/talent-tasks
/// /task-schedules[/{id}]             CRUD
/// /partners[/{id}]                   CRUD; /{id}/activities
/// /activity-partners[/{id}]          CRUD
/// /budget-headings[/{id}]            CRUD
/// /resources[/{id}]                  CRUD; /{id}/specific-resources
/// /specific-resources[/{id}]         CRUD; /kind/{tipo}
/// /contracts[/{id}]                  CRUD; /category/{categoria}
/// /annual-remunerations[/{id}]       CRUD; /year/{anio}
/// /talent-tasks[/{id}]               CRUD
/// /talent/{id}/remunerations         remunerations of a talent record
/// /talent/{id}/tasks                 task assignments of a talent record
///
/// /roles[/{id}]                      CRUD (admin); /name/{name}, /{id}/users, /assign
/// /users[/{id}]                      CRUD (admin); /{id}/projects
///
/// /rag/...                           RAG service proxy
/// /integrations/n8n                  n8n webhook relay
/// ```
///
/// Activity extraction is mounted separately by the router builder, outside
/// the global request timeout.
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/objectives", objective::router())
        .nest("/value-chains", value_chain::router())
        .nest("/activities", activity::router())
        .nest("/tasks", task::router())
        .nest("/task-schedules", task::schedule_router())
        .nest("/partners", partner::router())
        .nest("/activity-partners", partner::contribution_router())
        .nest("/budget-headings", resource::heading_router())
        .nest("/resources", resource::router())
        .nest("/specific-resources", resource::specific_router())
        .nest("/contracts", talent::contract_router())
        .nest("/annual-remunerations", talent::remuneration_router())
        .nest("/talent-tasks", talent::assignment_router())
        .nest("/talent", talent::router())
        .nest("/roles", admin::role_router())
        .nest("/users", admin::user_router())
        .nest("/rag", rag::router(&config.rag))
        .nest("/integrations", integration::router())
}
