//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete plus parent-scoped lists) for a single entity type.
//! Handlers delegate to the corresponding repository in `rpm_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod activity;
pub mod activity_partner;
pub mod annual_remuneration;
pub mod auth;
pub mod budget_heading;
pub mod contract;
pub mod integration;
pub mod objective;
pub mod partner;
pub mod project;
pub mod rag;
pub mod resource;
pub mod role;
pub mod specific_resource;
pub mod talent_task;
pub mod task;
pub mod task_schedule;
pub mod user;
pub mod value_chain;
