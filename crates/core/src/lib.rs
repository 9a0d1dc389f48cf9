//! Domain primitives for the research-project-management backend.
//!
//! Pure logic only: no database or HTTP dependencies live here so the
//! `db` and `api` crates (and any future client) can share it.

pub mod budget;
pub mod error;
pub mod resource_kind;
pub mod roles;
pub mod session;
pub mod types;
pub mod validation;
