//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO carrying every mutable field (updates
//!   overwrite the whole row)
//!
//! JSON field names are camelCase; row ids go out under their entity
//! name (`proyectoId`, `tareaId`, ...).

pub mod activity;
pub mod activity_partner;
pub mod annual_remuneration;
pub mod budget_heading;
pub mod contract;
pub mod objective;
pub mod partner;
pub mod project;
pub mod resource;
pub mod role;
pub mod session;
pub mod specific_resource;
pub mod talent_task;
pub mod task;
pub mod task_schedule;
pub mod two_factor;
pub mod user;
pub mod value_chain;
