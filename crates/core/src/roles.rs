//! Well-known role name constants.
//!
//! These must match the seed data in `20251106000001_create_roles_and_users.sql`.

use crate::types::DbId;

pub const ROLE_ADMIN: &str = "Administrador";
pub const ROLE_USER: &str = "Usuario";

/// Seeded id of the `Usuario` role, assigned to self-registered accounts.
pub const DEFAULT_ROLE_ID: DbId = 2;

/// Authentication provider of an account.
pub const PROVIDER_LOCAL: &str = "local";
pub const PROVIDER_GOOGLE: &str = "google";
