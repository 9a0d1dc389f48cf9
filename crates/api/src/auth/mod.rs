//! Authentication and authorization primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation, validation, and refresh-token helpers.
//! - [`google`] -- Google OAuth authorization-code exchange.
//! - [`two_factor`] -- Emailed sign-in codes and their delivery seam.

pub mod google;
pub mod jwt;
pub mod password;
pub mod two_factor;
