//! Two-factor challenge model and DTOs.

use rpm_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from `two_factor_challenges`.
#[derive(Debug, Clone, FromRow)]
pub struct TwoFactorChallenge {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub code_hash: String,
    pub attempts: i32,
    pub expires_at: Timestamp,
    pub consumed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for opening a challenge.
pub struct CreateTwoFactorChallenge {
    pub user_id: DbId,
    pub token_hash: String,
    pub code_hash: String,
    pub expires_at: Timestamp,
}
