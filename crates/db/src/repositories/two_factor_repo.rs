//! Repository for the `two_factor_challenges` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::two_factor::{CreateTwoFactorChallenge, TwoFactorChallenge};

const COLUMNS: &str =
    "id, user_id, token_hash, code_hash, attempts, expires_at, consumed_at, created_at";

/// Persistence for pending second sign-in steps.
pub struct TwoFactorRepo;

impl TwoFactorRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateTwoFactorChallenge,
    ) -> Result<TwoFactorChallenge, sqlx::Error> {
        let query = format!(
            "INSERT INTO two_factor_challenges (user_id, token_hash, code_hash, expires_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TwoFactorChallenge>(&query)
            .bind(input.user_id)
            .bind(&input.token_hash)
            .bind(&input.code_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// A challenge that is neither consumed nor expired.
    pub async fn find_active_by_token_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<TwoFactorChallenge>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM two_factor_challenges
             WHERE token_hash = $1
               AND consumed_at IS NULL
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, TwoFactorChallenge>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Count a wrong code. Returns the new attempt total.
    pub async fn record_failed_attempt(pool: &PgPool, id: DbId) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE two_factor_challenges SET attempts = attempts + 1
             WHERE id = $1
             RETURNING attempts",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Mark a challenge used. `false` means another request got there first.
    pub async fn consume(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE two_factor_challenges SET consumed_at = NOW()
             WHERE id = $1 AND consumed_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete consumed or expired challenges. Returns the count removed.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM two_factor_challenges
             WHERE expires_at < NOW() OR consumed_at IS NOT NULL",
        )
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
