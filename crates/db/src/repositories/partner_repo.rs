//! Repository for the `entidades` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::partner::{Partner, PartnerInput};

const COLUMNS: &str = "id, nombre";

/// Provides CRUD operations for partner entities.
pub struct PartnerRepo;

impl PartnerRepo {
    pub async fn create(pool: &PgPool, input: &PartnerInput) -> Result<Partner, sqlx::Error> {
        let query = format!("INSERT INTO entidades (nombre) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Partner>(&query)
            .bind(&input.nombre)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Partner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entidades WHERE id = $1");
        sqlx::query_as::<_, Partner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Partner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entidades ORDER BY id ASC");
        sqlx::query_as::<_, Partner>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PartnerInput,
    ) -> Result<Option<Partner>, sqlx::Error> {
        let query = format!("UPDATE entidades SET nombre = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Partner>(&query)
            .bind(id)
            .bind(&input.nombre)
            .fetch_optional(pool)
            .await
    }

    /// Delete a partner and its activity contributions. Refused while a
    /// resource is still funded by it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entidades WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
