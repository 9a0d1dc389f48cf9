//! Repository for the `rubros` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget_heading::{BudgetHeading, BudgetHeadingInput};

const COLUMNS: &str = "id, descripcion";

/// Provides CRUD operations for budget headings.
pub struct BudgetHeadingRepo;

impl BudgetHeadingRepo {
    pub async fn create(
        pool: &PgPool,
        input: &BudgetHeadingInput,
    ) -> Result<BudgetHeading, sqlx::Error> {
        let query = format!("INSERT INTO rubros (descripcion) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, BudgetHeading>(&query)
            .bind(&input.descripcion)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BudgetHeading>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rubros WHERE id = $1");
        sqlx::query_as::<_, BudgetHeading>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<BudgetHeading>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rubros ORDER BY id ASC");
        sqlx::query_as::<_, BudgetHeading>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &BudgetHeadingInput,
    ) -> Result<Option<BudgetHeading>, sqlx::Error> {
        let query =
            format!("UPDATE rubros SET descripcion = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, BudgetHeading>(&query)
            .bind(id)
            .bind(&input.descripcion)
            .fetch_optional(pool)
            .await
    }

    /// Delete a heading. Refused while a resource is filed under it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rubros WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
