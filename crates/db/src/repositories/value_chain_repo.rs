//! Repository for the `cadenas_de_valor` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::value_chain::{CreateValueChain, UpdateValueChain, ValueChain};

const COLUMNS: &str = "id, objetivo_id, nombre, objetivo_especifico";

/// Provides CRUD operations for value chains.
pub struct ValueChainRepo;

impl ValueChainRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateValueChain,
    ) -> Result<ValueChain, sqlx::Error> {
        let query = format!(
            "INSERT INTO cadenas_de_valor (objetivo_id, nombre, objetivo_especifico)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ValueChain>(&query)
            .bind(input.objetivo_id)
            .bind(&input.nombre)
            .bind(&input.objetivo_especifico)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ValueChain>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cadenas_de_valor WHERE id = $1");
        sqlx::query_as::<_, ValueChain>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ValueChain>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cadenas_de_valor ORDER BY id ASC");
        sqlx::query_as::<_, ValueChain>(&query).fetch_all(pool).await
    }

    pub async fn list_by_objective(
        pool: &PgPool,
        objetivo_id: DbId,
    ) -> Result<Vec<ValueChain>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cadenas_de_valor WHERE objetivo_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, ValueChain>(&query)
            .bind(objetivo_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateValueChain,
    ) -> Result<Option<ValueChain>, sqlx::Error> {
        let query = format!(
            "UPDATE cadenas_de_valor SET nombre = $2, objetivo_especifico = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ValueChain>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.objetivo_especifico)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cadenas_de_valor WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
