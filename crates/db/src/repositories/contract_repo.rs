//! Repository for the `contrataciones` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::contract::{Contract, ContractInput};

const COLUMNS: &str = "id, nivel_gestion, categoria, identidad_academica, experiencia_minima, \
                       iva, valor_mensual";

/// Provides CRUD operations for contracting profiles.
pub struct ContractRepo;

impl ContractRepo {
    pub async fn create(pool: &PgPool, input: &ContractInput) -> Result<Contract, sqlx::Error> {
        let query = format!(
            "INSERT INTO contrataciones
                (nivel_gestion, categoria, identidad_academica, experiencia_minima, iva, valor_mensual)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(&input.nivel_gestion)
            .bind(&input.categoria)
            .bind(&input.identidad_academica)
            .bind(&input.experiencia_minima)
            .bind(input.iva)
            .bind(input.valor_mensual)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contrataciones WHERE id = $1");
        sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Contract>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contrataciones ORDER BY id ASC");
        sqlx::query_as::<_, Contract>(&query).fetch_all(pool).await
    }

    /// Contracts in a category (exact match).
    pub async fn list_by_category(
        pool: &PgPool,
        categoria: &str,
    ) -> Result<Vec<Contract>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM contrataciones WHERE categoria = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Contract>(&query)
            .bind(categoria)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ContractInput,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!(
            "UPDATE contrataciones SET
                nivel_gestion = $2,
                categoria = $3,
                identidad_academica = $4,
                experiencia_minima = $5,
                iva = $6,
                valor_mensual = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .bind(&input.nivel_gestion)
            .bind(&input.categoria)
            .bind(&input.identidad_academica)
            .bind(&input.experiencia_minima)
            .bind(input.iva)
            .bind(input.valor_mensual)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contract. Refused while a human-talent resource uses it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contrataciones WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
