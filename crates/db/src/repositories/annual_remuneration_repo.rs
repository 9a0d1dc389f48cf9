//! Repository for the `remuneraciones_por_anio` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::annual_remuneration::{AnnualRemuneration, AnnualRemunerationInput};

const COLUMNS: &str =
    "id, talento_humano_id, anio, honorarios, valor_hora, semanas_anio, total_anio";

/// Provides CRUD operations for annual remunerations.
pub struct AnnualRemunerationRepo;

impl AnnualRemunerationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &AnnualRemunerationInput,
    ) -> Result<AnnualRemuneration, sqlx::Error> {
        let query = format!(
            "INSERT INTO remuneraciones_por_anio
                (talento_humano_id, anio, honorarios, valor_hora, semanas_anio, total_anio)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnnualRemuneration>(&query)
            .bind(input.talento_humano_id)
            .bind(input.anio)
            .bind(input.honorarios)
            .bind(input.valor_hora)
            .bind(input.semanas_anio)
            .bind(input.total_anio)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AnnualRemuneration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM remuneraciones_por_anio WHERE id = $1");
        sqlx::query_as::<_, AnnualRemuneration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<AnnualRemuneration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM remuneraciones_por_anio ORDER BY id ASC");
        sqlx::query_as::<_, AnnualRemuneration>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_talent(
        pool: &PgPool,
        talento_humano_id: DbId,
    ) -> Result<Vec<AnnualRemuneration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM remuneraciones_por_anio
             WHERE talento_humano_id = $1
             ORDER BY anio ASC, id ASC"
        );
        sqlx::query_as::<_, AnnualRemuneration>(&query)
            .bind(talento_humano_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_year(
        pool: &PgPool,
        anio: i32,
    ) -> Result<Vec<AnnualRemuneration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM remuneraciones_por_anio WHERE anio = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, AnnualRemuneration>(&query)
            .bind(anio)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &AnnualRemunerationInput,
    ) -> Result<Option<AnnualRemuneration>, sqlx::Error> {
        let query = format!(
            "UPDATE remuneraciones_por_anio SET
                talento_humano_id = $2,
                anio = $3,
                honorarios = $4,
                valor_hora = $5,
                semanas_anio = $6,
                total_anio = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnnualRemuneration>(&query)
            .bind(id)
            .bind(input.talento_humano_id)
            .bind(input.anio)
            .bind(input.honorarios)
            .bind(input.valor_hora)
            .bind(input.semanas_anio)
            .bind(input.total_anio)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM remuneraciones_por_anio WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
