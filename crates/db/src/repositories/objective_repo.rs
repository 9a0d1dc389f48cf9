//! Repository for the `objetivos` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::objective::{CreateObjective, Objective, UpdateObjective};

const COLUMNS: &str = "id, proyecto_id, nombre, descripcion, resultado_esperado";

/// Provides CRUD operations for project objectives.
pub struct ObjectiveRepo;

impl ObjectiveRepo {
    pub async fn create(pool: &PgPool, input: &CreateObjective) -> Result<Objective, sqlx::Error> {
        let query = format!(
            "INSERT INTO objetivos (proyecto_id, nombre, descripcion, resultado_esperado)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Objective>(&query)
            .bind(input.proyecto_id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.resultado_esperado)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Objective>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM objetivos WHERE id = $1");
        sqlx::query_as::<_, Objective>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Objective>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM objetivos ORDER BY id ASC");
        sqlx::query_as::<_, Objective>(&query).fetch_all(pool).await
    }

    pub async fn list_by_project(
        pool: &PgPool,
        proyecto_id: DbId,
    ) -> Result<Vec<Objective>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM objetivos WHERE proyecto_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Objective>(&query)
            .bind(proyecto_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateObjective,
    ) -> Result<Option<Objective>, sqlx::Error> {
        let query = format!(
            "UPDATE objetivos SET nombre = $2, descripcion = $3, resultado_esperado = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Objective>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.resultado_esperado)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM objetivos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
