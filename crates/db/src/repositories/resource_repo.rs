//! Repository for the `recursos` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::{CreateResource, Resource, UpdateResource};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, actividad_id, entidad_id, rubro_id, tipo_recurso, \
                       monto_efectivo, monto_especie, descripcion";

/// Provides CRUD operations for activity resources.
pub struct ResourceRepo;

impl ResourceRepo {
    pub async fn create(pool: &PgPool, input: &CreateResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO recursos
                (actividad_id, entidad_id, rubro_id, tipo_recurso,
                 monto_efectivo, monto_especie, descripcion)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(input.actividad_id)
            .bind(input.entidad_id)
            .bind(input.rubro_id)
            .bind(&input.tipo_recurso)
            .bind(input.monto_efectivo)
            .bind(input.monto_especie)
            .bind(&input.descripcion)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recursos WHERE id = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recursos ORDER BY id ASC");
        sqlx::query_as::<_, Resource>(&query).fetch_all(pool).await
    }

    pub async fn list_by_activity(
        pool: &PgPool,
        actividad_id: DbId,
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM recursos WHERE actividad_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Resource>(&query)
            .bind(actividad_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResource,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE recursos SET
                entidad_id = $2,
                rubro_id = $3,
                tipo_recurso = $4,
                monto_efectivo = $5,
                monto_especie = $6,
                descripcion = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .bind(input.entidad_id)
            .bind(input.rubro_id)
            .bind(&input.tipo_recurso)
            .bind(input.monto_efectivo)
            .bind(input.monto_especie)
            .bind(&input.descripcion)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recursos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
