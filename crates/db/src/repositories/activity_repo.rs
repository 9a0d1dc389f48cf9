//! Repository for the `actividades` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::{Activity, CreateActivity, UpdateActivity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, cadena_de_valor_id, nombre, descripcion, justificacion, \
                       duracion_anios, especificaciones_tecnicas, valor_unitario, totales_por_anio";

/// Provides CRUD operations for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    pub async fn create(pool: &PgPool, input: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO actividades
                (cadena_de_valor_id, nombre, descripcion, justificacion, duracion_anios,
                 especificaciones_tecnicas, valor_unitario, totales_por_anio)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(input.cadena_de_valor_id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.justificacion)
            .bind(input.duracion_anios)
            .bind(&input.especificaciones_tecnicas)
            .bind(input.valor_unitario)
            .bind(&input.totales_por_anio)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actividades WHERE id = $1");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actividades ORDER BY id ASC");
        sqlx::query_as::<_, Activity>(&query).fetch_all(pool).await
    }

    pub async fn list_by_value_chain(
        pool: &PgPool,
        cadena_de_valor_id: DbId,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM actividades WHERE cadena_de_valor_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(cadena_de_valor_id)
            .fetch_all(pool)
            .await
    }

    /// Activities a partner contributes to, through `act_x_entidades`.
    pub async fn list_by_partner(
        pool: &PgPool,
        entidad_id: DbId,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM actividades
             WHERE id IN (SELECT actividad_id FROM act_x_entidades WHERE entidad_id = $1)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(entidad_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActivity,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!(
            "UPDATE actividades SET
                nombre = $2,
                descripcion = $3,
                justificacion = $4,
                duracion_anios = $5,
                especificaciones_tecnicas = $6,
                valor_unitario = $7,
                totales_por_anio = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.justificacion)
            .bind(input.duracion_anios)
            .bind(&input.especificaciones_tecnicas)
            .bind(input.valor_unitario)
            .bind(&input.totales_por_anio)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actividades WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
