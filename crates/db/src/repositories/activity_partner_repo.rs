//! Repository for the `act_x_entidades` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity_partner::{
    ActivityPartner, CreateActivityPartner, UpdateActivityPartner,
};

const COLUMNS: &str = "id, actividad_id, entidad_id, efectivo, especie";

/// Provides CRUD operations for partner contributions to activities.
pub struct ActivityPartnerRepo;

impl ActivityPartnerRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateActivityPartner,
    ) -> Result<ActivityPartner, sqlx::Error> {
        let query = format!(
            "INSERT INTO act_x_entidades (actividad_id, entidad_id, efectivo, especie)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityPartner>(&query)
            .bind(input.actividad_id)
            .bind(input.entidad_id)
            .bind(input.efectivo)
            .bind(input.especie)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ActivityPartner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM act_x_entidades WHERE id = $1");
        sqlx::query_as::<_, ActivityPartner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ActivityPartner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM act_x_entidades ORDER BY id ASC");
        sqlx::query_as::<_, ActivityPartner>(&query).fetch_all(pool).await
    }

    pub async fn list_by_activity(
        pool: &PgPool,
        actividad_id: DbId,
    ) -> Result<Vec<ActivityPartner>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM act_x_entidades WHERE actividad_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, ActivityPartner>(&query)
            .bind(actividad_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActivityPartner,
    ) -> Result<Option<ActivityPartner>, sqlx::Error> {
        let query = format!(
            "UPDATE act_x_entidades SET efectivo = $2, especie = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityPartner>(&query)
            .bind(id)
            .bind(input.efectivo)
            .bind(input.especie)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM act_x_entidades WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
