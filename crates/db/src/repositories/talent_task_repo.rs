//! Repository for the `talento_humano_tareas` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::talent_task::{CreateTalentTask, TalentTask, UpdateTalentTask};

const COLUMNS: &str = "id, talento_humano_id, tarea_id, horas_asignadas, rol_en_tarea, \
                       observaciones, fecha_asignacion";

/// Provides CRUD operations for talent-to-task assignments.
pub struct TalentTaskRepo;

impl TalentTaskRepo {
    /// Insert an assignment. `fecha_asignacion` defaults to now.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTalentTask,
    ) -> Result<TalentTask, sqlx::Error> {
        let query = format!(
            "INSERT INTO talento_humano_tareas
                (talento_humano_id, tarea_id, horas_asignadas, rol_en_tarea,
                 observaciones, fecha_asignacion)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TalentTask>(&query)
            .bind(input.talento_humano_id)
            .bind(input.tarea_id)
            .bind(input.horas_asignadas)
            .bind(&input.rol_en_tarea)
            .bind(&input.observaciones)
            .bind(input.fecha_asignacion)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TalentTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM talento_humano_tareas WHERE id = $1");
        sqlx::query_as::<_, TalentTask>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<TalentTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM talento_humano_tareas ORDER BY id ASC");
        sqlx::query_as::<_, TalentTask>(&query).fetch_all(pool).await
    }

    pub async fn list_by_talent(
        pool: &PgPool,
        talento_humano_id: DbId,
    ) -> Result<Vec<TalentTask>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM talento_humano_tareas
             WHERE talento_humano_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, TalentTask>(&query)
            .bind(talento_humano_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_task(
        pool: &PgPool,
        tarea_id: DbId,
    ) -> Result<Vec<TalentTask>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM talento_humano_tareas WHERE tarea_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, TalentTask>(&query)
            .bind(tarea_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTalentTask,
    ) -> Result<Option<TalentTask>, sqlx::Error> {
        let query = format!(
            "UPDATE talento_humano_tareas SET
                talento_humano_id = $2,
                tarea_id = $3,
                horas_asignadas = $4,
                rol_en_tarea = $5,
                observaciones = $6,
                fecha_asignacion = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TalentTask>(&query)
            .bind(id)
            .bind(input.talento_humano_id)
            .bind(input.tarea_id)
            .bind(input.horas_asignadas)
            .bind(&input.rol_en_tarea)
            .bind(&input.observaciones)
            .bind(input.fecha_asignacion)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM talento_humano_tareas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
