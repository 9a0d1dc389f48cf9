//! Repository for the `cronograma_tareas` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::task_schedule::{CreateTaskSchedule, TaskSchedule, UpdateTaskSchedule};

const COLUMNS: &str = "id, tarea_id, duracion_meses, duracion_dias, fecha_inicio, fecha_fin";

/// Provides CRUD operations for task schedules.
pub struct TaskScheduleRepo;

impl TaskScheduleRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateTaskSchedule,
    ) -> Result<TaskSchedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO cronograma_tareas
                (tarea_id, duracion_meses, duracion_dias, fecha_inicio, fecha_fin)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskSchedule>(&query)
            .bind(input.tarea_id)
            .bind(input.duracion_meses)
            .bind(input.duracion_dias)
            .bind(input.fecha_inicio)
            .bind(input.fecha_fin)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TaskSchedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cronograma_tareas WHERE id = $1");
        sqlx::query_as::<_, TaskSchedule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<TaskSchedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cronograma_tareas ORDER BY id ASC");
        sqlx::query_as::<_, TaskSchedule>(&query).fetch_all(pool).await
    }

    pub async fn list_by_task(
        pool: &PgPool,
        tarea_id: DbId,
    ) -> Result<Vec<TaskSchedule>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cronograma_tareas WHERE tarea_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, TaskSchedule>(&query)
            .bind(tarea_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTaskSchedule,
    ) -> Result<Option<TaskSchedule>, sqlx::Error> {
        let query = format!(
            "UPDATE cronograma_tareas SET
                duracion_meses = $2,
                duracion_dias = $3,
                fecha_inicio = $4,
                fecha_fin = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskSchedule>(&query)
            .bind(id)
            .bind(input.duracion_meses)
            .bind(input.duracion_dias)
            .bind(input.fecha_inicio)
            .bind(input.fecha_fin)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cronograma_tareas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
