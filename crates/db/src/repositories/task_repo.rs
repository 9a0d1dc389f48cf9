//! Repository for the `tareas` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, UpdateTask};

const COLUMNS: &str = "id, actividad_id, nombre, descripcion, periodo, monto";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tareas (actividad_id, nombre, descripcion, periodo, monto)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.actividad_id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.periodo)
            .bind(input.monto)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tareas WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tareas ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    pub async fn list_by_activity(
        pool: &PgPool,
        actividad_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tareas WHERE actividad_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query)
            .bind(actividad_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a task, including the activity it belongs to.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tareas SET
                actividad_id = $2,
                nombre = $3,
                descripcion = $4,
                periodo = $5,
                monto = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.actividad_id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.periodo)
            .bind(input.monto)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tareas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
