//! Repository for the `proyectos` table.

use rpm_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject, DEFAULT_PROJECT_STATUS};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, fecha_creacion, estado, usuario_id";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `estado` is `None`, the project starts as [`DEFAULT_PROJECT_STATUS`].
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO proyectos (nombre, estado, usuario_id)
             VALUES ($1, COALESCE($2, $3), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.nombre)
            .bind(&input.estado)
            .bind(DEFAULT_PROJECT_STATUS)
            .bind(input.usuario_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyectos WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyectos ORDER BY id ASC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List the projects owned by a user.
    pub async fn list_by_user(
        pool: &PgPool,
        usuario_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM proyectos WHERE usuario_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Project>(&query)
            .bind(usuario_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a project's mutable fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE proyectos SET nombre = $2, estado = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.estado)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project and, through cascading keys, its whole tree.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM proyectos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
