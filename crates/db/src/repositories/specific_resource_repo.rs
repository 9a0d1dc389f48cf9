//! Repository for `recursos_especificos` and its twelve detail tables.
//!
//! Every write touches the parent row and exactly one detail row inside a
//! single transaction. Reads load the parents first, then batch-load the
//! detail rows per kind with `= ANY($1)`.

use std::collections::HashMap;

use rpm_core::error::CoreError;
use rpm_core::resource_kind::ResourceKind;
use rpm_core::types::DbId;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, Row};

use crate::models::specific_resource::{
    Administrative, CreateSpecificResource, Dissemination, EquipmentSoftware, HumanTalent,
    Infrastructure, KnowledgeProtection, MaterialsSupplies, MonitoringEvaluation, Other,
    ResourceDetail, SpecificResource, SpecificResourceRow, TechnologyServices, TrainingEvents,
    TravelExpenses, UpdateSpecificResource,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, recurso_id, tipo, detalle, cantidad, total, periodo_num, periodo_tipo";

type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// A payload struct stored in its kind's detail table.
trait DetailPayload: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const KIND: ResourceKind;
    /// Payload columns in bind order.
    const COLUMNS: &'static [&'static str];

    fn bind_into<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;
    fn into_detail(self) -> ResourceDetail;
}

macro_rules! detail_payload {
    ($ty:ty, $variant:ident, [$($field:ident),+ $(,)?]) => {
        impl DetailPayload for $ty {
            const KIND: ResourceKind = ResourceKind::$variant;
            const COLUMNS: &'static [&'static str] = &[$(stringify!($field)),+];

            fn bind_into<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
                query$(.bind(&self.$field))+
            }

            fn into_detail(self) -> ResourceDetail {
                ResourceDetail::$variant(self)
            }
        }
    };
}

detail_payload!(HumanTalent, TalentoHumano, [contratacion_id, cargo_especifico, semanas, total]);
detail_payload!(EquipmentSoftware, EquiposSoftware, [especificaciones_tecnicas]);
detail_payload!(TechnologyServices, ServiciosTecnologicos, [descripcion]);
detail_payload!(MaterialsSupplies, MaterialesInsumos, [materiales]);
detail_payload!(TrainingEvents, CapacitacionEventos, [tema, cantidad]);
detail_payload!(TravelExpenses, GastosViaje, [costo]);
detail_payload!(
    Infrastructure,
    Infraestructura,
    [tipo_infraestructura, enlace, caracteristicas_tecnicas]
);
detail_payload!(Administrative, Administrativos, [cargo, razon_social, justificacion]);
detail_payload!(
    KnowledgeProtection,
    ProteccionConocimientoDivulgacion,
    [actividad_hapat, entidad_responsable, justificacion]
);
detail_payload!(
    MonitoringEvaluation,
    SeguimientoEvaluacion,
    [cargo_responsable, metodo_evaluacion, frecuencia]
);
detail_payload!(Dissemination, Divulgacion, [medio_divulgacion, alcance, justificacion]);
detail_payload!(Other, Otros, [justificacion]);

/// Run `$body` with `$payload` bound to the concrete payload inside `$detail`.
macro_rules! with_payload {
    ($detail:expr, $payload:ident => $body:expr) => {
        match $detail {
            ResourceDetail::TalentoHumano($payload) => $body,
            ResourceDetail::EquiposSoftware($payload) => $body,
            ResourceDetail::ServiciosTecnologicos($payload) => $body,
            ResourceDetail::MaterialesInsumos($payload) => $body,
            ResourceDetail::CapacitacionEventos($payload) => $body,
            ResourceDetail::GastosViaje($payload) => $body,
            ResourceDetail::Infraestructura($payload) => $body,
            ResourceDetail::Administrativos($payload) => $body,
            ResourceDetail::ProteccionConocimientoDivulgacion($payload) => $body,
            ResourceDetail::SeguimientoEvaluacion($payload) => $body,
            ResourceDetail::Divulgacion($payload) => $body,
            ResourceDetail::Otros($payload) => $body,
        }
    };
}

/// Provides CRUD operations for specific resources and their details.
pub struct SpecificResourceRepo;

impl SpecificResourceRepo {
    /// Insert the parent row and its detail row in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSpecificResource,
    ) -> Result<SpecificResource, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO recursos_especificos
                (recurso_id, tipo, detalle, cantidad, total, periodo_num, periodo_tipo)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SpecificResourceRow>(&query)
            .bind(input.recurso_id)
            .bind(input.detail.kind().as_str())
            .bind(&input.detalle)
            .bind(input.cantidad)
            .bind(input.total)
            .bind(input.periodo_num)
            .bind(&input.periodo_tipo)
            .fetch_one(&mut *tx)
            .await?;

        let datos_id =
            with_payload!(&input.detail, payload => insert_detail(&mut tx, row.id, payload).await)?;

        tx.commit().await?;
        Ok(assemble(row, datos_id, input.detail.clone()))
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SpecificResource>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let query = format!("SELECT {COLUMNS} FROM recursos_especificos WHERE id = $1");
        let row = sqlx::query_as::<_, SpecificResourceRow>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        match row {
            Some(row) => Ok(attach_details(&mut conn, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<SpecificResource>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let query = format!("SELECT {COLUMNS} FROM recursos_especificos ORDER BY id ASC");
        let rows = sqlx::query_as::<_, SpecificResourceRow>(&query)
            .fetch_all(&mut *conn)
            .await?;
        attach_details(&mut conn, rows).await
    }

    pub async fn list_by_resource(
        pool: &PgPool,
        recurso_id: DbId,
    ) -> Result<Vec<SpecificResource>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let query = format!(
            "SELECT {COLUMNS} FROM recursos_especificos WHERE recurso_id = $1 ORDER BY id ASC"
        );
        let rows = sqlx::query_as::<_, SpecificResourceRow>(&query)
            .bind(recurso_id)
            .fetch_all(&mut *conn)
            .await?;
        attach_details(&mut conn, rows).await
    }

    pub async fn list_by_kind(
        pool: &PgPool,
        kind: ResourceKind,
    ) -> Result<Vec<SpecificResource>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let query =
            format!("SELECT {COLUMNS} FROM recursos_especificos WHERE tipo = $1 ORDER BY id ASC");
        let rows = sqlx::query_as::<_, SpecificResourceRow>(&query)
            .bind(kind.as_str())
            .fetch_all(&mut *conn)
            .await?;
        attach_details(&mut conn, rows).await
    }

    /// Overwrite a specific resource and its payload.
    ///
    /// When the payload kind differs from the stored `tipo`, the old detail
    /// row (and anything hanging off it) is deleted and a new one inserted.
    /// Otherwise the detail row is updated in place, keeping its id.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSpecificResource,
    ) -> Result<Option<SpecificResource>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<String> =
            sqlx::query_scalar("SELECT tipo FROM recursos_especificos WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(current) = current else {
            return Ok(None);
        };
        let current = parse_kind(&current)?;
        let next = input.detail.kind();

        if current != next {
            tracing::debug!(id, from = %current, to = %next, "Switching specific resource kind");
            let query = format!(
                "DELETE FROM {} WHERE recurso_especifico_id = $1",
                current.detail_table()
            );
            sqlx::query(&query).bind(id).execute(&mut *tx).await?;
        }

        let query = format!(
            "UPDATE recursos_especificos SET
                tipo = $2,
                detalle = $3,
                cantidad = $4,
                total = $5,
                periodo_num = $6,
                periodo_tipo = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SpecificResourceRow>(&query)
            .bind(id)
            .bind(next.as_str())
            .bind(&input.detalle)
            .bind(input.cantidad)
            .bind(input.total)
            .bind(input.periodo_num)
            .bind(&input.periodo_tipo)
            .fetch_one(&mut *tx)
            .await?;

        let datos_id = if current == next {
            with_payload!(&input.detail, payload => update_detail(&mut tx, id, payload).await)?
        } else {
            with_payload!(&input.detail, payload => insert_detail(&mut tx, id, payload).await)?
        };

        tx.commit().await?;
        Ok(Some(assemble(row, datos_id, input.detail.clone())))
    }

    /// Delete a specific resource; its detail row goes with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recursos_especificos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn assemble(row: SpecificResourceRow, datos_id: DbId, detail: ResourceDetail) -> SpecificResource {
    SpecificResource {
        id: row.id,
        recurso_id: row.recurso_id,
        detalle: row.detalle,
        cantidad: row.cantidad,
        total: row.total,
        periodo_num: row.periodo_num,
        periodo_tipo: row.periodo_tipo,
        datos_id,
        detail,
    }
}

fn parse_kind(tipo: &str) -> Result<ResourceKind, sqlx::Error> {
    tipo.parse::<ResourceKind>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

/// Join parent rows with their detail rows, preserving the parents' order.
async fn attach_details(
    conn: &mut PgConnection,
    rows: Vec<SpecificResourceRow>,
) -> Result<Vec<SpecificResource>, sqlx::Error> {
    let mut ids_by_kind: HashMap<ResourceKind, Vec<DbId>> = HashMap::new();
    for row in &rows {
        ids_by_kind
            .entry(parse_kind(&row.tipo)?)
            .or_default()
            .push(row.id);
    }

    let mut details = HashMap::with_capacity(rows.len());
    for (kind, ids) in &ids_by_kind {
        details.extend(load_details(conn, *kind, ids).await?);
    }

    rows.into_iter()
        .map(|row| {
            let (datos_id, detail) = details.remove(&row.id).ok_or_else(|| {
                sqlx::Error::Decode(Box::new(CoreError::Internal(format!(
                    "specific resource {} has no {} detail row",
                    row.id, row.tipo
                ))))
            })?;
            Ok(assemble(row, datos_id, detail))
        })
        .collect()
}

/// Detail rows of one kind, keyed by parent id, valued `(detail id, payload)`.
type DetailMap = HashMap<DbId, (DbId, ResourceDetail)>;

async fn load_details(
    conn: &mut PgConnection,
    kind: ResourceKind,
    parent_ids: &[DbId],
) -> Result<DetailMap, sqlx::Error> {
    match kind {
        ResourceKind::TalentoHumano => load::<HumanTalent>(conn, parent_ids).await,
        ResourceKind::EquiposSoftware => load::<EquipmentSoftware>(conn, parent_ids).await,
        ResourceKind::ServiciosTecnologicos => load::<TechnologyServices>(conn, parent_ids).await,
        ResourceKind::MaterialesInsumos => load::<MaterialsSupplies>(conn, parent_ids).await,
        ResourceKind::CapacitacionEventos => load::<TrainingEvents>(conn, parent_ids).await,
        ResourceKind::GastosViaje => load::<TravelExpenses>(conn, parent_ids).await,
        ResourceKind::Infraestructura => load::<Infrastructure>(conn, parent_ids).await,
        ResourceKind::Administrativos => load::<Administrative>(conn, parent_ids).await,
        ResourceKind::ProteccionConocimientoDivulgacion => {
            load::<KnowledgeProtection>(conn, parent_ids).await
        }
        ResourceKind::SeguimientoEvaluacion => {
            load::<MonitoringEvaluation>(conn, parent_ids).await
        }
        ResourceKind::Divulgacion => load::<Dissemination>(conn, parent_ids).await,
        ResourceKind::Otros => load::<Other>(conn, parent_ids).await,
    }
}

async fn load<D: DetailPayload>(
    conn: &mut PgConnection,
    parent_ids: &[DbId],
) -> Result<DetailMap, sqlx::Error> {
    let query = format!(
        "SELECT id, recurso_especifico_id, {} FROM {} WHERE recurso_especifico_id = ANY($1)",
        D::COLUMNS.join(", "),
        D::KIND.detail_table()
    );
    let rows = sqlx::query(&query)
        .bind(parent_ids)
        .fetch_all(&mut *conn)
        .await?;

    rows.iter()
        .map(|row| {
            let id: DbId = row.try_get("id")?;
            let parent_id: DbId = row.try_get("recurso_especifico_id")?;
            Ok((parent_id, (id, D::from_row(row)?.into_detail())))
        })
        .collect()
}

/// Insert a detail row. Its `tipo` column takes the table default.
async fn insert_detail<D: DetailPayload>(
    conn: &mut PgConnection,
    parent_id: DbId,
    payload: &D,
) -> Result<DbId, sqlx::Error> {
    let placeholders = (0..D::COLUMNS.len())
        .map(|i| format!("${}", i + 2))
        .collect::<Vec<_>>()
        .join(", ");
    let query = format!(
        "INSERT INTO {} (recurso_especifico_id, {}) VALUES ($1, {placeholders}) RETURNING id",
        D::KIND.detail_table(),
        D::COLUMNS.join(", ")
    );
    let row = payload
        .bind_into(sqlx::query(&query).bind(parent_id))
        .fetch_one(&mut *conn)
        .await?;
    row.try_get("id")
}

async fn update_detail<D: DetailPayload>(
    conn: &mut PgConnection,
    parent_id: DbId,
    payload: &D,
) -> Result<DbId, sqlx::Error> {
    let assignments = D::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ${}", i + 2))
        .collect::<Vec<_>>()
        .join(", ");
    let query = format!(
        "UPDATE {} SET {assignments} WHERE recurso_especifico_id = $1 RETURNING id",
        D::KIND.detail_table()
    );
    let row = payload
        .bind_into(sqlx::query(&query).bind(parent_id))
        .fetch_one(&mut *conn)
        .await?;
    row.try_get("id")
}
