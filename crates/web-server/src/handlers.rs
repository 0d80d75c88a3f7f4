use crate::{AppState, error::AppError};
use analytics::{DashboardReport, MetricsEngine, OwnerSelection};
use axum::{Json, body::Bytes, extract::State};
use axum_extra::extract::Query;
use ingest::UploadedTable;
use serde::Deserialize;
use std::sync::Arc;

/// `?owner=A&owner=B`. No owners means every owner.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    #[serde(default)]
    pub owner: Vec<String>,
}

/// # POST /api/dashboard
/// Runs the full metrics pipeline over the CSV in the request body.
pub async fn post_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
    body: Bytes,
) -> Result<Json<DashboardReport>, AppError> {
    let table = parse_upload(&body)?;
    let selection = OwnerSelection::of(query.owner);
    let report = MetricsEngine::new(&state.rates).calculate(&table.records, &selection)?;
    Ok(Json(report))
}

/// # POST /api/owners
/// Lists the owners of an upload, in first-appearance order, for building a selection.
pub async fn post_owners(body: Bytes) -> Result<Json<Vec<String>>, AppError> {
    let table = parse_upload(&body)?;
    let owners = table.owners().into_iter().map(str::to_string).collect();
    Ok(Json(owners))
}

fn parse_upload(body: &Bytes) -> Result<UploadedTable, AppError> {
    if body.is_empty() {
        return Err(AppError::NoUpload);
    }
    let table = ingest::load_from_bytes(body)?;
    if table.coerced_cells > 0 {
        tracing::info!(
            cells = table.coerced_cells,
            "Upload contained non-numeric values; they were treated as missing."
        );
    }
    Ok(table)
}
