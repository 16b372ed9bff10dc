// GET handlers: one per resource, JSON in and out

use std::path::Path as FsPath;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::error::CollectError;
use crate::models::*;
use crate::service;

/// Package version (from Cargo.toml).
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
const NAME: &str = env!("CARGO_PKG_NAME");

type ApiResult<T> = Result<Json<T>, CollectError>;

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

pub(super) async fn host_handler(State(state): State<AppState>) -> ApiResult<HostInfo> {
    Ok(Json(service::host::view(state.source.as_ref()).await?))
}

pub(super) async fn cpu_handler(State(state): State<AppState>) -> ApiResult<Vec<CoreStat>> {
    Ok(Json(service::cpu::list(state.source.as_ref()).await?))
}

pub(super) async fn disk_list_handler(
    State(state): State<AppState>,
) -> ApiResult<Vec<StorageDevice>> {
    Ok(Json(service::disk::list(state.source.as_ref()).await?))
}

/// GET /api/disk/{id} — 404 when no device carries this id.
pub(super) async fn disk_view_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, CollectError> {
    match service::disk::view(state.source.as_ref(), &id).await? {
        Some(device) => Ok(Json(device).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": "NOT_FOUND",
                "message": format!("no storage device with id {:?}", id),
            })),
        )
            .into_response()),
    }
}

pub(super) async fn memory_handler(State(state): State<AppState>) -> ApiResult<MemorySnapshot> {
    Ok(Json(service::memory::list(state.source.as_ref()).await?))
}

pub(super) async fn load_handler(State(state): State<AppState>) -> ApiResult<LoadSnapshot> {
    Ok(Json(service::load::list(state.source.as_ref()).await?))
}

pub(super) async fn users_handler(State(state): State<AppState>) -> ApiResult<Vec<HumanAccount>> {
    let path = FsPath::new(&state.config.files.accounts_path);
    Ok(Json(service::users::list(state.source.as_ref(), path).await?))
}

pub(super) async fn network_handler(
    State(state): State<AppState>,
) -> ApiResult<Vec<NetworkInterface>> {
    Ok(Json(service::network::list(state.source.as_ref()).await?))
}

pub(super) async fn software_handler(
    State(state): State<AppState>,
) -> ApiResult<Vec<SoftwarePackage>> {
    let path = FsPath::new(&state.config.files.packages_path);
    Ok(Json(service::software::list(state.source.as_ref(), path).await?))
}
