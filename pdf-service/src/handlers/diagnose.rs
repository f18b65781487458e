use crate::dtos::{DiagnoseResponse, VersionResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Liveness probe kept for existing callers
#[utoipa::path(
    get,
    path = "/diagnose",
    responses(
        (status = 200, description = "Converter is reachable", body = DiagnoseResponse)
    ),
    tag = "Diagnose"
)]
pub async fn diagnose() -> Json<DiagnoseResponse> {
    Json(DiagnoseResponse::ok())
}

/// Application name and release version
#[utoipa::path(
    get,
    path = "/api/Version",
    responses(
        (status = 200, description = "Version information", body = VersionResponse)
    ),
    tag = "Diagnose"
)]
pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        application_name: state.config.application_name.clone(),
        api_version: "v2".to_string(),
        release_version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
