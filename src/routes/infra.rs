use crate::config::HostEnvironment;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthStatus {
    pub status: &'static str,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = OK, body = HealthStatus)
    )
)]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "UP" })
}

#[utoipa::path(
    get,
    path = "/env",
    responses(
        (status = OK, body = String)
    )
)]
pub async fn environment(
    Extension(environment): Extension<HostEnvironment>,
) -> (StatusCode, String) {
    (
        StatusCode::OK,
        format!("Application is running in {environment} environment."),
    )
}
