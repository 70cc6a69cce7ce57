use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String, example = "ok")]
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Health check endpoint
///
/// Returns 200 OK with `{"status": "ok"}` while the process is running.
/// Suitable for load balancer and Kubernetes liveness probes.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
