pub mod health;

use axum::{Json, Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable as _};
use utoipa_scalar::{Scalar, Servable as _};

pub const API_TITLE: &str = "Aerial Damage Assessment API";

#[derive(OpenApi)]
#[openapi(
    paths(health::health),
    components(schemas(health::HealthResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
    )
)]
struct ApiDoc;

/// OpenAPI document served at `/openapi.json`, `/docs` and `/redoc`.
///
/// The version comes from the crate manifest. No description is published.
#[must_use]
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = API_TITLE.to_string();
    doc.info.description = None;
    doc
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(api_doc())
}

pub fn build_router() -> Router {
    let health_routes = Router::new().route("/health", get(health::health));

    // OpenAPI documentation
    let docs_routes = Router::new()
        .route("/openapi.json", get(openapi_json))
        .merge(Scalar::with_url("/docs", api_doc()))
        .merge(Redoc::with_url("/redoc", api_doc()));

    Router::new()
        .merge(health_routes)
        .merge(docs_routes)
        .layer(TraceLayer::new_for_http())
}
