use crate::controller::{health_check_controller, stream_controller};
use crate::middleware::cors::cors;
use axum::{middleware::from_fn, routing::get, Router};
use service::AppState;

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path must be listed here.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stream Server API"
    ),
    paths(
        stream_controller::stream,
        health_check_controller::health_check,
    ),
    tags(
        (name = "stream_server", description = "Paced SSE streaming endpoint behind a permissive CORS gate")
    )
)]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(stream_routes(app_state))
        .merge(health_routes())
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        // The CORS gate wraps everything, including the 404 fallback, so
        // preflight probes get their 204 on any path.
        .layer(from_fn(cors))
}

fn stream_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/stream", get(stream_controller::stream))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}
