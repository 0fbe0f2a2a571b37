use axum::body::Body;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use log::*;
use service::AppState;
use sse::headers::{CONNECTION_KEEP_ALIVE, CONTENT_TYPE_EVENT_STREAM};
use sse::Emitter;

/// GET the configured payload as a paced event stream
///
/// Headers are fixed before the body is polled; after that every frame the
/// emitter yields is written out immediately, one flush per payload unit.
#[utoipa::path(
    get,
    path = "/stream",
    responses(
        (status = 200, description = "Paced stream of the configured payload, one flushed frame per unit", body = String, content_type = "text/event-stream")
    )
)]
pub async fn stream(State(app_state): State<AppState>) -> Response {
    let settings = app_state.emitter_settings();
    debug!(
        "Establishing paced stream of {} frame(s)",
        settings.total_units()
    );

    let cache_style = settings.cache_control_style;
    let headers = [
        ("Content-Type", CONTENT_TYPE_EVENT_STREAM),
        (cache_style.header_name(), cache_style.header_value()),
        ("Connection", CONNECTION_KEEP_ALIVE),
    ];
    let body = Body::from_stream(Emitter::new(settings).into_stream());

    (headers, body).into_response()
}
