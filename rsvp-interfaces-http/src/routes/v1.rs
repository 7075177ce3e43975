use axum::routing::{get, post};
use axum::Router;

use rsvp_application::AppState;

use crate::handlers::{event_handlers, ingest_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/ingest/logs", post(ingest_handlers::ingest_logs))
        .route("/v1/events", get(event_handlers::list_events))
        .route("/v1/events/:id", get(event_handlers::get_event))
        .route("/v1/contract", get(event_handlers::get_contract))
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
