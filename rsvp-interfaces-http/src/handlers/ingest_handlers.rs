use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use tracing::{error, info};

use rsvp_application::commands::ingest_commands;
use rsvp_application::AppState;
use rsvp_domain::IngestSummary;

use crate::error::HttpError;
use crate::middleware::{authorize, parse_logs};

pub async fn ingest_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<(StatusCode, Json<IngestSummary>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }

    let logs = parse_logs(&headers, &body).map_err(|err| {
        error!("failed to parse ingest body: {}", err);
        HttpError::BadRequest(err.to_string())
    })?;
    if logs.is_empty() {
        return Ok((StatusCode::OK, Json(IngestSummary::default())));
    }

    let summary = ingest_commands::process_logs(&state, logs).await?;
    info!(
        "ingested {} logs: {} dispatched, {} skipped, {} events created",
        summary.received, summary.dispatched, summary.skipped, summary.events_created
    );
    Ok((StatusCode::OK, Json(summary)))
}
