use alloy_primitives::Address;
use tracing::error;

use crate::AppState;
use crate::AppError;
use rsvp_domain::{EntityId, Event, EventQuery};

pub const DEFAULT_EVENT_LIMIT: usize = 100;
pub const MAX_EVENT_LIMIT: usize = 1000;

pub async fn get_event(state: &AppState, id: &str) -> Result<Event, AppError> {
    let entity_id = EntityId::parse_event_id(id)
        .ok_or_else(|| AppError::BadRequest(format!("invalid event id: {}", id)))?;
    state
        .entity_store
        .load_event(entity_id.as_str())
        .await
        .map_err(|err| {
            error!("failed to load event {}: {}", entity_id, err);
            AppError::Internal(err)
        })?
        .ok_or_else(|| AppError::NotFound(format!("event {}", entity_id)))
}

pub async fn list_events(state: &AppState, query: EventQuery) -> Result<Vec<Event>, AppError> {
    let owner = match query.owner.as_deref().map(str::trim) {
        Some("") | None => None,
        Some(raw) => Some(
            raw.parse::<Address>()
                .map_err(|_| AppError::BadRequest(format!("invalid owner address: {}", raw)))?,
        ),
    };
    let limit = query
        .limit
        .unwrap_or(DEFAULT_EVENT_LIMIT)
        .clamp(1, MAX_EVENT_LIMIT);
    let events = state
        .entity_store
        .list_events(owner, limit)
        .await
        .map_err(|err| {
            error!("failed to list events: {}", err);
            AppError::Internal(err)
        })?;
    Ok(events)
}
