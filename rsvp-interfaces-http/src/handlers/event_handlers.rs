use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use rsvp_application::queries::{contract_queries, event_queries};
use rsvp_application::AppState;
use rsvp_domain::{ContractHandleInfo, Event, EventQuery};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventQuery>,
) -> Result<Json<Vec<Event>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let events = event_queries::list_events(&state, query).await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Event>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let event = event_queries::get_event(&state, &id).await?;
    Ok(Json(event))
}

pub async fn get_contract(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ContractHandleInfo>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let info = contract_queries::contract_info(&state).await?;
    Ok(Json(info))
}
