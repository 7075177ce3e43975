// Event projector handlers and the dispatch surface that routes decoded
// contract events to them.

use tracing::{debug, info};

use rsvp_domain::services::{metadata_path, project_new_event};
use rsvp_domain::{
    AttendeeAction, ContractEvent, DepositsPayout, EntityId, EventCreated, EventMetadata,
};

use crate::{AppError, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerOutcome {
    Created,
    Duplicate,
    NoOp,
}

pub async fn dispatch(state: &AppState, event: &ContractEvent) -> Result<HandlerOutcome, AppError> {
    let outcome = match event {
        ContractEvent::NewEventCreated(created) => handle_new_event_created(state, created).await?,
        ContractEvent::NewRsvp(action) => handle_new_rsvp(state, action).await?,
        ContractEvent::ConfirmedAttendee(action) => handle_confirmed_attendee(state, action).await?,
        ContractEvent::DepositsPaidOut(payout) => handle_deposits_paid_out(state, payout).await?,
    };
    if outcome == HandlerOutcome::NoOp {
        state.metrics.record_noop_event();
    }
    Ok(outcome)
}

/// Load-or-create: an id that is already stored is left untouched.
pub async fn handle_new_event_created(
    state: &AppState,
    created: &EventCreated,
) -> Result<HandlerOutcome, AppError> {
    let id = EntityId::from_event_id(&created.event_id);
    if state.entity_store.load_event(id.as_str()).await?.is_some() {
        info!("event {} already indexed, ignoring repeated creation", id);
        state.metrics.record_duplicate_creation();
        return Ok(HandlerOutcome::Duplicate);
    }

    let metadata = fetch_metadata(state, &created.event_data_cid).await;
    let event = project_new_event(created, metadata.as_ref());
    state.entity_store.save_event(&event).await?;
    state.metrics.record_event_created();
    info!(
        "indexed event {} owner={} metadata={}",
        id,
        created.creator,
        metadata.is_some()
    );
    Ok(HandlerOutcome::Created)
}

pub async fn handle_new_rsvp(
    _state: &AppState,
    _action: &AttendeeAction,
) -> Result<HandlerOutcome, AppError> {
    Ok(HandlerOutcome::NoOp)
}

pub async fn handle_confirmed_attendee(
    _state: &AppState,
    _action: &AttendeeAction,
) -> Result<HandlerOutcome, AppError> {
    Ok(HandlerOutcome::NoOp)
}

pub async fn handle_deposits_paid_out(
    _state: &AppState,
    _payout: &DepositsPayout,
) -> Result<HandlerOutcome, AppError> {
    Ok(HandlerOutcome::NoOp)
}

// Metadata is off-chain and best-effort; every failure collapses to `None`.
async fn fetch_metadata(state: &AppState, event_data_cid: &str) -> Option<EventMetadata> {
    let path = metadata_path(event_data_cid);
    let bytes = match state.metadata_store.cat(&path).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            debug!("no metadata document at {}", path);
            state.metrics.record_metadata_miss();
            return None;
        }
        Err(err) => {
            debug!("metadata fetch failed for {}: {}", path, err);
            state.metrics.record_metadata_miss();
            return None;
        }
    };
    let Some(metadata) = EventMetadata::from_bytes(&bytes) else {
        debug!("metadata document at {} is not a JSON object", path);
        state.metrics.record_metadata_miss();
        return None;
    };
    Some(metadata)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use alloy_primitives::{Address, B256, U256};

    use super::*;
    use crate::test_support::{
        scenario_event, scenario_event_id, test_state, StaticMetadataStore,
    };
    use rsvp_domain::services::FALLBACK_IMAGE_URL;

    const SCENARIO_METADATA: &str =
        r#"{"name":"Meetup","description":"desc","link":"https://x","image":"/img.png"}"#;

    #[tokio::test]
    async fn creates_event_with_metadata() {
        let metadata = StaticMetadataStore::with_document("bafy123/data.json", SCENARIO_METADATA);
        let state = test_state(Arc::new(metadata));
        let created = scenario_event();

        let outcome = handle_new_event_created(&state, &created).await.expect("handle");
        assert_eq!(outcome, HandlerOutcome::Created);

        let event = state
            .entity_store
            .load_event(EntityId::from_event_id(&scenario_event_id()).as_str())
            .await
            .expect("load")
            .expect("stored");
        assert_eq!(event.event_id, created.event_id);
        assert_eq!(event.event_owner, Address::repeat_byte(0x11));
        assert_eq!(event.event_timestamp, U256::from(1_700_000_000u64));
        assert_eq!(event.max_capacity, U256::from(50u64));
        assert_eq!(event.deposit, U256::from(1_000_000_000_000_000_000u128));
        assert_eq!(event.name.as_deref(), Some("Meetup"));
        assert_eq!(event.description.as_deref(), Some("desc"));
        assert_eq!(event.link.as_deref(), Some("https://x"));
        assert_eq!(
            event.image_url.as_deref(),
            Some("https://ipfs.io/ipfsbafy123/img.png")
        );
        assert_eq!(event.total_rsvps, 0);
        assert_eq!(event.total_confirmed_attendees, 0);
    }

    #[tokio::test]
    async fn missing_metadata_still_saves_chain_fields() {
        let state = test_state(Arc::new(StaticMetadataStore::empty()));
        handle_new_event_created(&state, &scenario_event())
            .await
            .expect("handle");

        let event = state
            .entity_store
            .load_event(EntityId::from_event_id(&scenario_event_id()).as_str())
            .await
            .expect("load")
            .expect("stored");
        assert_eq!(event.name, None);
        assert_eq!(event.description, None);
        assert_eq!(event.link, None);
        assert_eq!(event.image_url.as_deref(), Some(FALLBACK_IMAGE_URL));
        assert_eq!(state.metrics.metadata_misses(), 1);
    }

    #[tokio::test]
    async fn unreachable_metadata_store_is_swallowed() {
        let state = test_state(Arc::new(StaticMetadataStore::failing()));
        let outcome = handle_new_event_created(&state, &scenario_event())
            .await
            .expect("handle");
        assert_eq!(outcome, HandlerOutcome::Created);
        assert_eq!(state.metrics.events_created(), 1);
    }

    #[tokio::test]
    async fn malformed_metadata_keeps_fallback_image() {
        let metadata = StaticMetadataStore::with_document("bafy123/data.json", "<html>");
        let state = test_state(Arc::new(metadata));
        handle_new_event_created(&state, &scenario_event())
            .await
            .expect("handle");
        let events = state.entity_store.list_events(None, 10).await.expect("list");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].image_url.as_deref(), Some(FALLBACK_IMAGE_URL));
    }

    #[tokio::test]
    async fn duplicate_creation_leaves_store_unchanged() {
        let metadata = Arc::new(StaticMetadataStore::with_document(
            "bafy123/data.json",
            SCENARIO_METADATA,
        ));
        let state = test_state(metadata.clone());
        let created = scenario_event();
        handle_new_event_created(&state, &created).await.expect("first");
        let before = state.entity_store.list_events(None, 10).await.expect("list");

        let mut replay = created.clone();
        replay.max_capacity = U256::from(999u64);
        replay.event_data_cid = "other".to_string();
        let outcome = handle_new_event_created(&state, &replay).await.expect("second");

        assert_eq!(outcome, HandlerOutcome::Duplicate);
        assert_eq!(state.entity_store.list_events(None, 10).await.expect("list"), before);
        assert_eq!(metadata.requests(), vec!["bafy123/data.json".to_string()]);
        assert_eq!(state.metrics.duplicate_creations(), 1);
    }

    #[tokio::test]
    async fn attendee_and_payout_handlers_do_not_touch_the_store() {
        let state = test_state(Arc::new(StaticMetadataStore::empty()));
        handle_new_event_created(&state, &scenario_event())
            .await
            .expect("create");
        let before = state.entity_store.list_events(None, 10).await.expect("list");

        let action = AttendeeAction {
            event_id: scenario_event_id(),
            attendee: Address::repeat_byte(0x33),
        };
        let events = [
            ContractEvent::NewRsvp(action),
            ContractEvent::ConfirmedAttendee(action),
            ContractEvent::DepositsPaidOut(DepositsPayout {
                event_id: scenario_event_id(),
            }),
        ];
        for event in &events {
            assert_eq!(dispatch(&state, event).await.expect("dispatch"), HandlerOutcome::NoOp);
        }

        let after = state.entity_store.list_events(None, 10).await.expect("list");
        assert_eq!(after, before);
        assert_eq!((after[0].total_rsvps, after[0].total_confirmed_attendees), (0, 0));
        let attendee = EntityId::from_address(&Address::repeat_byte(0x33));
        assert!(state
            .entity_store
            .load_account(attendee.as_str())
            .await
            .expect("load")
            .is_none());
    }

    #[tokio::test]
    async fn dispatch_routes_creation_events() {
        let state = test_state(Arc::new(StaticMetadataStore::empty()));
        let mut created = scenario_event();
        created.event_id = B256::repeat_byte(0x07);
        let outcome = dispatch(&state, &ContractEvent::NewEventCreated(created))
            .await
            .expect("dispatch");
        assert_eq!(outcome, HandlerOutcome::Created);
    }
}
