use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use rsvp_application::commands::sync_commands::sync_to_head;
use rsvp_application::AppState;
use rsvp_domain::ports::LogSource;

/// Follows the chain from `start_block`: catches up to the head window by
/// window, then sleeps `poll_interval_seconds`. A failed window is retried
/// after the sleep; windows already projected are not fetched again.
pub async fn run_sync_worker(state: AppState, source: Arc<dyn LogSource>) {
    let mut cursor = state.config.start_block;
    let interval = Duration::from_secs(state.config.poll_interval_seconds.max(1));
    info!(
        "sync worker started at block {} for {}",
        cursor, state.contract_address
    );

    loop {
        let from_block = cursor;
        match sync_to_head(&state, source.as_ref(), &mut cursor).await {
            Ok(summary) if summary.received > 0 => info!(
                "synced blocks {}..{}: {} logs, {} events created",
                from_block, cursor, summary.received, summary.events_created
            ),
            Ok(_) => {}
            Err(err) => {
                state.metrics.record_sync_error();
                warn!("sync stopped at block {}: {}", cursor, err);
            }
        }
        sleep(interval).await;
    }
}
