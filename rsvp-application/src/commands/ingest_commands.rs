use tracing::{debug, error, warn};

use rsvp_domain::{ContractEvent, IngestSummary, RawLog};

use crate::commands::projection_commands::{dispatch, HandlerOutcome};
use crate::{AppError, AppState};

/// Projects a batch of raw logs in ledger order, one event at a time.
///
/// Logs from other contracts, unknown signatures and undecodable payloads are
/// skipped. A store failure aborts the batch; replaying it is safe because
/// creation is idempotent.
pub async fn process_logs(
    state: &AppState,
    mut logs: Vec<RawLog>,
) -> Result<IngestSummary, AppError> {
    let _guard = state.ingest_lock.lock().await;
    state.metrics.record_logs(logs.len());
    logs.sort_by_key(RawLog::position);

    let mut summary = IngestSummary {
        received: logs.len(),
        ..IngestSummary::default()
    };
    for log in &logs {
        if log.address != state.contract_address {
            debug!("ignoring log from foreign contract {}", log.address);
            state.metrics.record_skipped_log();
            summary.skipped += 1;
            continue;
        }
        let event = match ContractEvent::decode(log) {
            Ok(event) => event,
            Err(err) => {
                warn!(
                    "skipping log block={} index={}: {}",
                    log.block_number, log.log_index, err
                );
                state.metrics.record_skipped_log();
                summary.skipped += 1;
                continue;
            }
        };

        let outcome = dispatch(state, &event).await.map_err(|err| {
            state.metrics.record_ingest_error();
            error!(
                "failed to project {} at block={} index={}: {}",
                event.kind(),
                log.block_number,
                log.log_index,
                err
            );
            err
        })?;
        summary.dispatched += 1;
        if outcome == HandlerOutcome::Created {
            summary.events_created += 1;
        }
    }
    Ok(summary)
}
