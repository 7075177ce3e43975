use serde::Serialize;
use tracing::debug;

use rsvp_domain::ports::LogSource;
use rsvp_domain::{IngestSummary, LogFilter};

use crate::commands::ingest_commands::process_logs;
use crate::{AppError, AppState};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncProgress {
    /// First block the next step should request.
    pub next_block: u64,
    pub latest_block: u64,
    pub summary: IngestSummary,
}

impl SyncProgress {
    pub fn caught_up(&self) -> bool {
        self.next_block > self.latest_block
    }
}

/// Pulls one window of at most `block_batch_size` blocks starting at
/// `from_block` and projects its logs. Errors leave the cursor where it was.
pub async fn sync_step(
    state: &AppState,
    source: &dyn LogSource,
    from_block: u64,
) -> Result<SyncProgress, AppError> {
    let latest = source.latest_block().await?;
    if from_block > latest {
        return Ok(SyncProgress {
            next_block: from_block,
            latest_block: latest,
            summary: IngestSummary::default(),
        });
    }

    let batch = state.config.block_batch_size.max(1);
    let to_block = latest.min(from_block.saturating_add(batch - 1));
    let filter = LogFilter::for_contract(state.contract_address, from_block, to_block);
    let logs = source.fetch_logs(&filter).await?;
    debug!(
        "fetched {} logs for blocks {}..={}",
        logs.len(),
        from_block,
        to_block
    );

    let summary = process_logs(state, logs).await?;
    state.metrics.record_synced_block(to_block);
    Ok(SyncProgress {
        next_block: to_block + 1,
        latest_block: latest,
        summary,
    })
}

/// Repeats [`sync_step`] until `cursor` passes the chain head observed by the
/// last step. `cursor` advances after every successful window, so a failure
/// midway keeps the progress made so far.
pub async fn sync_to_head(
    state: &AppState,
    source: &dyn LogSource,
    cursor: &mut u64,
) -> Result<IngestSummary, AppError> {
    let mut total = IngestSummary::default();
    loop {
        let progress = sync_step(state, source, *cursor).await?;
        *cursor = progress.next_block;
        total.received += progress.summary.received;
        total.dispatched += progress.summary.dispatched;
        total.skipped += progress.summary.skipped;
        total.events_created += progress.summary.events_created;
        if progress.caught_up() {
            return Ok(total);
        }
    }
}
