use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use chrono::Utc;

#[derive(Debug, Default)]
pub struct Metrics {
    logs_received: AtomicU64,
    logs_skipped: AtomicU64,
    events_created: AtomicU64,
    duplicate_creations: AtomicU64,
    metadata_misses: AtomicU64,
    noop_events: AtomicU64,
    ingest_errors: AtomicU64,
    sync_errors: AtomicU64,
    last_synced_block: AtomicU64,
    last_sync_unix: AtomicI64,
}

impl Metrics {
    pub fn record_logs(&self, count: usize) {
        self.logs_received.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_skipped_log(&self) {
        self.logs_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event_created(&self) {
        self.events_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_duplicate_creation(&self) {
        self.duplicate_creations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_metadata_miss(&self) {
        self.metadata_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_noop_event(&self) {
        self.noop_events.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ingest_error(&self) {
        self.ingest_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_sync_error(&self) {
        self.sync_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_synced_block(&self, block: u64) {
        self.last_synced_block.fetch_max(block, Ordering::Relaxed);
        self.last_sync_unix.store(Utc::now().timestamp(), Ordering::Relaxed);
    }

    pub fn events_created(&self) -> u64 {
        self.events_created.load(Ordering::Relaxed)
    }

    pub fn duplicate_creations(&self) -> u64 {
        self.duplicate_creations.load(Ordering::Relaxed)
    }

    pub fn metadata_misses(&self) -> u64 {
        self.metadata_misses.load(Ordering::Relaxed)
    }

    pub fn last_synced_block(&self) -> u64 {
        self.last_synced_block.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let received = self.logs_received.load(Ordering::Relaxed);
        let skipped = self.logs_skipped.load(Ordering::Relaxed);
        let created = self.events_created.load(Ordering::Relaxed);
        let duplicates = self.duplicate_creations.load(Ordering::Relaxed);
        let misses = self.metadata_misses.load(Ordering::Relaxed);
        let noops = self.noop_events.load(Ordering::Relaxed);
        let ingest_errors = self.ingest_errors.load(Ordering::Relaxed);
        let sync_errors = self.sync_errors.load(Ordering::Relaxed);
        let block = self.last_synced_block.load(Ordering::Relaxed);
        let synced_at = self.last_sync_unix.load(Ordering::Relaxed);

        format!(
            "# TYPE rsvp_logs_received_total counter\n\
rsvp_logs_received_total {}\n\
# TYPE rsvp_logs_skipped_total counter\n\
rsvp_logs_skipped_total {}\n\
# TYPE rsvp_events_created_total counter\n\
rsvp_events_created_total {}\n\
# TYPE rsvp_duplicate_creations_total counter\n\
rsvp_duplicate_creations_total {}\n\
# TYPE rsvp_metadata_misses_total counter\n\
rsvp_metadata_misses_total {}\n\
# TYPE rsvp_noop_events_total counter\n\
rsvp_noop_events_total {}\n\
# TYPE rsvp_ingest_errors_total counter\n\
rsvp_ingest_errors_total {}\n\
# TYPE rsvp_sync_errors_total counter\n\
rsvp_sync_errors_total {}\n\
# TYPE rsvp_last_synced_block gauge\n\
rsvp_last_synced_block {}\n\
# TYPE rsvp_last_sync_timestamp_seconds gauge\n\
rsvp_last_sync_timestamp_seconds {}\n",
            received,
            skipped,
            created,
            duplicates,
            misses,
            noops,
            ingest_errors,
            sync_errors,
            block,
            synced_at
        )
    }
}
