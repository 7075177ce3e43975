use std::sync::Arc;

use async_trait::async_trait;
use rsvp_domain::ports::{EntityStore, HealthCheckService, LogSource};

pub struct DefaultHealthService {
    entity_store: Arc<dyn EntityStore>,
    log_source: Option<Arc<dyn LogSource>>,
}

impl DefaultHealthService {
    pub fn new(entity_store: Arc<dyn EntityStore>, log_source: Option<Arc<dyn LogSource>>) -> Self {
        Self {
            entity_store,
            log_source,
        }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    async fn check_store(&self) -> anyhow::Result<bool> {
        self.entity_store.ping().await.map(|_| true)
    }

    // Without a node the indexer runs push-only; that is not a failure.
    async fn check_log_source(&self) -> anyhow::Result<bool> {
        match &self.log_source {
            Some(source) => source.latest_block().await.map(|_| true),
            None => Ok(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryEntityStore;
    use rsvp_domain::{LogFilter, RawLog};

    struct DownNode;

    #[async_trait]
    impl LogSource for DownNode {
        async fn latest_block(&self) -> anyhow::Result<u64> {
            anyhow::bail!("connection refused")
        }

        async fn fetch_logs(&self, _filter: &LogFilter) -> anyhow::Result<Vec<RawLog>> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn push_only_mode_is_healthy() {
        let service = DefaultHealthService::new(Arc::new(MemoryEntityStore::new()), None);
        assert!(service.check_store().await.expect("store"));
        assert!(service.check_log_source().await.expect("source"));
    }

    #[tokio::test]
    async fn unreachable_node_reports_error() {
        let service = DefaultHealthService::new(
            Arc::new(MemoryEntityStore::new()),
            Some(Arc::new(DownNode)),
        );
        assert!(service.check_log_source().await.is_err());
    }
}
