use std::collections::BTreeMap;

use alloy_primitives::Address;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use rsvp_domain::ports::EntityStore;
use rsvp_domain::{Account, Confirmation, Event, Rsvp};

/// Every entity kind keyed by id. Shared by the in-memory and file stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityTables {
    #[serde(default)]
    pub events: BTreeMap<String, Event>,
    #[serde(default)]
    pub rsvps: BTreeMap<String, Rsvp>,
    #[serde(default)]
    pub confirmations: BTreeMap<String, Confirmation>,
    #[serde(default)]
    pub accounts: BTreeMap<String, Account>,
}

impl EntityTables {
    /// Ordered by id; `owner` filters on the event creator.
    pub fn list_events(&self, owner: Option<Address>, limit: usize) -> Vec<Event> {
        self.events
            .values()
            .filter(|event| owner.map_or(true, |owner| event.event_owner == owner))
            .take(limit)
            .cloned()
            .collect()
    }
}

#[derive(Default)]
pub struct MemoryEntityStore {
    tables: RwLock<EntityTables>,
}

impl MemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryEntityStore {
    async fn load_event(&self, id: &str) -> anyhow::Result<Option<Event>> {
        Ok(self.tables.read().await.events.get(id).cloned())
    }

    async fn save_event(&self, event: &Event) -> anyhow::Result<()> {
        self.tables
            .write()
            .await
            .events
            .insert(event.id.to_string(), event.clone());
        Ok(())
    }

    async fn list_events(
        &self,
        owner: Option<Address>,
        limit: usize,
    ) -> anyhow::Result<Vec<Event>> {
        Ok(self.tables.read().await.list_events(owner, limit))
    }

    async fn load_rsvp(&self, id: &str) -> anyhow::Result<Option<Rsvp>> {
        Ok(self.tables.read().await.rsvps.get(id).cloned())
    }

    async fn save_rsvp(&self, rsvp: &Rsvp) -> anyhow::Result<()> {
        self.tables
            .write()
            .await
            .rsvps
            .insert(rsvp.id.to_string(), rsvp.clone());
        Ok(())
    }

    async fn load_confirmation(&self, id: &str) -> anyhow::Result<Option<Confirmation>> {
        Ok(self.tables.read().await.confirmations.get(id).cloned())
    }

    async fn save_confirmation(&self, confirmation: &Confirmation) -> anyhow::Result<()> {
        self.tables
            .write()
            .await
            .confirmations
            .insert(confirmation.id.to_string(), confirmation.clone());
        Ok(())
    }

    async fn load_account(&self, id: &str) -> anyhow::Result<Option<Account>> {
        Ok(self.tables.read().await.accounts.get(id).cloned())
    }

    async fn save_account(&self, account: &Account) -> anyhow::Result<()> {
        self.tables
            .write()
            .await
            .accounts
            .insert(account.id.to_string(), account.clone());
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
