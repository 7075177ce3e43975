use alloy_primitives::Address;
use async_trait::async_trait;

use crate::entities::{Account, Confirmation, Event, Rsvp};

/// Entity graph the projector writes to. `save_*` replaces whatever is stored
/// under the entity's id; load-before-save is the caller's job.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn load_event(&self, id: &str) -> anyhow::Result<Option<Event>>;
    async fn save_event(&self, event: &Event) -> anyhow::Result<()>;
    async fn list_events(&self, owner: Option<Address>, limit: usize)
        -> anyhow::Result<Vec<Event>>;

    async fn load_rsvp(&self, id: &str) -> anyhow::Result<Option<Rsvp>>;
    async fn save_rsvp(&self, rsvp: &Rsvp) -> anyhow::Result<()>;

    async fn load_confirmation(&self, id: &str) -> anyhow::Result<Option<Confirmation>>;
    async fn save_confirmation(&self, confirmation: &Confirmation) -> anyhow::Result<()>;

    async fn load_account(&self, id: &str) -> anyhow::Result<Option<Account>>;
    async fn save_account(&self, account: &Account) -> anyhow::Result<()>;

    async fn ping(&self) -> anyhow::Result<()>;
}
