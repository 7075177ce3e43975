// JSON snapshot store: the whole entity graph is rewritten after every save.

use std::path::PathBuf;

use alloy_primitives::Address;
use anyhow::Context;
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::info;

use rsvp_domain::ports::EntityStore;
use rsvp_domain::{Account, Confirmation, Event, Rsvp};

use crate::repositories::memory_store::EntityTables;

pub struct FileEntityStore {
    path: PathBuf,
    tables: RwLock<EntityTables>,
}

impl FileEntityStore {
    /// Opens the snapshot at `path`; a missing file starts an empty graph.
    pub async fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let tables = if path.exists() {
            let content = fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("corrupt entity snapshot {}", path.display()))?
        } else {
            EntityTables::default()
        };
        info!(
            "entity store opened at {} ({} events)",
            path.display(),
            tables.events.len()
        );
        Ok(Self {
            path,
            tables: RwLock::new(tables),
        })
    }

    /// Applies `change` to a copy of the graph and swaps it in only once the
    /// snapshot is on disk. A failed write leaves memory and disk unchanged.
    async fn commit(&self, change: impl FnOnce(&mut EntityTables)) -> anyhow::Result<()> {
        let mut tables = self.tables.write().await;
        let mut next = tables.clone();
        change(&mut next);
        self.persist(&next).await?;
        *tables = next;
        Ok(())
    }

    async fn persist(&self, tables: &EntityTables) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string(tables)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl EntityStore for FileEntityStore {
    async fn load_event(&self, id: &str) -> anyhow::Result<Option<Event>> {
        Ok(self.tables.read().await.events.get(id).cloned())
    }

    async fn save_event(&self, event: &Event) -> anyhow::Result<()> {
        self.commit(|tables| {
            tables.events.insert(event.id.to_string(), event.clone());
        })
        .await
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
        self.commit(|tables| {
            tables.rsvps.insert(rsvp.id.to_string(), rsvp.clone());
        })
        .await
    }

    async fn load_confirmation(&self, id: &str) -> anyhow::Result<Option<Confirmation>> {
        Ok(self.tables.read().await.confirmations.get(id).cloned())
    }

    async fn save_confirmation(&self, confirmation: &Confirmation) -> anyhow::Result<()> {
        self.commit(|tables| {
            tables
                .confirmations
                .insert(confirmation.id.to_string(), confirmation.clone());
        })
        .await
    }

    async fn load_account(&self, id: &str) -> anyhow::Result<Option<Account>> {
        Ok(self.tables.read().await.accounts.get(id).cloned())
    }

    async fn save_account(&self, account: &Account) -> anyhow::Result<()> {
        self.commit(|tables| {
            tables.accounts.insert(account.id.to_string(), account.clone());
        })
        .await
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                anyhow::bail!("store directory {} is missing", parent.display())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use alloy_primitives::{B256, U256};

    use super::*;
    use rsvp_domain::EventCreated;

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir()
            .join(format!("rsvp-store-{}-{}-{}", name, std::process::id(), nanos))
            .join("entities.json")
    }

    fn event(byte: u8) -> Event {
        Event::from_created(&EventCreated {
            event_id: B256::repeat_byte(byte),
            creator: Address::repeat_byte(0x11),
            event_timestamp: U256::from(1_700_000_000u64),
            max_capacity: U256::from(50u64),
            deposit: U256::from(1_000_000_000_000_000_000u128),
            event_data_cid: "bafy123".to_string(),
        })
    }

    #[tokio::test]
    async fn snapshot_survives_reopen() {
        let path = scratch_path("reopen");
        let store = FileEntityStore::open(&path).await.expect("open");
        let mut saved = event(0x01);
        saved.image_url = Some("https://ipfs.io/ipfsbafy123/img.png".to_string());
        store.save_event(&saved).await.expect("save");
        store.save_event(&event(0x02)).await.expect("save");
        drop(store);

        let reopened = FileEntityStore::open(&path).await.expect("reopen");
        let loaded = reopened
            .load_event(saved.id.as_str())
            .await
            .expect("load")
            .expect("present");
        assert_eq!(loaded, saved);
        assert_eq!(reopened.list_events(None, 10).await.expect("list").len(), 2);
        assert!(reopened.ping().await.is_ok());

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[tokio::test]
    async fn corrupt_snapshot_is_rejected() {
        let path = scratch_path("corrupt");
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).expect("dir");
        }
        std::fs::write(&path, "not json").expect("write");
        assert!(FileEntityStore::open(&path).await.is_err());

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[tokio::test]
    async fn failed_write_is_not_visible() {
        let path = scratch_path("blocked");
        let root = path.parent().map(PathBuf::from).expect("root");
        std::fs::create_dir_all(&root).expect("dir");
        std::fs::write(root.join("blocker"), "file, not a directory").expect("blocker");
        let store = FileEntityStore::open(root.join("blocker").join("entities.json"))
            .await
            .expect("open");

        let pending = event(0x05);
        assert!(store.save_event(&pending).await.is_err());
        assert!(store
            .load_event(pending.id.as_str())
            .await
            .expect("load")
            .is_none());
        assert!(store.list_events(None, 10).await.expect("list").is_empty());

        let _ = std::fs::remove_dir_all(&root);
    }
}
