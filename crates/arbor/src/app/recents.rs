use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::domain::entry::Entry;
use crate::infra::db::{KeyValueStore, StoreError};
use crate::infra::fs::FileSystemHost;

/// Storage key holding the serialized recent-projects list.
pub const RECENT_PROJECTS_KEY: &str = "recentProjects";

/// Failure while persisting the recent-projects list.
#[derive(Debug, Error)]
pub enum RecentsError {
    #[error("failed to encode recent projects: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Most-recently-used list of opened project roots.
///
/// Entries are deduplicated by filesystem identity, not by name. The list is
/// never capped and stale entries stay until they are superseded.
pub struct RecentsStore {
    entries: Vec<Entry>,
    store: Arc<dyn KeyValueStore>,
}

impl RecentsStore {
    /// Loads the persisted list from `store`.
    ///
    /// A missing value yields an empty list. Read and decode failures are
    /// logged and also yield an empty list.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = match store.get(RECENT_PROJECTS_KEY.to_string()).await {
            Ok(Some(value)) => decode_entries(&value),
            Ok(None) => Vec::new(),
            Err(error) => {
                error!(%error, "failed to load recent projects");

                Vec::new()
            }
        };
        debug!(count = entries.len(), "loaded recent projects");

        Self { entries, store }
    }

    /// Returns the recent entries, most recent first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Moves `entry` to the front of the list and persists the full list.
    ///
    /// Every previous entry identical to `entry` according to
    /// [`FileSystemHost::is_same_entry`] is dropped. The in-memory list only
    /// changes after the write succeeds.
    ///
    /// # Errors
    /// Returns an error if the list cannot be encoded or written.
    pub async fn record_opened(
        &mut self,
        entry: Entry,
        fs: &dyn FileSystemHost,
    ) -> Result<(), RecentsError> {
        let mut next_entries = Vec::with_capacity(self.entries.len() + 1);
        next_entries.push(entry.clone());

        for previous_entry in &self.entries {
            if fs.is_same_entry(previous_entry.clone(), entry.clone()).await {
                continue;
            }

            next_entries.push(previous_entry.clone());
        }

        let value = serde_json::to_string(&next_entries)?;
        self.store
            .set(RECENT_PROJECTS_KEY.to_string(), value)
            .await?;
        self.entries = next_entries;

        Ok(())
    }
}

fn decode_entries(value: &str) -> Vec<Entry> {
    serde_json::from_str(value).unwrap_or_else(|error| {
        warn!(%error, "discarding unreadable recent projects");

        Vec::new()
    })
}
