use std::path::PathBuf;

use tokio::sync::Mutex;

use nova_core::store::JournalStore;
use nova_types::chat::JournalEntry;
use nova_types::error::StoreError;

use crate::filesystem::{read_json, write_json_atomic};

/// `journal.json` as a [`JournalStore`].
///
/// Appends work on the raw JSON array rather than typed entries, so entries
/// written by older tools (extra keys, odd timestamps) are carried forward
/// byte-for-byte in meaning.
pub struct JsonJournalStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl JsonJournalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    fn label(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl JournalStore for JsonJournalStore {
    async fn load(&self) -> Vec<JournalEntry> {
        match read_json::<serde_json::Value>(&self.path).await {
            Ok(Some(serde_json::Value::Array(items))) => items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| match serde_json::from_value(item) {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        tracing::warn!(index, "Skipping malformed entry in {}: {err}", self.label());
                        None
                    }
                })
                .collect(),
            Ok(Some(_)) => {
                tracing::warn!("{} is not a list, showing nothing", self.label());
                Vec::new()
            }
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!("Failed to load {}: {err}", self.path.display());
                Vec::new()
            }
        }
    }

    async fn append_entry(&self, entry: &JournalEntry) -> Result<usize, StoreError> {
        let _guard = self.write_guard.lock().await;

        let mut items = match read_json::<serde_json::Value>(&self.path).await? {
            None => Vec::new(),
            Some(serde_json::Value::Array(items)) => items,
            Some(_) => return Err(StoreError::NotASequence(self.label())),
        };

        let value =
            serde_json::to_value(entry).map_err(|err| StoreError::Serialization(err.to_string()))?;
        items.push(value);
        write_json_atomic(&self.path, &items).await?;
        Ok(items.len())
    }
}
