use std::path::PathBuf;

use tokio::sync::Mutex;

use nova_core::store::HistoryStore;
use nova_types::chat::{Turn, retain_window};
use nova_types::error::StoreError;

use crate::filesystem::{read_json_or_default, write_json_atomic};

/// `chat_history.json` as a [`HistoryStore`].
pub struct JsonHistoryStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }
}

impl HistoryStore for JsonHistoryStore {
    async fn load(&self) -> Vec<Turn> {
        read_json_or_default(&self.path).await
    }

    async fn save(&self, turns: &[Turn]) -> Result<(), StoreError> {
        let _guard = self.write_guard.lock().await;
        write_json_atomic(&self.path, turns).await
    }

    async fn append_turn(&self, turn: Turn, window: usize) -> Result<usize, StoreError> {
        let _guard = self.write_guard.lock().await;
        let mut turns: Vec<Turn> = read_json_or_default(&self.path).await;
        turns.push(turn);
        retain_window(&mut turns, window);
        write_json_atomic(&self.path, &turns).await?;
        Ok(turns.len())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_guard.lock().await;
        write_json_atomic(&self.path, &Vec::<Turn>::new()).await
    }
}
