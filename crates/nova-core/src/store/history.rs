//! HistoryStore trait definition.

use nova_types::chat::Turn;
use nova_types::error::StoreError;

/// Rolling conversation window (`chat_history.json`).
pub trait HistoryStore: Send + Sync {
    /// Load all stored turns, oldest first. Missing or corrupt storage yields `[]`.
    fn load(&self) -> impl std::future::Future<Output = Vec<Turn>> + Send;

    /// Overwrite the stored turns.
    fn save(
        &self,
        turns: &[Turn],
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Append a turn and keep only the last `window` turns.
    ///
    /// The load-append-truncate-save cycle runs under the store's write
    /// guard. Returns the stored length afterwards.
    fn append_turn(
        &self,
        turn: Turn,
        window: usize,
    ) -> impl std::future::Future<Output = Result<usize, StoreError>> + Send;

    /// Reset the history to an empty list.
    fn clear(&self) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
