//! JournalStore trait definition.

use nova_types::chat::JournalEntry;
use nova_types::error::StoreError;

/// Append-only, unbounded conversation journal (`journal.json`).
pub trait JournalStore: Send + Sync {
    /// Load every entry, oldest first.
    ///
    /// Missing storage, corrupt JSON, or a non-list value all yield `[]`.
    /// Items that are not entry objects are skipped one by one.
    fn load(&self) -> impl std::future::Future<Output = Vec<JournalEntry>> + Send;

    /// Append one entry, creating the journal if absent.
    ///
    /// If the stored value is not a list the append is aborted with
    /// `StoreError::NotASequence` and the existing content is left alone.
    /// Returns the journal length afterwards.
    fn append_entry(
        &self,
        entry: &JournalEntry,
    ) -> impl std::future::Future<Output = Result<usize, StoreError>> + Send;
}
