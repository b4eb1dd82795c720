//! MemoryStore trait definition.

use nova_types::error::StoreError;
use nova_types::memory::MemoryBook;

/// Long-term fact memory (`memory.json`).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait MemoryStore: Send + Sync {
    /// Load the memory book. Missing or corrupt storage yields an empty book.
    fn load(&self) -> impl std::future::Future<Output = MemoryBook> + Send;

    /// Overwrite the stored book.
    fn save(
        &self,
        book: &MemoryBook,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Append one fact under the store's write guard.
    ///
    /// Returns the number of facts stored afterwards. A stored book that
    /// cannot be read or parsed aborts the append and is left untouched.
    fn append_fact(
        &self,
        fact: &str,
    ) -> impl std::future::Future<Output = Result<usize, StoreError>> + Send;
}
