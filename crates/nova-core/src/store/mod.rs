//! State store ports.
//!
//! Three independent collections, each with its own trait so the session
//! orchestrator can be tested against in-memory fakes. Loads are infallible
//! (they degrade to the empty collection); mutators report `StoreError`.
//! Implementations live in nova-infra.

pub mod history;
pub mod journal;
pub mod memory;

pub use history::HistoryStore;
pub use journal::JournalStore;
pub use memory::MemoryStore;
