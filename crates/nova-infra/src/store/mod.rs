//! JSON-file implementations of the nova-core store ports.
//!
//! Each store owns one file and one async write guard. Every
//! read-modify-write cycle holds the guard from read to rename, so two
//! concurrent requests can never both read the old contents and overwrite
//! each other. Plain loads do not take the guard: the rename in
//! `write_json_atomic` means they always see a complete file.

pub mod history;
pub mod journal;
pub mod memory;

pub use history::JsonHistoryStore;
pub use journal::JsonJournalStore;
pub use memory::JsonMemoryStore;
