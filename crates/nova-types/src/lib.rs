//! Shared domain types for Nova.
//!
//! Memory facts, conversation turns, journal entries, moods, configuration,
//! and the error enums shared by the store and oracle layers.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod memory;
pub mod mood;
