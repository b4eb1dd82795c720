//! Conversation pipeline and port trait definitions for Nova.
//!
//! This crate defines the "ports" (store and oracle traits) that the
//! infrastructure layer implements, plus the logic that runs on top of them:
//! prompt composition, reply cleanup, the per-message session orchestrator
//! and the journal summarizer. It depends only on `nova-types` -- never on
//! `nova-infra` or any file/process crate.

pub mod journal;
pub mod oracle;
pub mod prompt;
pub mod session;
pub mod store;
