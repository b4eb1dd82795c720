//! Infrastructure layer for Nova.
//!
//! Contains implementations of the ports defined in `nova-core`: JSON-file
//! state stores, the subprocess model oracle, the config loader and data
//! directory resolution.

pub mod config;
pub mod filesystem;
pub mod oracle;
pub mod store;
