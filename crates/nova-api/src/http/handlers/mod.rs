//! Endpoint handlers, one module per resource.

pub mod conversation;
pub mod health;
pub mod journal;
