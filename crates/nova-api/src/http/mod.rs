//! HTTP layer for Nova.
//!
//! Flat JSON endpoints (`/ask`, `/history`, `/clear-history`, `/journal`,
//! `/summarize-journal`, `/health`) served by axum with permissive CORS.

pub mod error;
pub mod handlers;
pub mod router;
