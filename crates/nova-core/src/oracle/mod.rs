//! Inference gateway for Nova.
//!
//! - `Oracle`: RPITIT trait for whatever produces raw model text
//! - `BoxOracle`: object-safe wrapper for runtime selection
//! - `reply`: turning raw stdout into something worth showing a user
//! - `InferenceGateway`: retrying front door used by the session layer

pub mod box_oracle;
pub mod gateway;
pub mod provider;
pub mod reply;

pub use box_oracle::BoxOracle;
pub use gateway::{InferenceGateway, RetryPolicy};
pub use provider::Oracle;
