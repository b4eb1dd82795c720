//! Per-message conversation orchestration.

pub mod clock;
pub mod service;

pub use clock::{Clock, SystemClock};
pub use service::{SessionService, TurnOutcome};
