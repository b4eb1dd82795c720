//! Oracle implementations.

pub mod process;

pub use process::ProcessOracle;
