//! InferenceGateway -- retrying, sanitizing front door to the oracle.
//!
//! Transient failures (timeouts, crashed runs) are retried up to the policy's
//! attempt limit with a fixed pause in between. Permanent failures (missing
//! binary, unknown model) are returned immediately.

use std::time::Duration;

use nova_types::config::OracleConfig;
use nova_types::error::OracleError;

use super::box_oracle::BoxOracle;
use super::reply::{extract_reply, extract_summary};

/// Bounded retry for transient oracle failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero is treated as one.
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
        }
    }

    pub fn from_config(config: &OracleConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            backoff: Duration::from_millis(config.retry_backoff_ms),
        }
    }

    /// `attempt` is 1-based (first execution is attempt 1).
    pub fn should_retry(&self, attempt: u32, error: &OracleError) -> bool {
        error.is_transient() && attempt < self.max_attempts.max(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&OracleConfig::default())
    }
}

pub struct InferenceGateway {
    oracle: BoxOracle,
    retry: RetryPolicy,
}

impl InferenceGateway {
    pub fn new(oracle: BoxOracle, retry: RetryPolicy) -> Self {
        Self { oracle, retry }
    }

    pub fn oracle_name(&self) -> &str {
        self.oracle.name()
    }

    /// Generate a chat reply. Never returns an empty string on success.
    pub async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        let raw = self.invoke_with_retry(prompt).await?;
        tracing::debug!(raw_output = %raw, "Model raw output");
        Ok(extract_reply(&raw))
    }

    /// Generate a journal summary. Never returns an empty string on success.
    pub async fn generate_summary(&self, prompt: &str) -> Result<String, OracleError> {
        let raw = self.invoke_with_retry(prompt).await?;
        tracing::debug!(raw_output = %raw, "Model raw summary output");
        Ok(extract_summary(&raw))
    }

    async fn invoke_with_retry(&self, prompt: &str) -> Result<String, OracleError> {
        let mut attempt = 1;
        loop {
            match self.oracle.invoke(prompt).await {
                Ok(raw) => return Ok(raw),
                Err(err) if self.retry.should_retry(attempt, &err) => {
                    tracing::warn!(
                        oracle = self.oracle.name(),
                        attempt,
                        max_attempts = self.retry.max_attempts,
                        error = %err,
                        "Transient oracle failure, retrying"
                    );
                    tokio::time::sleep(self.retry.backoff).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
