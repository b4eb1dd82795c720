//! Configuration types for Nova.
//!
//! `NovaConfig` represents `config.toml` in the data directory. Every field
//! has a default, so an empty or missing file yields a working service that
//! talks to `ollama run nova` on port 5000.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NovaConfig {
    #[serde(default)]
    pub persona: PersonaConfig,

    #[serde(default)]
    pub oracle: OracleConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Who is talking to whom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaConfig {
    /// Assistant name used in the prompt and in error replies.
    #[serde(default = "default_persona_name")]
    pub name: String,

    /// Human name used when asking for a journal summary.
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Fixed seed for the mood draw. Unset means entropy-seeded.
    #[serde(default)]
    pub mood_seed: Option<u64>,
}

fn default_persona_name() -> String {
    "Nova".to_string()
}

fn default_user_name() -> String {
    "Franz".to_string()
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: default_persona_name(),
            user_name: default_user_name(),
            mood_seed: None,
        }
    }
}

/// How the external model process is invoked.
///
/// The process is run as `{command} {run_directive} {model} <prompt>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    #[serde(default = "default_command")]
    pub command: String,

    #[serde(default = "default_run_directive")]
    pub run_directive: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Wall-clock limit for one invocation.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Total attempts for transient failures (1 disables retry).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_command() -> String {
    "ollama".to_string()
}

fn default_run_directive() -> String {
    "run".to_string()
}

fn default_model() -> String {
    "nova".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_max_attempts() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    500
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            run_directive: default_run_directive(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
