//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! The session service is generic over its store traits, but AppState pins it
//! to the JSON-file implementations from nova-infra.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use nova_core::oracle::{BoxOracle, InferenceGateway, RetryPolicy};
use nova_core::session::SessionService;
use nova_infra::config::load_config;
use nova_infra::filesystem::{DataLayout, resolve_data_dir};
use nova_infra::oracle::ProcessOracle;
use nova_infra::store::{JsonHistoryStore, JsonJournalStore, JsonMemoryStore};
use nova_types::config::NovaConfig;

/// Session service pinned to the JSON-file stores.
pub type ConcreteSessionService =
    SessionService<JsonMemoryStore, JsonHistoryStore, JsonJournalStore>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<ConcreteSessionService>,
    pub config: Arc<NovaConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory, load `config.toml` and wire the session
    /// service to the `ollama`-style subprocess oracle.
    pub async fn init(data_dir_override: Option<&Path>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir(data_dir_override);

        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let config = load_config(&data_dir).await;
        let oracle = BoxOracle::new(ProcessOracle::from_config(&config.oracle));

        tracing::info!(
            data_dir = %data_dir.display(),
            model = %config.oracle.model,
            "Application state initialized"
        );

        Ok(Self::from_parts(data_dir, config, oracle))
    }

    /// Wire the state from an already-resolved directory, config and oracle.
    pub fn from_parts(data_dir: PathBuf, config: NovaConfig, oracle: BoxOracle) -> Self {
        let layout = DataLayout::new(&data_dir);
        let gateway = InferenceGateway::new(oracle, RetryPolicy::from_config(&config.oracle));

        let session = SessionService::new(
            JsonMemoryStore::new(layout.memory_path()),
            JsonHistoryStore::new(layout.history_path()),
            JsonJournalStore::new(layout.journal_path()),
            gateway,
            config.persona.clone(),
        );

        Self {
            session: Arc::new(session),
            config: Arc::new(config),
            data_dir,
        }
    }
}
