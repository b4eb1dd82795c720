//! Oracle trait definition.

use nova_types::error::OracleError;

/// A black-box text generator.
///
/// `invoke` returns the model's raw standard output. Cleaning it up is the
/// gateway's job, so implementations should not filter or trim.
///
/// Implementations live in nova-infra (e.g., `ProcessOracle`).
pub trait Oracle: Send + Sync {
    /// Short name for logs (e.g., "ollama").
    fn name(&self) -> &str;

    /// Run the model on a single prompt.
    fn invoke(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, OracleError>> + Send;
}
