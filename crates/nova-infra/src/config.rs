//! Configuration loader for Nova.
//!
//! Reads `config.toml` from the data directory (`~/.nova/` in production)
//! and deserializes it into [`NovaConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::Path;

use nova_types::config::NovaConfig;

use crate::filesystem::DataLayout;

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`NovaConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(data_dir: &Path) -> NovaConfig {
    let config_path = DataLayout::new(data_dir).config_path();

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return NovaConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return NovaConfig::default();
        }
    };

    match toml::from_str::<NovaConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            NovaConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.oracle.model, "nova");
        assert_eq!(config.server.port, 5000);
    }

    #[tokio::test]
    async fn test_load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
[persona]
name = "Nova"
user_name = "Grace"

[oracle]
command = "/usr/local/bin/ollama"
model = "nova:latest"
max_attempts = 3

[server]
port = 8080
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.persona.user_name, "Grace");
        assert_eq!(config.oracle.command, "/usr/local/bin/ollama");
        assert_eq!(config.oracle.model, "nova:latest");
        assert_eq!(config.oracle.max_attempts, 3);
        assert_eq!(config.oracle.timeout_secs, 120);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[tokio::test]
    async fn test_load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.persona.user_name, "Franz");
        assert_eq!(config.oracle.command, "ollama");
    }
}
