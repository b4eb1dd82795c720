//! Subprocess oracle.
//!
//! Runs the model as `{command} {run_directive} {model} <prompt>` (by default
//! `ollama run nova <prompt>`) and returns its raw standard output. Standard
//! error is logged but only matters when the process also fails.
//!
//! Every invocation is bounded by a timeout. On expiry the child is killed
//! (`kill_on_drop`) and `OracleError::Timeout` is returned.

use std::process::Stdio;
use std::time::Duration;

use nova_core::oracle::Oracle;
use nova_types::config::OracleConfig;
use nova_types::error::OracleError;

/// Stderr fragments that mean the model itself is unknown.
const MISSING_MODEL_HINTS: &[&str] = &["pull model manifest", "model not found", "file does not exist"];

pub struct ProcessOracle {
    command: String,
    run_directive: String,
    model: String,
    timeout: Duration,
}

impl ProcessOracle {
    pub fn new(
        command: impl Into<String>,
        run_directive: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            command: command.into(),
            run_directive: run_directive.into(),
            model: model.into(),
            timeout,
        }
    }

    pub fn from_config(config: &OracleConfig) -> Self {
        Self::new(
            &config.command,
            &config.run_directive,
            &config.model,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn classify_failure(&self, code: Option<i32>, stderr: &str) -> OracleError {
        let lowered = stderr.to_lowercase();
        if MISSING_MODEL_HINTS.iter().any(|hint| lowered.contains(hint)) {
            OracleError::ModelNotFound(self.model.clone())
        } else {
            OracleError::Exited {
                code,
                stderr: stderr.trim().to_string(),
            }
        }
    }
}

impl Oracle for ProcessOracle {
    fn name(&self) -> &str {
        &self.command
    }

    async fn invoke(&self, prompt: &str) -> Result<String, OracleError> {
        let child = tokio::process::Command::new(&self.command)
            .arg(&self.run_directive)
            .arg(&self.model)
            .arg(prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| OracleError::Spawn {
                command: self.command.clone(),
                message: err.to_string(),
                missing_binary: err.kind() == std::io::ErrorKind::NotFound,
            })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|err| OracleError::Exited {
                code: None,
                stderr: err.to_string(),
            })?,
            Err(_) => {
                tracing::warn!(
                    command = %self.command,
                    model = %self.model,
                    timeout_secs = self.timeout.as_secs(),
                    "Model process timed out"
                );
                return Err(OracleError::Timeout {
                    secs: self.timeout.as_secs(),
                });
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            tracing::warn!(model = %self.model, stderr = %stderr.trim(), "Model stderr");
        }

        if !output.status.success() {
            return Err(self.classify_failure(output.status.code(), &stderr));
        }

        String::from_utf8(output.stdout).map_err(|_| OracleError::InvalidOutput)
    }
}
