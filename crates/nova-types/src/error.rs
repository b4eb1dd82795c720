use thiserror::Error;

/// Errors from the JSON-backed state stores.
///
/// Loads never surface these (they fall back to an empty collection);
/// only mutating operations return them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("{0} must be a list")]
    NotASequence(String),
}

/// Errors from invoking the external model process.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("failed to start '{command}': {message}")]
    Spawn {
        command: String,
        message: String,
        missing_binary: bool,
    },

    #[error("model process timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("model process exited with {code:?}: {stderr}")]
    Exited { code: Option<i32>, stderr: String },

    #[error("model '{0}' not found")]
    ModelNotFound(String),

    #[error("model output is not valid UTF-8")]
    InvalidOutput,
}

impl OracleError {
    /// Whether a second attempt has a reasonable chance of succeeding.
    ///
    /// A missing binary or unknown model will fail the same way every time;
    /// timeouts and crashes may not.
    pub fn is_transient(&self) -> bool {
        match self {
            OracleError::Spawn { missing_binary, .. } => !missing_binary,
            OracleError::Timeout { .. } | OracleError::Exited { .. } => true,
            OracleError::ModelNotFound(_) | OracleError::InvalidOutput => false,
        }
    }
}
