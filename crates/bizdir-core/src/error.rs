use thiserror::Error;

/// Errors from loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was present but could not be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
