use thiserror::Error;

/// Errors returned by the catalog API client.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure from the underlying HTTP client
    /// (connection refused, DNS, timeout, TLS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The catalog answered with a non-2xx status. `message` is extracted
    /// best-effort from a JSON `message` field in the response body.
    #[error("catalog returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The catalog answered 2xx but the body could not be decoded into the
    /// expected shape.
    #[error("malformed catalog response for {context}: {source}")]
    Malformed {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request was superseded and cancelled before resolving. Never
    /// user-visible and never logged as an error.
    #[error("request cancelled")]
    Cancelled,

    /// The configured base URL could not be parsed.
    #[error("invalid catalog base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl CatalogError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CatalogError::Cancelled)
    }

    /// Human-readable message for the error state shown to the user.
    ///
    /// `Cancelled` is swallowed by the executor before reaching any view, so
    /// its rendering here is a plain fallback rather than user-facing copy.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Network(_) => {
                "Could not reach the catalog service. Check your connection and try again."
                    .to_owned()
            }
            CatalogError::Status { status, message } => {
                format!("The catalog service reported an error ({status}): {message}")
            }
            CatalogError::Malformed { .. } => {
                "The catalog service returned an unexpected response. Please try again.".to_owned()
            }
            CatalogError::Cancelled | CatalogError::InvalidBaseUrl { .. } => self.to_string(),
        }
    }
}
