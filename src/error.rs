use thiserror::Error;

/// Every failure is terminal for the invocation: main prints it to stderr
/// and exits 1. Nothing is retried.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {code} - {message}")]
    Api { code: String, message: String },

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    pub fn usage(msg: impl Into<String>) -> Self {
        GatewayError::Usage(msg.into())
    }

    /// True for non-2xx responses the server described itself; false for
    /// transport-level failures. Tests use this to tell the two paths apart.
    pub fn is_api_error(&self) -> bool {
        matches!(self, GatewayError::Api { .. })
    }
}
