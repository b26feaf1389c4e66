//! Error types for the restaurant finder.

use thiserror::Error;

/// Primary error type for all operations in this crate.
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Tool execution error: {tool_name}: {message}")]
    ToolExecution { tool_name: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Session already exists: {0}")]
    SessionExists(String),

    #[error("Invalid UI response: {0}")]
    InvalidUiResponse(String),
}

/// Broad error category, used for logging and retry classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Server,
    Api,
    Configuration,
    Serialization,
    ToolExecution,
    Session,
    Unknown,
}

impl FinderError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::RateLimited { .. } => ErrorCategory::RateLimit,
            Self::Network(_) => ErrorCategory::Network,
            Self::ModelNotFound(_) => ErrorCategory::Configuration,
            Self::Serialization(_) | Self::InvalidUiResponse(_) => ErrorCategory::Serialization,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::ToolExecution { .. } => ErrorCategory::ToolExecution,
            Self::SessionNotFound(_) | Self::SessionExists(_) => ErrorCategory::Session,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Whether this error is potentially retryable.
    ///
    /// Nothing in this crate retries; callers can use this to decide.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit | ErrorCategory::Network | ErrorCategory::Server
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_status_maps_to_category() {
        assert_eq!(FinderError::api(401, "nope").category(), ErrorCategory::Authentication);
        assert_eq!(FinderError::api(429, "slow").category(), ErrorCategory::RateLimit);
        assert_eq!(FinderError::api(503, "down").category(), ErrorCategory::Server);
        assert_eq!(FinderError::api(400, "bad").category(), ErrorCategory::Api);
    }

    #[test]
    fn server_and_rate_limit_errors_are_retryable() {
        assert!(FinderError::api(502, "bad gateway").is_retryable());
        assert!(FinderError::RateLimited { retry_after_ms: Some(500) }.is_retryable());
        assert!(!FinderError::SessionNotFound("s1".into()).is_retryable());
        assert!(!FinderError::Authentication("missing key".into()).is_retryable());
    }

    #[test]
    fn display_includes_tool_name() {
        let err = FinderError::ToolExecution {
            tool_name: "get_restaurants".into(),
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "Tool execution error: get_restaurants: boom");
    }
}
