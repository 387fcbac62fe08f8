//! Error Types

use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Agent error types
#[derive(Error, Debug)]
pub enum AgentError {
    /// LLM provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unavailable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Tool not found in registry
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool argument validation failed
    #[error("Tool validation error: {0}")]
    ToolValidation(String),

    /// Tool execution failed
    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by an upstream service
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Configuration error (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl AgentError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AgentError::ProviderUnavailable(_) | AgentError::RateLimited(_) | AgentError::Io(_)
        )
    }

    /// Convert to a message safe to surface verbatim to the end user.
    ///
    /// Never includes raw upstream error bodies, stack traces, or credentials.
    pub fn user_message(&self) -> String {
        match self {
            AgentError::Provider(msg) => format!("The service encountered an error: {}", msg),
            AgentError::ProviderUnavailable(_) => {
                "The service is currently unavailable. Please try again later.".into()
            }
            AgentError::ToolNotFound(name) => format!("The tool '{}' is not available.", name),
            AgentError::ToolValidation(msg) => format!("Invalid tool input: {}", msg),
            AgentError::ToolExecution(msg) => format!("Tool error: {}", msg),
            AgentError::NotFound(what) => format!("No information found for '{}'.", what),
            AgentError::RateLimited(_) => "Rate limit reached. Please try again later.".into(),
            AgentError::Config(msg) => format!("Configuration error: {}", msg),
            _ => "An unexpected error occurred.".into(),
        }
    }
}

impl From<anyhow::Error> for AgentError {
    fn from(err: anyhow::Error) -> Self {
        AgentError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(AgentError::RateLimited("throttled".into()).is_retryable());
        assert!(AgentError::ProviderUnavailable("down".into()).is_retryable());
        assert!(!AgentError::NotFound("Atlantis".into()).is_retryable());
        assert!(!AgentError::Config("bad".into()).is_retryable());
    }

    #[test]
    fn test_user_messages_are_sanitized() {
        let err = AgentError::RateLimited("raw upstream body with secrets".into());
        assert!(!err.user_message().contains("secrets"));

        let err = AgentError::ProviderUnavailable("connect error: 10.0.0.5:443".into());
        assert!(!err.user_message().contains("10.0.0.5"));
    }
}
