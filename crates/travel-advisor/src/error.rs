//! Error Types for the Travel Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TravelError>;

#[derive(Error, Debug)]
pub enum TravelError {
    /// Catalog lookup had no matching record
    #[error("No catalog entry for '{0}'")]
    NotFound(String),

    /// Search provider signaled throttling
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Transport-level fault reaching a provider
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Search provider fault other than throttling
    #[error("Search error: {0}")]
    Search(String),

    /// Signals provider fault (network, auth, malformed response)
    #[error("Signals error: {0}")]
    Signals(String),

    /// Configuration error (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Map domain failures onto the core taxonomy so tools can use `?` and the
/// invoker classifies the outcome correctly.
impl From<TravelError> for agent_core::AgentError {
    fn from(err: TravelError) -> Self {
        use agent_core::AgentError;
        match err {
            TravelError::NotFound(what) => AgentError::NotFound(what),
            TravelError::RateLimited(msg) => AgentError::RateLimited(msg),
            TravelError::Unavailable(msg) => AgentError::ProviderUnavailable(msg),
            TravelError::Search(msg) | TravelError::Signals(msg) => AgentError::Provider(msg),
            TravelError::Config(msg) => AgentError::Config(msg),
            TravelError::Serialization(e) => AgentError::Json(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::{AgentError, FailureKind};

    #[test]
    fn test_taxonomy_mapping() {
        let err: AgentError = TravelError::NotFound("Atlantis".into()).into();
        assert_eq!(FailureKind::from(&err), FailureKind::NotFound);

        let err: AgentError = TravelError::RateLimited("slow down".into()).into();
        assert_eq!(FailureKind::from(&err), FailureKind::RateLimited);

        let err: AgentError = TravelError::Unavailable("down".into()).into();
        assert_eq!(FailureKind::from(&err), FailureKind::ProviderError);

        let err: AgentError = TravelError::Search("bad".into()).into();
        assert_eq!(FailureKind::from(&err), FailureKind::ProviderError);
    }
}
