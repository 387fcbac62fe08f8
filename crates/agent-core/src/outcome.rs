//! Tool Outcomes
//!
//! The normalized success-or-failure result produced by the dispatch layer
//! for every tool invocation. The invoker never returns anything else, so
//! the conversation loop can always append a result and continue.

use serde::{Deserialize, Serialize};

use crate::error::AgentError;

/// Classification of a failed tool invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Requested tool name is not in the registry
    UnknownTool,
    /// Required parameter missing or malformed
    BadArgument,
    /// Upstream provider signaled throttling; retryable at a later turn
    RateLimited,
    /// Lookup had no matching record
    NotFound,
    /// Any other upstream fault (network, malformed response, auth)
    ProviderError,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FailureKind::UnknownTool => "unknown_tool",
            FailureKind::BadArgument => "bad_argument",
            FailureKind::RateLimited => "rate_limited",
            FailureKind::NotFound => "not_found",
            FailureKind::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}

impl From<&AgentError> for FailureKind {
    fn from(err: &AgentError) -> Self {
        match err {
            AgentError::ToolNotFound(_) => FailureKind::UnknownTool,
            AgentError::ToolValidation(_) => FailureKind::BadArgument,
            AgentError::RateLimited(_) => FailureKind::RateLimited,
            AgentError::NotFound(_) => FailureKind::NotFound,
            _ => FailureKind::ProviderError,
        }
    }
}

/// Result of a tool invocation, as seen by the conversation loop.
///
/// `Failure` messages are always safe to surface verbatim to the end user.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ToolOutcome {
    /// Successful execution; the tool's textual result
    Value { text: String },
    /// Recovered failure with a user-safe message
    Failure { kind: FailureKind, message: String },
}

impl ToolOutcome {
    pub fn value(text: impl Into<String>) -> Self {
        Self::Value { text: text.into() }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// Build a failure from an error, using its sanitized user message
    pub fn from_error(err: &AgentError) -> Self {
        Self::Failure {
            kind: FailureKind::from(err),
            message: err.user_message(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            Self::Value { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// The text payload appended to conversation history
    pub fn as_text(&self) -> &str {
        match self {
            Self::Value { text } => text,
            Self::Failure { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_from_error() {
        let err = AgentError::ToolNotFound("nope".into());
        assert_eq!(FailureKind::from(&err), FailureKind::UnknownTool);

        let err = AgentError::RateLimited("slow down".into());
        assert_eq!(FailureKind::from(&err), FailureKind::RateLimited);

        let err = AgentError::NotFound("Atlantis".into());
        assert_eq!(FailureKind::from(&err), FailureKind::NotFound);

        let err = AgentError::Provider("boom".into());
        assert_eq!(FailureKind::from(&err), FailureKind::ProviderError);
    }

    #[test]
    fn test_outcome_text() {
        let ok = ToolOutcome::value("all good");
        assert!(!ok.is_failure());
        assert_eq!(ok.as_text(), "all good");

        let bad = ToolOutcome::from_error(&AgentError::NotFound("Atlantis".into()));
        assert!(bad.is_failure());
        assert_eq!(bad.kind(), Some(FailureKind::NotFound));
        assert!(bad.as_text().contains("Atlantis"));
    }
}
