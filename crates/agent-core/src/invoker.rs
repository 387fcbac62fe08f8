//! Tool Invoker
//!
//! The single point where a model-issued tool call is resolved, validated,
//! executed, and normalized. Every path through `invoke` terminates in a
//! `ToolOutcome` - never a propagated error - so the conversation loop can
//! always append the result and continue.

use std::sync::Arc;

use crate::outcome::{FailureKind, ToolOutcome};
use crate::tool::{ToolCall, ToolRegistry};

/// Dispatches tool calls against a frozen registry
#[derive(Clone)]
pub struct ToolInvoker {
    registry: Arc<ToolRegistry>,
}

impl ToolInvoker {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Resolve, validate, and execute a tool call.
    ///
    /// Unknown extra arguments are ignored for forward compatibility.
    pub async fn invoke(&self, call: &ToolCall) -> ToolOutcome {
        let Some(tool) = self.registry.get(&call.name) else {
            tracing::warn!(tool = %call.name, "model requested unregistered tool");
            return ToolOutcome::failure(
                FailureKind::UnknownTool,
                format!("The tool '{}' is not available.", call.name),
            );
        };

        let schema = tool.schema();
        for param in &schema.parameters {
            if param.required && !call.arguments.contains_key(&param.name) {
                return ToolOutcome::failure(
                    FailureKind::BadArgument,
                    format!(
                        "Invalid tool input: missing required parameter '{}' for '{}'.",
                        param.name, call.name
                    ),
                );
            }
        }

        match tool.execute(call).await {
            Ok(text) => ToolOutcome::value(text),
            Err(err) => {
                tracing::debug!(tool = %call.name, error = %err, "tool execution failed");
                ToolOutcome::from_error(&err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AgentError, Result};
    use crate::tool::{ParameterSchema, Tool, ToolSchema};
    use async_trait::async_trait;

    struct GreetTool;

    #[async_trait]
    impl Tool for GreetTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "greet".into(),
                description: "Greet someone by name".into(),
                parameters: vec![ParameterSchema {
                    name: "who".into(),
                    param_type: "string".into(),
                    description: "Name to greet".into(),
                    required: true,
                    default: None,
                }],
                category: None,
            }
        }

        async fn execute(&self, call: &ToolCall) -> Result<String> {
            Ok(format!("Hello, {}!", call.required_str("who")?))
        }
    }

    struct ThrottledTool;

    #[async_trait]
    impl Tool for ThrottledTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "throttled".into(),
                description: "Always rate limited".into(),
                parameters: vec![],
                category: None,
            }
        }

        async fn execute(&self, _call: &ToolCall) -> Result<String> {
            Err(AgentError::RateLimited("upstream throttled".into()))
        }
    }

    fn invoker() -> ToolInvoker {
        let mut registry = ToolRegistry::new();
        registry.register(GreetTool).unwrap();
        registry.register(ThrottledTool).unwrap();
        ToolInvoker::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let outcome = invoker().invoke(&ToolCall::new("missing")).await;
        assert_eq!(outcome.kind(), Some(FailureKind::UnknownTool));
        assert!(outcome.as_text().contains("missing"));
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let outcome = invoker().invoke(&ToolCall::new("greet")).await;
        assert_eq!(outcome.kind(), Some(FailureKind::BadArgument));
        assert!(outcome.as_text().contains("who"));
    }

    #[tokio::test]
    async fn test_extra_argument_ignored() {
        let call = ToolCall::new("greet")
            .with_arg("who", serde_json::json!("traveler"))
            .with_arg("unexpected", serde_json::json!(42));
        let outcome = invoker().invoke(&call).await;
        assert!(!outcome.is_failure());
        assert_eq!(outcome.as_text(), "Hello, traveler!");
    }

    #[tokio::test]
    async fn test_error_mapped_to_failure_kind() {
        let outcome = invoker().invoke(&ToolCall::new("throttled")).await;
        assert_eq!(outcome.kind(), Some(FailureKind::RateLimited));
        assert!(outcome.as_text().contains("try again later"));
        // sanitized: raw upstream text does not leak
        assert!(!outcome.as_text().contains("upstream throttled"));
    }
}
