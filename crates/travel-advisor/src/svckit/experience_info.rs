//! Experience Info Tool
//!
//! Looks up a single experience record by name in the catalog.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{
    Result as CoreResult, Tool, ToolCall, ToolSchema,
    tool::ParameterSchema,
};

use crate::catalog::CatalogStore;

/// Tool for fetching experience details
pub struct ExperienceInfoTool {
    catalog: Arc<CatalogStore>,
}

impl ExperienceInfoTool {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for ExperienceInfoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_experience_info".into(),
            description: "Get detailed information about a specific experience, including duration, price, and tags.".into(),
            parameters: vec![ParameterSchema {
                name: "experience".into(),
                param_type: "string".into(),
                description: "Experience name (e.g., 'Thai Cooking Class')".into(),
                required: true,
                default: None,
            }],
            category: Some("catalog".into()),
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<String> {
        let name = call.required_str("experience")?;
        let record = self.catalog.get_experience(name)?;
        Ok(serde_json::to_string_pretty(record)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::{FailureKind, ToolInvoker, ToolRegistry};
    use serde_json::json;

    fn invoker() -> ToolInvoker {
        let catalog = Arc::new(CatalogStore::bundled().unwrap());
        let mut registry = ToolRegistry::new();
        registry.register(ExperienceInfoTool::new(catalog)).unwrap();
        ToolInvoker::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let call =
            ToolCall::new("get_experience_info").with_arg("experience", json!("thai cooking class"));
        let outcome = invoker().invoke(&call).await;

        assert!(!outcome.is_failure());
        assert!(outcome.as_text().contains("Market Tour"));
    }

    #[tokio::test]
    async fn test_miss_is_not_found_outcome() {
        let call =
            ToolCall::new("get_experience_info").with_arg("experience", json!("Moon Landing"));
        let outcome = invoker().invoke(&call).await;

        assert_eq!(outcome.kind(), Some(FailureKind::NotFound));
    }

    #[tokio::test]
    async fn test_missing_argument_is_bad_argument() {
        let outcome = invoker().invoke(&ToolCall::new("get_experience_info")).await;
        assert_eq!(outcome.kind(), Some(FailureKind::BadArgument));
    }
}
