//! Web Search Tool
//!
//! Exposes the search client to the model for current information the
//! catalog cannot answer.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{
    Result as CoreResult, Tool, ToolCall, ToolSchema,
    tool::ParameterSchema,
};

use crate::search::{DEFAULT_MAX_RESULTS, DEFAULT_REGION, SearchClient};

/// Tool for running web searches
pub struct WebSearchTool {
    client: Arc<dyn SearchClient>,
}

impl WebSearchTool {
    pub fn new(client: Arc<dyn SearchClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "web_search".into(),
            description: "Search the web for updated information.".into(),
            parameters: vec![
                ParameterSchema {
                    name: "keywords".into(),
                    param_type: "string".into(),
                    description: "The search query keywords".into(),
                    required: true,
                    default: None,
                },
                ParameterSchema {
                    name: "region".into(),
                    param_type: "string".into(),
                    description: "The search region: wt-wt, us-en, uk-en, etc.".into(),
                    required: false,
                    default: Some(serde_json::json!(DEFAULT_REGION)),
                },
                ParameterSchema {
                    name: "max_results".into(),
                    param_type: "number".into(),
                    description: "The maximum number of results to return".into(),
                    required: false,
                    default: Some(serde_json::json!(DEFAULT_MAX_RESULTS)),
                },
            ],
            category: Some("search".into()),
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<String> {
        let keywords = call.required_str("keywords")?;
        let region = call.str_arg("region").unwrap_or(DEFAULT_REGION);
        let max_results = call
            .arguments
            .get("max_results")
            .and_then(|v| v.as_u64())
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_MAX_RESULTS)
            .max(1);

        let hits = self.client.search(keywords, region, max_results).await?;

        if hits.is_empty() {
            return Ok("No results found.".into());
        }

        let mut output = String::new();
        for (i, hit) in hits.iter().enumerate() {
            output.push_str(&format!("{}. {}\n   {}\n   {}\n", i + 1, hit.title, hit.url, hit.snippet));
        }

        Ok(output.trim_end().to_string())
    }
}
