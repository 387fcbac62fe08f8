//! Destination Info Tool
//!
//! Looks up a destination record by name in the catalog.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{
    Result as CoreResult, Tool, ToolCall, ToolSchema,
    tool::ParameterSchema,
};

use crate::catalog::CatalogStore;

/// Tool for fetching destination details
pub struct DestinationInfoTool {
    catalog: Arc<CatalogStore>,
}

impl DestinationInfoTool {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for DestinationInfoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_destination_info".into(),
            description: "Get information about a specific destination, including descriptions, ratings, highlights and tags.".into(),
            parameters: vec![ParameterSchema {
                name: "destination".into(),
                param_type: "string".into(),
                description: "The name of the destination (e.g., 'Bangkok')".into(),
                required: true,
                default: None,
            }],
            category: Some("catalog".into()),
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<String> {
        let name = call.required_str("destination")?;
        let record = self.catalog.get_destination(name)?;
        Ok(serde_json::to_string_pretty(record)?)
    }
}
