//! Signals Tool
//!
//! Exposes the current session's behavioral signals to the model. The
//! session identifier is a required argument supplied by the calling session
//! context; the payload is already scrubbed of identity fields by the client.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use agent_core::{
    Result as CoreResult, Tool, ToolCall, ToolSchema,
    tool::ParameterSchema,
};

use crate::signals::{SESSION_ATTRIBUTE_KEY, SignalsClient, TRAVEL_SERVICE};

/// Tool for querying behavioral signals
pub struct SignalsTool {
    client: Arc<dyn SignalsClient>,
}

impl SignalsTool {
    pub fn new(client: Arc<dyn SignalsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SignalsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_signals".into(),
            description: "Access the user's current behavioral signals (pages viewed, searches, engagement) for this session.".into(),
            parameters: vec![
                ParameterSchema {
                    name: "session_id".into(),
                    param_type: "string".into(),
                    description: "The current session identifier".into(),
                    required: true,
                    default: None,
                },
                ParameterSchema {
                    name: "service".into(),
                    param_type: "string".into(),
                    description: "Signals service to query".into(),
                    required: false,
                    default: Some(serde_json::json!(TRAVEL_SERVICE)),
                },
            ],
            category: Some("signals".into()),
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<String> {
        let session_id = call.required_str("session_id")?;
        let service = call.str_arg("service").unwrap_or(TRAVEL_SERVICE);

        let attributes = self
            .client
            .service_attributes(service, SESSION_ATTRIBUTE_KEY, session_id)
            .await?;

        if attributes.is_empty() {
            return Ok("No behavioral signals recorded for this session.".into());
        }

        Ok(serde_json::to_string_pretty(&Value::Object(attributes))?)
    }
}
