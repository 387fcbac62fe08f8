//! Reasoning Loop
//!
//! Drives the request/response cycle with the model: each turn either ends in
//! a final answer or a tool-call request that is dispatched through the
//! `ToolInvoker` and fed back into the conversation.

use std::sync::Arc;

use crate::error::{AgentError, Result};
use crate::invoker::ToolInvoker;
use crate::message::{Conversation, Message, Role};
use crate::outcome::ToolOutcome;
use crate::provider::{GenerationOptions, LlmProvider};
use crate::tool::{Tool, ToolCall, ToolRegistry};

/// Agent configuration
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// System prompt template
    pub system_prompt: String,

    /// Maximum reasoning iterations before falling back
    pub max_iterations: usize,

    /// Generation options
    pub generation: GenerationOptions,

    /// Whether to append tool descriptions to system prompt
    pub inject_tool_descriptions: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            max_iterations: 10,
            generation: GenerationOptions::default(),
            inject_tool_descriptions: true,
        }
    }
}

const DEFAULT_SYSTEM_PROMPT: &str = r#"You are a helpful AI assistant.

When you need to use a tool, respond with a JSON block in this exact format:
```tool
{"tool": "tool_name", "arguments": {"arg1": "value1"}}
```

After receiving tool results, synthesize them into a helpful response.
If you can answer directly without tools, do so.
Be concise and accurate."#;

/// Reply used when the reasoning loop exhausts its iteration cap.
/// Returned instead of an error so the conversation always continues.
const FALLBACK_REPLY: &str =
    "I wasn't able to finish working through that request. Could you rephrase it or ask something simpler?";

/// The main Agent struct
pub struct Agent {
    provider: Arc<dyn LlmProvider>,
    invoker: ToolInvoker,
    config: AgentConfig,
}

impl Agent {
    /// Create a new agent over a frozen tool registry
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        tools: Arc<ToolRegistry>,
        config: AgentConfig,
    ) -> Self {
        Self {
            provider,
            invoker: ToolInvoker::new(tools),
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(provider: Arc<dyn LlmProvider>, tools: Arc<ToolRegistry>) -> Self {
        Self::new(provider, tools, AgentConfig::default())
    }

    /// Build the full system prompt including tool descriptions
    pub fn build_system_prompt(&self) -> String {
        let mut prompt = self.config.system_prompt.clone();

        if self.config.inject_tool_descriptions && !self.invoker.registry().is_empty() {
            prompt.push_str("\n\n");
            prompt.push_str(&self.invoker.registry().generate_prompt_section());
        }

        prompt
    }

    /// Handle one user turn: append the user message, then loop until the
    /// model produces a final answer or the iteration cap is reached.
    pub async fn handle_turn(&self, conversation: &mut Conversation, text: &str) -> Result<String> {
        if conversation.messages().first().map(|m| &m.role) != Some(&Role::System) {
            let messages = conversation.messages_mut();
            messages.insert(0, Message::system(self.build_system_prompt()));
        }

        conversation.push(Message::user(text));

        for _ in 0..self.config.max_iterations {
            let completion = self
                .provider
                .complete(conversation.messages(), &self.config.generation)
                .await?;

            let content = completion.content.clone();
            conversation.push(Message::assistant(&content));

            if let Some(tool_call) = self.parse_tool_call(&content) {
                tracing::debug!(tool = %tool_call.name, "executing tool");

                let outcome = self.invoker.invoke(&tool_call).await;
                let tool_message = self.format_outcome(&tool_call, &outcome);
                conversation.push(Message::tool(tool_message, tool_call.id.clone()));

                continue;
            }

            return Ok(content);
        }

        tracing::warn!(
            max_iterations = self.config.max_iterations,
            "iteration cap reached, returning fallback reply"
        );
        conversation.push(Message::assistant(FALLBACK_REPLY));
        Ok(FALLBACK_REPLY.into())
    }

    /// Run with a simple string input (creates temporary conversation)
    pub async fn ask(&self, question: &str) -> Result<String> {
        let mut conversation = Conversation::new();
        self.handle_turn(&mut conversation, question).await
    }

    /// Parse a tool call from LLM response
    fn parse_tool_call(&self, content: &str) -> Option<ToolCall> {
        // Look for ```tool ... ``` blocks
        let tool_start = "```tool";
        let tool_end = "```";

        if let Some(start_idx) = content.find(tool_start) {
            let after_marker = &content[start_idx + tool_start.len()..];
            if let Some(end_idx) = after_marker.find(tool_end) {
                let json_str = after_marker[..end_idx].trim();

                if let Ok(mut call) = serde_json::from_str::<ToolCall>(json_str) {
                    if call.id.is_none() {
                        call.id = Some(uuid::Uuid::new_v4().to_string());
                    }
                    return Some(call);
                }
            }
        }

        // Fallback: try to find raw JSON with "tool" key
        self.parse_inline_tool_call(content)
    }

    /// Try to parse inline JSON tool call
    fn parse_inline_tool_call(&self, content: &str) -> Option<ToolCall> {
        if !content.contains(r#""tool""#) {
            return None;
        }

        let start = content.find('{')?;
        let end = content.rfind('}')?;

        if end <= start {
            return None;
        }

        let json_str = &content[start..=end];
        serde_json::from_str::<ToolCall>(json_str).ok()
    }

    /// Format a tool outcome for conversation history
    fn format_outcome(&self, call: &ToolCall, outcome: &ToolOutcome) -> String {
        match outcome {
            ToolOutcome::Value { text } => {
                format!("[Tool '{}' returned]\n{}", call.name, text)
            }
            ToolOutcome::Failure { message, .. } => {
                format!("[Tool '{}' failed]\n{}", call.name, message)
            }
        }
    }

    /// Get the tool registry
    pub fn tools(&self) -> &ToolRegistry {
        self.invoker.registry()
    }

    /// Get configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

/// Builder for Agent configuration
pub struct AgentBuilder {
    provider: Option<Arc<dyn LlmProvider>>,
    tools: Vec<Arc<dyn Tool>>,
    config: AgentConfig,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            provider: None,
            tools: Vec::new(),
            config: AgentConfig::default(),
        }
    }

    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn tool<T: Tool + 'static>(mut self, tool: T) -> Self {
        self.tools.push(Arc::new(tool));
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = prompt.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.generation.model = model.into();
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.generation.temperature = temp;
        self
    }

    pub fn max_iterations(mut self, max: usize) -> Self {
        self.config.max_iterations = max;
        self
    }

    /// Register all tools and build. Duplicate tool names surface here as a
    /// configuration error.
    pub fn build(self) -> Result<Agent> {
        let provider = self
            .provider
            .ok_or_else(|| AgentError::Config("Provider is required".into()))?;

        let mut registry = ToolRegistry::new();
        for tool in self.tools {
            registry.register_arc(tool)?;
        }

        Ok(Agent::new(provider, Arc::new(registry), self.config))
    }
}
