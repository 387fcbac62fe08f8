//! Application State

use std::sync::Arc;

use agent_core::{Agent, LlmProvider, MemorySessionStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// LLM provider (Ollama, etc.)
    pub provider: Arc<dyn LlmProvider>,

    /// The travel agent driving every conversation
    pub agent: Arc<Agent>,

    /// Per-conversation sessions, exclusively owned histories
    pub sessions: Arc<MemorySessionStore>,

    /// Model identifier in use
    pub model: String,
}
