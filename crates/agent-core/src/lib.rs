//! # agent-core
//!
//! Core agent logic with provider-agnostic LLM abstraction and a bounded,
//! auditable tool-dispatch layer.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Agent                                 │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────────┐  │
//! │  │  Reasoning  │  │ ToolInvoker  │  │   LlmProvider       │  │
//! │  │    Loop     │──│ + Registry   │  │   (Strategy)        │  │
//! │  └─────────────┘  └──────────────┘  └─────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The registry is the closed set of capabilities built at startup; the
//! invoker turns every tool call - including ones naming unregistered tools
//! or carrying bad arguments - into a `ToolOutcome` the conversation can
//! absorb. A provider failure never crashes a session.

pub mod error;
pub mod invoker;
pub mod message;
pub mod outcome;
pub mod provider;
pub mod reasoning;
pub mod session;
pub mod tool;

pub use error::{AgentError, Result};
pub use invoker::ToolInvoker;
pub use message::{Conversation, Message, Role};
pub use outcome::{FailureKind, ToolOutcome};
pub use provider::LlmProvider;
pub use reasoning::{Agent, AgentBuilder, AgentConfig};
pub use session::{MemorySessionStore, Session, SessionId, SessionStore};
pub use tool::{ParameterSchema, Tool, ToolCall, ToolRegistry, ToolSchema};
