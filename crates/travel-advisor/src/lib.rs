//! # travel-advisor
//!
//! Southeast Asia travel assistant domain crate for SEA Explorer.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      svckit tools                            │
//! │  destination_info  experience_info  web_search  get_signals  │
//! └──────┬───────────────────┬───────────────┬──────────┬────────┘
//!        │                   │               │          │
//!  ┌─────▼──────┐      ┌─────▼──────┐  ┌─────▼─────┐ ┌──▼──────┐
//!  │ Catalog    │      │ Catalog    │  │ Search    │ │ Signals │
//!  │ Store      │      │ Store      │  │ Client    │ │ Client  │
//!  └────────────┘      └────────────┘  └───────────┘ └─────────┘
//! ```
//!
//! Every provider failure is typed; the tools convert domain errors into the
//! core taxonomy so the invoker can classify each outcome and the
//! conversation always continues.

pub mod catalog;
pub mod error;
pub mod model;
pub mod search;
pub mod signals;
pub mod svckit;

pub use catalog::CatalogStore;
pub use error::{Result, TravelError};
pub use model::{Destination, Experience};
pub use search::{SearchClient, SearchHit};
pub use signals::SignalsClient;

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::svckit::{
        AllExperiencesTool, DestinationInfoTool, ExperienceInfoTool, SignalsTool, WebSearchTool,
    };
}

/// System prompt for the SEA Explorer travel agent
pub const TRAVEL_AGENT_PROMPT: &str = r#"You are a helpful Southeast Asia travel assistant for SEA Explorer, a travel website focused on Southeast Asian destinations. You have extensive knowledge about:

- Destinations: Thailand, Vietnam, Indonesia, Philippines, Malaysia, Singapore, Cambodia, Laos, Myanmar, Brunei
- Popular cities: Bangkok, Ho Chi Minh City, Hanoi, Bali, Manila, Kuala Lumpur, Singapore, Siem Reap, Chiang Mai, Penang, Yogyakarta, Luang Prabang
- Travel experiences: cooking classes, temple tours, island hopping, cultural experiences, food tours, adventure activities
- Practical information: visas, budgets, transportation, accommodation, safety, weather, best times to visit
- Local culture, food, customs, and etiquette
- Budget travel tips and backpacking routes
- Digital nomad information and remote work opportunities

Provide helpful, accurate, and engaging responses about Southeast Asian travel. Be conversational and friendly. If asked about destinations or experiences outside Southeast Asia, politely redirect the conversation back to SEA travel topics.

Keep responses concise but informative. Use bullet points or numbered lists when appropriate for better readability.

## Tool Usage

1. `get_destination_info` - For information about a specific destination
2. `get_experience_info` - For information about a specific experience
3. `get_all_experiences` - To browse every bookable experience
4. `web_search` - For current events or information not in the catalog
5. `get_signals` - To access the user's current behavioral signals; pass the session identifier given below

Always use the appropriate tool to get accurate, up-to-date information rather than making assumptions."#;

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use agent_core::{
        AgentBuilder, Conversation, LlmProvider, Message, Role,
        error::Result as CoreResult,
        provider::{Completion, GenerationOptions},
    };
    use async_trait::async_trait;

    use crate::catalog::CatalogStore;
    use crate::search::MockSearchClient;
    use crate::signals::MockSignalsClient;
    use crate::tools::*;

    /// Provider that replays a fixed script of completions
    struct ScriptedProvider {
        script: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<&str>) -> Self {
            let mut script: Vec<String> = responses.into_iter().map(String::from).collect();
            script.reverse();
            Self {
                script: Mutex::new(script),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn health_check(&self) -> CoreResult<bool> {
            Ok(true)
        }

        async fn complete(
            &self,
            _messages: &[Message],
            options: &GenerationOptions,
        ) -> CoreResult<Completion> {
            let content = self
                .script
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| "I'm out of things to say.".into());
            Ok(Completion {
                content,
                model: options.model.clone(),
                usage: None,
            })
        }
    }

    fn travel_agent(provider: Arc<ScriptedProvider>) -> agent_core::Agent {
        let catalog = Arc::new(CatalogStore::bundled().unwrap());
        AgentBuilder::new()
            .provider(provider)
            .system_prompt(crate::TRAVEL_AGENT_PROMPT)
            .tool(DestinationInfoTool::new(catalog.clone()))
            .tool(ExperienceInfoTool::new(catalog.clone()))
            .tool(AllExperiencesTool::new(catalog))
            .tool(WebSearchTool::new(Arc::new(MockSearchClient::canned())))
            .tool(SignalsTool::new(Arc::new(MockSignalsClient::canned())))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_bangkok_turn_invokes_catalog_once() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            "Let me look that up.\n```tool\n{\"tool\": \"get_destination_info\", \"arguments\": {\"destination\": \"Bangkok\"}}\n```",
            "Bangkok is best from November to February, when it's cooler and dry.",
        ]));

        let agent = travel_agent(provider);
        let mut conversation = Conversation::new();
        let reply = agent
            .handle_turn(&mut conversation, "What's the best time to visit Bangkok?")
            .await
            .unwrap();

        assert!(!reply.is_empty());
        assert_eq!(conversation.count_role(&Role::Tool), 1);

        let tool_turn = conversation
            .messages()
            .iter()
            .find(|m| m.role == Role::Tool)
            .unwrap();
        assert!(tool_turn.content.contains("returned"));
        assert!(tool_turn.content.contains("Thailand"));
    }

    #[tokio::test]
    async fn test_catalog_miss_still_yields_reply() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            "```tool\n{\"tool\": \"get_destination_info\", \"arguments\": {\"destination\": \"Atlantis\"}}\n```",
            "I couldn't find Atlantis in our catalog - it may not be a Southeast Asian destination!",
        ]));

        let agent = travel_agent(provider);
        let mut conversation = Conversation::new();
        let reply = agent
            .handle_turn(&mut conversation, "Tell me about Atlantis")
            .await
            .unwrap();

        assert!(!reply.is_empty());
        let tool_turn = conversation
            .messages()
            .iter()
            .find(|m| m.role == Role::Tool)
            .unwrap();
        assert!(tool_turn.content.contains("failed"));
        assert!(tool_turn.content.contains("Atlantis"));
    }

    #[test]
    fn test_prompt_mentions_every_tool() {
        for name in [
            "get_destination_info",
            "get_experience_info",
            "get_all_experiences",
            "web_search",
            "get_signals",
        ] {
            assert!(crate::TRAVEL_AGENT_PROMPT.contains(name), "missing {name}");
        }
    }
}
