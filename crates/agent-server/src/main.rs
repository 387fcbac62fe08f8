//! SEA Explorer Agent Server
//!
//! Axum-based server exposing the travel agent over a REST API. All
//! configuration is injected from the environment; startup fails fast on any
//! misconfiguration (missing signals credentials, malformed dataset,
//! duplicate tool registration).

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_core::{
    Agent, AgentConfig, LlmProvider, MemorySessionStore, ToolRegistry, provider::GenerationOptions,
};
use agent_runtime::OllamaProvider;

use travel_advisor::{
    TRAVEL_AGENT_PROMPT,
    catalog::CatalogStore,
    search::DdgSearchClient,
    signals::HttpSignalsClient,
    tools::{
        AllExperiencesTool, DestinationInfoTool, ExperienceInfoTool, SignalsTool, WebSearchTool,
    },
};

use crate::handlers::{chat_handler, health_check};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize LLM provider
    let provider = Arc::new(OllamaProvider::from_env());
    let model = std::env::var("MODEL_ID").unwrap_or_else(|_| "llama3.2".into());

    match provider.health_check().await {
        Ok(true) => tracing::info!("connected to model provider, model={}", model),
        Ok(false) | Err(_) => {
            tracing::warn!("model provider not reachable - chat requests will fail");
            tracing::warn!("make sure Ollama is running: ollama serve");
        }
    }

    // External providers; missing credentials abort startup
    let search = Arc::new(DdgSearchClient::from_env()?);
    let signals = Arc::new(HttpSignalsClient::from_env()?);

    // Catalog; a malformed dataset aborts startup
    let catalog = Arc::new(CatalogStore::bundled()?);
    tracing::info!(
        destinations = catalog.destination_count(),
        experiences = catalog.experience_count(),
        "catalog loaded"
    );

    // Tool registry: the closed capability surface. Duplicate names abort.
    let mut tools = ToolRegistry::new();
    tools.register(DestinationInfoTool::new(catalog.clone()))?;
    tools.register(ExperienceInfoTool::new(catalog.clone()))?;
    tools.register(AllExperiencesTool::new(catalog))?;
    tools.register(WebSearchTool::new(search))?;
    tools.register(SignalsTool::new(signals))?;

    tracing::info!(count = tools.len(), "registered tools");
    for name in tools.names() {
        tracing::info!("  tool: {}", name);
    }

    // Build the agent
    let config = AgentConfig {
        system_prompt: TRAVEL_AGENT_PROMPT.into(),
        generation: GenerationOptions {
            model: model.clone(),
            ..Default::default()
        },
        ..Default::default()
    };
    let agent = Arc::new(Agent::new(provider.clone(), Arc::new(tools), config));

    // Build application state
    let state = AppState {
        provider,
        agent,
        sessions: Arc::new(MemorySessionStore::new()),
        model,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/chat", post(chat_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("SEA Explorer agent server running on http://{}", addr);
    tracing::info!("  GET  /health    - Health check");
    tracing::info!("  POST /api/chat  - Send message");

    axum::serve(listener, app).await?;

    Ok(())
}
