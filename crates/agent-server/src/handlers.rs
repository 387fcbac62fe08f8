//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use agent_core::{Session, SessionId, SessionStore};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub model: String,
    pub model_connected: bool,
    pub tools: usize,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub conversation_id: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint: structured readiness including the number of
/// successfully registered tools.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model_connected = state.provider.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        model: state.model.clone(),
        model_connected,
        tools: state.agent.tools().len(),
    })
}

/// Main chat endpoint
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let conversation_id = payload
        .conversation_id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let session_id = SessionId::from_string(conversation_id.clone());

    let mut session = load_session(&state, &session_id).map_err(internal_error)?;

    let reply = state
        .agent
        .handle_turn(&mut session.conversation, &payload.message)
        .await
        .map_err(|e| {
            tracing::error!("agent error: {}", e);
            internal_error(e)
        })?;

    session.touch();
    state.sessions.save(&session).map_err(internal_error)?;

    Ok(Json(ChatResponse {
        message: reply,
        conversation_id,
        model: state.model.clone(),
    }))
}

/// Load an existing session or start a new one with the session-scoped
/// system prompt (so the model knows the identifier to pass to get_signals).
fn load_session(
    state: &AppState,
    id: &SessionId,
) -> agent_core::Result<Session> {
    if let Some(session) = state.sessions.load(id)? {
        return Ok(session);
    }

    let prompt = format!(
        "{}\n\nThe current session identifier is `{}`. Pass it as `session_id` when calling get_signals.",
        state.agent.build_system_prompt(),
        id
    );
    Ok(Session::with_system_prompt(id.clone(), prompt))
}

fn internal_error(e: agent_core::AgentError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.user_message(),
            code: "AGENT_ERROR".into(),
        }),
    )
}
