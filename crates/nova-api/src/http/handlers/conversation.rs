//! Conversation HTTP handlers.
//!
//! Endpoints:
//! - POST /ask           - Send one message, get the reply
//! - GET  /history       - Rolling window of recent turns
//! - POST /clear-history - Empty the rolling window

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use nova_types::chat::Turn;

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Missing means an empty message.
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// POST /ask
///
/// Always answers 200. Oracle failures come back as the persona's snag
/// message in `response`.
pub async fn ask(State(state): State<AppState>, Json(body): Json<AskRequest>) -> Json<AskResponse> {
    let response = state.session.handle_message(&body.message).await;
    Json(AskResponse { response })
}

/// GET /history
pub async fn history(State(state): State<AppState>) -> Json<Vec<Turn>> {
    Json(state.session.history().await)
}

/// POST /clear-history
pub async fn clear_history(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    state.session.clear_history().await?;
    Ok(Json(StatusResponse {
        status: "History cleared".to_string(),
    }))
}
