//! Chat HTTP handlers.
//!
//! Endpoints:
//! - POST /api/chat              - Run one chat turn
//! - GET  /api/chat/{session_id} - Stored history for a session

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use invitechat_types::chat::{ChatHistoryResponse, ChatRequest, ChatResponse};
use invitechat_types::error::ChatError;

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/chat - Store the user message, ask upstream, store and return the reply.
///
/// A body that is not JSON or lacks `message`/`sessionId` is a validation
/// failure, same as a blank message.
pub async fn send_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(
            status = rejection.status().as_u16(),
            reason = %rejection.body_text(),
            "chat request body rejected"
        );
        ChatError::ValidationFailed(rejection.body_text())
    })?;

    let response = state.chat_service.handle_turn(&request).await?;

    Ok(Json(ChatResponse { response }))
}

/// GET /api/chat/{session_id} - All messages for a session in insertion order.
pub async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ChatHistoryResponse>, AppError> {
    let messages = state.chat_service.history(&session_id).await?;
    Ok(Json(ChatHistoryResponse { messages }))
}
