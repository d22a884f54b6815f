use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;
    tracing::debug!(message_len = payload.message.len(), "chat request received");

    // Empty messages are forwarded as-is; the model decides how to answer them.
    let response = generate_reply(state.provider.as_ref(), &state.config, &payload.message)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "provider call failed"))?;

    Ok(Json(ChatResponse { response }))
}
