//! Chat service orchestrating a single chat turn and the history read path.
//!
//! ChatService coordinates the `MessageStore` and the `CompletionClient`:
//! validate -> store user message -> complete -> store bot message -> reply.
//! The user's message is recorded before the upstream call so a failed
//! completion still leaves the user's turn in history.

use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

use invitechat_types::chat::{ChatMessage, ChatRequest, Sender};
use invitechat_types::error::{ChatError, StoreError};

use crate::chat::store::MessageStore;
use crate::chat::turn::{TurnStage, preview, validate};
use crate::llm::client::CompletionClient;

/// Orchestrates chat turns and history lookups.
///
/// Generic over `MessageStore` and `CompletionClient` to maintain clean
/// architecture (invitechat-core never depends on invitechat-infra).
pub struct ChatService<S: MessageStore, C: CompletionClient> {
    store: S,
    client: C,
}

impl<S: MessageStore, C: CompletionClient> ChatService<S, C> {
    pub fn new(store: S, client: C) -> Self {
        Self { store, client }
    }

    /// Run one chat turn and return the bot's reply.
    ///
    /// On success exactly two messages (user, then bot) have been appended to
    /// the session. On `CompletionFailed` or `Misconfigured` only the user
    /// message was appended. On `ValidationFailed` nothing was written.
    pub async fn handle_turn(&self, request: &ChatRequest) -> Result<String, ChatError> {
        let span = info_span!(
            "chat_turn",
            turn_id = %Uuid::now_v7(),
            session_id = %request.session_id,
        );

        async {
            let mut stage = TurnStage::Received;
            let result = self.advance(request, &mut stage).await;

            match &result {
                Ok(reply) => {
                    info!(stage = %stage, reply_chars = reply.chars().count(), "chat turn complete");
                }
                Err(ChatError::ValidationFailed(reason)) => {
                    warn!(
                        stage = %stage,
                        text_preview = %preview(&request.message),
                        reason = %reason,
                        "chat turn rejected"
                    );
                }
                Err(e) => {
                    error!(
                        stage = %stage,
                        text_preview = %preview(&request.message),
                        error = %e,
                        "chat turn failed"
                    );
                }
            }

            result
        }
        .instrument(span)
        .await
    }

    /// Walk the turn stages, leaving `stage` at the last one reached.
    async fn advance(
        &self,
        request: &ChatRequest,
        stage: &mut TurnStage,
    ) -> Result<String, ChatError> {
        validate(request)?;
        *stage = TurnStage::Validated;

        self.store
            .create_chat_message(&request.message, Sender::User, &request.session_id)
            .await?;
        *stage = TurnStage::UserStored;

        *stage = TurnStage::Completing;
        debug!(model = %self.client.model(), "requesting completion");
        let reply = self.client.complete(&request.message).await?;

        self.store
            .create_chat_message(&reply, Sender::Bot, &request.session_id)
            .await?;
        *stage = TurnStage::BotStored;

        *stage = TurnStage::Responded;
        Ok(reply)
    }

    /// All stored messages for a session, oldest first.
    ///
    /// An unknown session yields an empty list.
    pub async fn history(&self, session_id: &str) -> Result<Vec<ChatMessage>, StoreError> {
        let messages = self.store.get_chat_messages(session_id).await?;
        debug!(session_id = %session_id, count = messages.len(), "history loaded");
        Ok(messages)
    }
}
