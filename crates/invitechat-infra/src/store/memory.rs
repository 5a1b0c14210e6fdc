//! In-memory message store.
//!
//! Sessions live in a `DashMap` keyed by session id. The global id sequence
//! is an atomic counter; an id is drawn while the session's shard lock is
//! held, so within a session insertion order and id order always agree.
//! Contents are lost on restart.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use dashmap::DashMap;

use invitechat_core::chat::store::MessageStore;
use invitechat_types::chat::{ChatMessage, Sender};
use invitechat_types::error::StoreError;

/// Process-local `MessageStore`. Cloning shares the same underlying data.
#[derive(Clone, Default)]
pub struct InMemoryMessageStore {
    sessions: Arc<DashMap<String, Vec<ChatMessage>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageStore for InMemoryMessageStore {
    async fn create_chat_message(
        &self,
        content: &str,
        sender: Sender,
        session_id: &str,
    ) -> Result<ChatMessage, StoreError> {
        let mut entry = self.sessions.entry(session_id.to_string()).or_default();

        let message = ChatMessage {
            id: self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
            session_id: session_id.to_string(),
            sender,
            content: content.to_string(),
            timestamp: Utc::now(),
        };
        entry.push(message.clone());

        Ok(message)
    }

    async fn get_chat_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, StoreError> {
        Ok(self
            .sessions
            .get(session_id)
            .map(|messages| messages.value().clone())
            .unwrap_or_default())
    }
}
