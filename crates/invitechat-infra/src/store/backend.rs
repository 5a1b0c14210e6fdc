//! Configuration-selected message store.
//!
//! `MessageStore` uses RPITIT and is not object safe, so the runtime choice
//! between backends is an enum that forwards to the concrete store.

use invitechat_core::chat::store::MessageStore;
use invitechat_types::chat::{ChatMessage, Sender};
use invitechat_types::config::{StorageBackend, StorageConfig};
use invitechat_types::error::StoreError;

use crate::sqlite::message::SqliteMessageStore;
use crate::sqlite::pool::DatabasePool;
use crate::store::memory::InMemoryMessageStore;

#[derive(Clone)]
pub enum MessageStoreBackend {
    Memory(InMemoryMessageStore),
    Sqlite(SqliteMessageStore),
}

impl MessageStoreBackend {
    /// Open the store named by the configuration.
    ///
    /// For SQLite this connects and runs migrations; failures surface as
    /// `StoreError::Unavailable`.
    pub async fn open(config: &StorageConfig) -> Result<Self, StoreError> {
        match config.backend {
            StorageBackend::Memory => {
                tracing::info!("using in-memory message store");
                Ok(Self::Memory(InMemoryMessageStore::new()))
            }
            StorageBackend::Sqlite => {
                let pool = DatabasePool::new(&config.database_url)
                    .await
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;
                tracing::info!(url = %config.database_url, "using SQLite message store");
                Ok(Self::Sqlite(SqliteMessageStore::new(pool)))
            }
        }
    }

    pub fn kind(&self) -> StorageBackend {
        match self {
            Self::Memory(_) => StorageBackend::Memory,
            Self::Sqlite(_) => StorageBackend::Sqlite,
        }
    }
}

impl MessageStore for MessageStoreBackend {
    async fn create_chat_message(
        &self,
        content: &str,
        sender: Sender,
        session_id: &str,
    ) -> Result<ChatMessage, StoreError> {
        match self {
            Self::Memory(store) => store.create_chat_message(content, sender, session_id).await,
            Self::Sqlite(store) => store.create_chat_message(content, sender, session_id).await,
        }
    }

    async fn get_chat_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, StoreError> {
        match self {
            Self::Memory(store) => store.get_chat_messages(session_id).await,
            Self::Sqlite(store) => store.get_chat_messages(session_id).await,
        }
    }
}
