//! SQLite message store implementation.
//!
//! Implements `MessageStore` from `invitechat-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, inserts on the
//! single-connection writer.

use chrono::{DateTime, Utc};
use invitechat_core::chat::store::MessageStore;
use invitechat_types::chat::{ChatMessage, Sender};
use invitechat_types::error::StoreError;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageStore`.
#[derive(Clone)]
pub struct SqliteMessageStore {
    pool: DatabasePool,
}

impl SqliteMessageStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row type for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct ChatMessageRow {
    id: i64,
    session_id: String,
    sender: String,
    content: String,
    timestamp: String,
}

impl ChatMessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            sender: row.try_get("sender")?,
            content: row.try_get("content")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_message(self) -> Result<ChatMessage, StoreError> {
        let sender: Sender = self.sender.parse().map_err(StoreError::Corrupt)?;
        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| StoreError::Corrupt(format!("invalid timestamp: {e}")))?;

        Ok(ChatMessage {
            id: self.id,
            session_id: self.session_id,
            sender,
            content: self.content,
            timestamp,
        })
    }
}

fn unavailable(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

// ---------------------------------------------------------------------------
// MessageStore implementation
// ---------------------------------------------------------------------------

impl MessageStore for SqliteMessageStore {
    async fn create_chat_message(
        &self,
        content: &str,
        sender: Sender,
        session_id: &str,
    ) -> Result<ChatMessage, StoreError> {
        let timestamp = Utc::now();

        let row = sqlx::query(
            r#"INSERT INTO chat_messages (session_id, sender, content, timestamp)
               VALUES (?, ?, ?, ?)
               RETURNING id"#,
        )
        .bind(session_id)
        .bind(sender.to_string())
        .bind(content)
        .bind(timestamp.to_rfc3339())
        .fetch_one(&self.pool.writer)
        .await
        .map_err(unavailable)?;

        let id: i64 = row.try_get("id").map_err(unavailable)?;

        Ok(ChatMessage {
            id,
            session_id: session_id.to_string(),
            sender,
            content: content.to_string(),
            timestamp,
        })
    }

    async fn get_chat_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, StoreError> {
        let rows = sqlx::query("SELECT * FROM chat_messages WHERE session_id = ? ORDER BY id ASC")
            .bind(session_id)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(unavailable)?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row = ChatMessageRow::from_row(row).map_err(unavailable)?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> (SqliteMessageStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (SqliteMessageStore::new(pool), dir)
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let (store, _dir) = test_store().await;

        let first = store.create_chat_message("xin chào", Sender::User, "s1").await.unwrap();
        let second = store.create_chat_message("chào bạn", Sender::Bot, "s2").await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.session_id, "s1");
        assert_eq!(second.sender, Sender::Bot);
    }

    #[tokio::test]
    async fn test_get_messages_in_insertion_order() {
        let (store, _dir) = test_store().await;

        store.create_chat_message("Giá gói Pro?", Sender::User, "s1").await.unwrap();
        store.create_chat_message("other session", Sender::User, "s2").await.unwrap();
        store.create_chat_message("289k", Sender::Bot, "s1").await.unwrap();

        let messages = store.get_chat_messages("s1").await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "Giá gói Pro?");
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[1].content, "289k");
        assert_eq!(messages[1].sender, Sender::Bot);
    }

    #[tokio::test]
    async fn test_unknown_session_is_empty() {
        let (store, _dir) = test_store().await;
        let messages = store.get_chat_messages("nobody").await.unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_roundtrip_preserves_fields() {
        let (store, _dir) = test_store().await;

        let created = store
            .create_chat_message("Thiệp điện tử 🎉", Sender::User, "s-utf8")
            .await
            .unwrap();
        let loaded = store.get_chat_messages("s-utf8").await.unwrap();

        assert_eq!(loaded[0].id, created.id);
        assert_eq!(loaded[0].content, "Thiệp điện tử 🎉");
        assert_eq!(loaded[0].timestamp.timestamp_millis(), created.timestamp.timestamp_millis());
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let (store, _dir) = test_store().await;

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create_chat_message(&format!("msg {i}"), Sender::User, "busy")
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let messages = store.get_chat_messages("busy").await.unwrap();
        assert_eq!(messages.len(), 20);
        assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
    }
}
