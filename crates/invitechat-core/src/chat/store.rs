//! MessageStore trait definition.
//!
//! Append-only keyed collection of chat messages, queried by session.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use invitechat_types::chat::{ChatMessage, Sender};
use invitechat_types::error::StoreError;

/// Repository trait for chat message persistence.
///
/// Implementations live in invitechat-infra (`InMemoryMessageStore`,
/// `SqliteMessageStore`). Appending is the only mutation: implementations
/// must tolerate concurrent appends without lost writes, and must keep a
/// session's messages in insertion order.
pub trait MessageStore: Send + Sync {
    /// Append a message, assigning its `id` and `timestamp`.
    ///
    /// Returns the stored record.
    fn create_chat_message(
        &self,
        content: &str,
        sender: Sender,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<ChatMessage, StoreError>> + Send;

    /// All messages for a session in insertion order.
    ///
    /// An unknown session yields an empty vector, never an error.
    fn get_chat_messages(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, StoreError>> + Send;
}
