//! `invitechat history` - print a stored session.

use console::style;

use invitechat_core::chat::store::MessageStore;
use invitechat_infra::store::backend::MessageStoreBackend;
use invitechat_types::chat::{ChatHistoryResponse, Sender};
use invitechat_types::config::{StorageBackend, StorageConfig};

/// Print every message of `session_id`, oldest first.
pub async fn show_history(
    storage: &StorageConfig,
    session_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    if storage.backend == StorageBackend::Memory {
        tracing::warn!("memory backend starts empty; use --storage sqlite to read persisted history");
    }

    let store = MessageStoreBackend::open(storage).await?;
    let messages = store.get_chat_messages(session_id).await?;

    if json {
        let body = ChatHistoryResponse { messages };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if messages.is_empty() {
        println!();
        println!(
            "  {} No messages for session {}",
            style("i").blue().bold(),
            style(session_id).cyan()
        );
        println!();
        return Ok(());
    }

    println!();
    println!(
        "  {} ({} messages)",
        style(session_id).cyan().bold(),
        messages.len()
    );
    println!();
    for message in &messages {
        let who = match message.sender {
            Sender::User => style("user").green().bold(),
            Sender::Bot => style("bot ").magenta().bold(),
        };
        println!(
            "  {} {} {}",
            style(message.timestamp.format("%Y-%m-%d %H:%M:%S")).dim(),
            who,
            message.content
        );
    }
    println!();

    Ok(())
}
