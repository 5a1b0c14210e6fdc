//! Application state wiring the chat service together.
//!
//! `ChatService` is generic over the store and completion client; AppState
//! pins it to the concrete infra implementations chosen by configuration.

use std::sync::Arc;

use secrecy::SecretString;

use invitechat_core::chat::service::ChatService;
use invitechat_infra::llm::openrouter::OpenRouterClient;
use invitechat_infra::store::backend::MessageStoreBackend;
use invitechat_types::config::AppConfig;

pub type ConcreteChatService = ChatService<MessageStoreBackend, OpenRouterClient>;

/// Shared state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    pub fn new(store: MessageStoreBackend, client: OpenRouterClient) -> Self {
        Self {
            chat_service: Arc::new(ChatService::new(store, client)),
        }
    }

    /// Open the configured store and build the upstream client.
    ///
    /// A missing credential only logs a warning; each chat turn then fails
    /// with a configuration error instead of the process refusing to start.
    pub async fn init(config: &AppConfig, api_key: Option<SecretString>) -> anyhow::Result<Self> {
        let store = MessageStoreBackend::open(&config.storage).await?;

        let client = OpenRouterClient::new(&config.upstream, api_key)?;
        if !client.is_configured() {
            tracing::warn!("OPENROUTER_API_KEY is missing; chat requests will fail until it is set");
        }
        tracing::info!(
            model = %config.upstream.model,
            base_url = %config.upstream.base_url,
            "upstream client ready"
        );

        Ok(Self::new(store, client))
    }
}
