//! CompletionClient trait definition.
//!
//! The one abstraction over the upstream chat-completions provider. A client
//! owns the fixed system prompt, model, and credential; callers only hand it
//! the latest user text.

use invitechat_types::error::CompletionError;

/// Trait for the upstream completion backend.
///
/// Implementations live in invitechat-infra (`OpenRouterClient`).
///
/// Contract:
/// - exactly one upstream request per call, no retry, no streaming
/// - no prior conversation history is sent
/// - a missing credential is `CompletionError::Misconfigured`, returned
///   before any network call
pub trait CompletionClient: Send + Sync {
    /// Model identifier sent upstream (for logging).
    fn model(&self) -> &str;

    /// Complete a single user turn and return the assistant's text.
    fn complete(
        &self,
        user_text: &str,
    ) -> impl std::future::Future<Output = Result<String, CompletionError>> + Send;
}
