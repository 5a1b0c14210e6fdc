//! OpenTelemetry GenAI semantic-convention names for the upstream `chat` span.
//!
//! `tracing` span macros take field names as literal tokens, so the span
//! declares `gen_ai.operation.name`, `gen_ai.provider.name`,
//! `gen_ai.request.model` and `gen_ai.response.id` inline. The constants here
//! cover what is passed at runtime: attribute values and late `record` calls.

/// The provider's completion ID, recorded once the response arrives.
pub const GEN_AI_RESPONSE_ID: &str = "gen_ai.response.id";

/// Operation value for a chat completion.
pub const OP_CHAT: &str = "chat";

/// Provider value for OpenRouter.
pub const PROVIDER_OPENROUTER: &str = "openrouter";
