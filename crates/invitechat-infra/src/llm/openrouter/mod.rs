//! OpenRouter completion provider.
//!
//! Plain `reqwest` client against OpenRouter's OpenAI-compatible
//! `/chat/completions` endpoint, with the attribution headers OpenRouter
//! expects (`HTTP-Referer`, `X-Title`).

pub mod client;
pub mod types;

pub use client::OpenRouterClient;
