//! Upstream completion abstractions.
//!
//! - `CompletionClient`: RPITIT trait for the concrete provider client
//! - `prompt`: the fixed persona prompt and package price table

pub mod client;
pub mod prompt;
