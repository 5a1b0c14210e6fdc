//! Infrastructure implementations for invitechat.
//!
//! Concrete adapters for the ports defined in `invitechat-core`:
//! message stores (in-memory, SQLite) and the OpenRouter completion client,
//! plus the configuration file loader.

pub mod config;
pub mod llm;
pub mod sqlite;
pub mod store;
