//! Shared domain types for invitechat.
//!
//! Chat messages, the HTTP request/response shapes, configuration, and the
//! error taxonomy shared by every layer.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
