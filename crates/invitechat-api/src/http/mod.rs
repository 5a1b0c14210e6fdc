//! HTTP layer for invitechat.
//!
//! Axum router with the chat endpoints under `/api/chat`, a health check,
//! and single-page app fallback for every other path.

pub mod error;
pub mod handlers;
pub mod router;
