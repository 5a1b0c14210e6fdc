//! Business logic and port traits for invitechat.
//!
//! This crate defines the "ports" (`MessageStore`, `CompletionClient`) that
//! the infrastructure layer implements, plus the chat turn orchestration.
//! It depends only on `invitechat-types` -- never on `invitechat-infra` or any
//! database/HTTP crate.

pub mod chat;
pub mod llm;
