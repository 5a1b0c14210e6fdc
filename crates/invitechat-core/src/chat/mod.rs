//! Chat message persistence and turn orchestration.
//!
//! `MessageStore` is the append-only persistence port; `ChatService` drives a
//! single chat turn and the history read path on top of it.

pub mod service;
pub mod store;
pub mod turn;
