//! Upstream completion provider implementations.

pub mod openrouter;
