//! Observability setup for invitechat: structured logging, optional
//! OpenTelemetry span export, and GenAI attribute names.

#[cfg(any(test, feature = "test-util"))]
pub mod capture;
pub mod genai_attrs;
pub mod tracing_setup;
