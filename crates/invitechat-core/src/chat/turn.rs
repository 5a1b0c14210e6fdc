//! Per-request chat turn stages and input validation.
//!
//! A turn lives only for the duration of one request:
//! `Received -> Validated -> UserStored -> Completing -> BotStored -> Responded`.
//! Failures short-circuit at the stage where they occur.

use std::fmt;

use invitechat_types::chat::ChatRequest;
use invitechat_types::error::ChatError;

/// Maximum characters of user text included in log lines.
const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStage {
    Received,
    Validated,
    UserStored,
    Completing,
    BotStored,
    Responded,
}

impl fmt::Display for TurnStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnStage::Received => write!(f, "received"),
            TurnStage::Validated => write!(f, "validated"),
            TurnStage::UserStored => write!(f, "user_stored"),
            TurnStage::Completing => write!(f, "completing"),
            TurnStage::BotStored => write!(f, "bot_stored"),
            TurnStage::Responded => write!(f, "responded"),
        }
    }
}

/// Reject a request before anything is written.
///
/// `message` must contain a non-whitespace character; `sessionId` must be
/// non-empty (its format is otherwise opaque).
pub fn validate(request: &ChatRequest) -> Result<(), ChatError> {
    if request.message.trim().is_empty() {
        return Err(ChatError::ValidationFailed("message is required".to_string()));
    }
    if request.session_id.is_empty() {
        return Err(ChatError::ValidationFailed("sessionId is required".to_string()));
    }
    Ok(())
}

/// First few characters of a message, for log context.
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
