//! # Commands
//!
//! Business logic for each user-facing action, one module per command. Commands take
//! plain arguments (already prompted for by the caller), operate on a
//! [`CardCollection`](crate::collection::CardCollection), and describe the outcome as a
//! [`CmdResult`]. They never read input or print.
//!
//! Recoverable failures (missing file, malformed deck, write errors) are folded into the
//! result as error-level messages via [`report`], so the session keeps going. Only
//! transport errors escape.

use crate::error::{FlashcardsError, Result};
use crate::model::Card;

pub mod add;
pub mod ask;
pub mod export;
pub mod hardest;
pub mod import;
pub mod log;
pub mod remove;
pub mod reset;

pub use ask::Verdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cards: Vec<Card>,
    pub count: Option<usize>,
    pub verdict: Option<Verdict>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cards(mut self, cards: Vec<Card>) -> Self {
        self.affected_cards = cards;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_verdict(mut self, verdict: Verdict) -> Self {
        self.verdict = Some(verdict);
        self
    }

    pub fn is_error(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Turns a recoverable error into an error message; anything else is passed through.
pub fn report(err: FlashcardsError) -> Result<CmdResult> {
    if !err.is_recoverable() {
        return Err(err);
    }
    tracing::debug!(error = %err, "command failed");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(err.to_string()));
    Ok(result)
}
