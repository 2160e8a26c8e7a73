use crate::model::CardId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardsError {
    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    #[error("The card \"{0}\" already exists.")]
    DuplicateTerm(String),

    #[error("The definition \"{0}\" already exists.")]
    DuplicateDefinition(String),

    #[error("File not found.")]
    FileNotFound(PathBuf),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Could not read \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write \"{}\": {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid number: \"{0}\".")]
    InvalidNumber(String),

    #[error("Input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl FlashcardsError {
    /// Errors that end the current command but leave the session running.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FlashcardsError::InputClosed | FlashcardsError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, FlashcardsError>;
