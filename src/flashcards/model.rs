use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable handle to a card inside a [`CardCollection`](crate::collection::CardCollection).
///
/// Ids survive in-place updates (mistake bumps, import overwrites) and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub term: String,
    pub definition: String,
    pub mistakes: u32,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::with_mistakes(term, definition, 0)
    }

    pub fn with_mistakes(
        term: impl Into<String>,
        definition: impl Into<String>,
        mistakes: u32,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes,
        }
    }

    /// Exact comparison: case and whitespace both count.
    pub fn check_answer(&self, response: &str) -> bool {
        response == self.definition
    }
}
