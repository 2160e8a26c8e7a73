use crate::collection::CardCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashcardsError, Result};

/// Rejects a term that is already in the collection.
pub fn check_term(collection: &CardCollection, term: &str) -> Result<()> {
    match collection.find_by_term(term) {
        Some(_) => Err(FlashcardsError::DuplicateTerm(term.to_string())),
        None => Ok(()),
    }
}

/// Rejects a definition that is already in the collection.
pub fn check_definition(collection: &CardCollection, definition: &str) -> Result<()> {
    match collection.find_by_definition(definition) {
        Some(_) => Err(FlashcardsError::DuplicateDefinition(definition.to_string())),
        None => Ok(()),
    }
}

pub fn run(collection: &mut CardCollection, term: String, definition: String) -> Result<CmdResult> {
    let id = collection.add_card(term, definition)?;
    let card = collection
        .get(id)
        .cloned()
        .ok_or(FlashcardsError::CardNotFound(id))?;

    tracing::debug!(%id, term = %card.term, "card added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "The pair (\"{}\":\"{}\") has been added.",
        card.term, card.definition
    )));
    Ok(result.with_affected_cards(vec![card]))
}
