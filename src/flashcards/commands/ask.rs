//! Grading for a single quiz round. Picking the card and collecting the answer is the
//! caller's job; see `repl::handlers::ask`.

use crate::collection::CardCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashcardsError, Result};
use crate::model::{Card, CardId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong {
        expected: String,
        /// Term of another card whose definition is exactly the submitted answer.
        matches_term: Option<String>,
    },
}

pub fn question(card: &Card) -> String {
    format!("Print the definition of \"{}\":", card.term)
}

/// Checks `response` against the card and records a mistake when it does not match.
pub fn grade(collection: &mut CardCollection, id: CardId, response: &str) -> Result<CmdResult> {
    let card = collection
        .get(id)
        .ok_or(FlashcardsError::CardNotFound(id))?;

    if card.check_answer(response) {
        tracing::debug!(term = %card.term, "correct answer");
        let mut result = CmdResult::default().with_verdict(Verdict::Correct);
        result.add_message(CmdMessage::success("Correct!"));
        return Ok(result);
    }

    let expected = card.definition.clone();
    let matches_term = collection
        .find_by_definition(response)
        .filter(|other| *other != id)
        .and_then(|other| collection.get(other))
        .map(|other| other.term.clone());

    let mistakes = collection.record_mistake(id);
    tracing::debug!(%id, ?mistakes, "wrong answer");

    let message = match &matches_term {
        Some(term) => format!(
            "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
            expected, term
        ),
        None => format!("Wrong. The right answer is \"{}\".", expected),
    };

    let mut result = CmdResult::default().with_verdict(Verdict::Wrong {
        expected,
        matches_term,
    });
    result.add_message(CmdMessage::warning(message));
    Ok(result)
}
