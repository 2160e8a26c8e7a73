use crate::collection::CardCollection;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(collection: &CardCollection) -> CmdResult {
    let hardest: Vec<_> = collection.hardest_cards().into_iter().cloned().collect();

    let message = match hardest.as_slice() {
        [] => CmdMessage::info("There are no cards with errors."),
        [card] => CmdMessage::warning(format!(
            "The hardest card is \"{}\". You have {} errors answering it.",
            card.term, card.mistakes
        )),
        [first, ..] => {
            let terms = hardest
                .iter()
                .map(|c| format!("\"{}\"", c.term))
                .collect::<Vec<_>>()
                .join(", ");
            CmdMessage::warning(format!(
                "The hardest cards are {}. You have {} errors answering them.",
                terms, first.mistakes
            ))
        }
    };

    let mut result = CmdResult::default().with_affected_cards(hardest);
    result.add_message(message);
    result
}
