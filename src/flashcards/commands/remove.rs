use crate::collection::CardCollection;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(collection: &mut CardCollection, term: &str) -> CmdResult {
    let mut result = CmdResult::default();
    if collection.remove_card(term) {
        result.add_message(CmdMessage::success("The card has been removed."));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Can't remove \"{}\": there is no such card.",
            term
        )));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn removes_existing_card() {
        let mut collection = CardCollection::new();
        collection.add_card("a", "1").unwrap();

        let result = run(&mut collection, "a");
        assert!(collection.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn missing_card_is_a_warning() {
        let mut collection = CardCollection::new();
        let result = run(&mut collection, "ghost");
        assert_eq!(
            result.messages[0].content,
            "Can't remove \"ghost\": there is no such card."
        );
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
