use crate::collection::CardCollection;
use crate::commands::{report, CmdMessage, CmdResult};
use crate::error::Result;
use std::path::Path;

pub fn run(collection: &mut CardCollection, path: &Path) -> Result<CmdResult> {
    match collection.import_from(path) {
        Ok(count) => {
            let mut result = CmdResult::default().with_count(count);
            result.add_message(CmdMessage::success(format!(
                "{} cards have been loaded.",
                count
            )));
            Ok(result)
        }
        Err(err) => report(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Card;
    use std::fs;

    #[test]
    fn reports_loaded_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.txt");
        fs::write(&path, "a:1:0\nb:2:3\n").unwrap();

        let mut collection = CardCollection::new();
        let result = run(&mut collection, &path).unwrap();

        assert_eq!(result.count, Some(2));
        assert_eq!(result.messages[0].content, "2 cards have been loaded.");
    }

    #[test]
    fn existing_term_is_overwritten_not_duplicated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.txt");
        fs::write(&path, "capital:Berlin:4\n").unwrap();

        let mut collection = CardCollection::new();
        collection.add_card("capital", "Paris").unwrap();
        run(&mut collection, &path).unwrap();

        let cards: Vec<&Card> = collection.cards().collect();
        assert_eq!(cards, vec![&Card::with_mistakes("capital", "Berlin", 4)]);
    }

    #[test]
    fn missing_file_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let mut collection = CardCollection::new();
        let result = run(&mut collection, &dir.path().join("nope.txt")).unwrap();

        assert!(result.is_error());
        assert_eq!(result.messages[0].content, "File not found.");
        assert_eq!(result.count, None);
    }

    #[test]
    fn malformed_file_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.txt");
        fs::write(&path, "a:1:zero\n").unwrap();

        let mut collection = CardCollection::new();
        let result = run(&mut collection, &path).unwrap();

        assert!(result.is_error());
        assert!(result.messages[0].content.starts_with("Malformed record on line 1"));
        assert!(collection.is_empty());
    }
}
