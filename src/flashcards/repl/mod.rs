//! # Command Loop
//!
//! The interactive driver: print the menu, read a line, look it up in the [`Command`]
//! table, run that command's handler, repeat until `exit`.
//!
//! Commands must match a keyword exactly, whitespace included. Anything else is ignored
//! and the menu comes back. A handler that fails with a recoverable error (a bad count,
//! a duplicate that escaped re-prompting) has the error printed and the loop carries on. Only a closed input or a broken console
//! ends the loop with an error.

use crate::api::FlashcardsApi;
use crate::collection::CardCollection;
use crate::commands;
use crate::console::Console;
use crate::error::Result;
use crate::session::{Session, SessionLog};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::path::{Path, PathBuf};

mod command;
mod handlers;

pub use command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Repl<C: Console, R: Rng = ThreadRng> {
    api: FlashcardsApi,
    session: Session<C>,
    rng: R,
    export_on_exit: Option<PathBuf>,
}

impl<C: Console> Repl<C, ThreadRng> {
    pub fn new(console: C) -> Self {
        Self::with_rng(console, rand::rng())
    }
}

impl<C: Console, R: Rng> Repl<C, R> {
    pub fn with_rng(console: C, rng: R) -> Self {
        Self {
            api: FlashcardsApi::new(),
            session: Session::new(console),
            rng,
            export_on_exit: None,
        }
    }

    pub fn with_collection(mut self, collection: CardCollection) -> Self {
        self.api = FlashcardsApi::with_collection(collection);
        self
    }

    /// Deck file written when the user exits.
    pub fn with_export_on_exit(mut self, path: Option<PathBuf>) -> Self {
        self.export_on_exit = path;
        self
    }

    /// One-off import before the loop starts. Failures are reported, never fatal.
    pub fn import_on_start(&mut self, path: &Path) -> Result<()> {
        let result = self.api.import_cards(path)?;
        self.session.show_result(&result)?;
        self.session.blank_line()
    }

    /// Runs until `exit`.
    pub fn run(&mut self) -> Result<()> {
        let menu = Command::menu();
        loop {
            let input = self.session.prompt(&menu)?;
            let Some(command) = Command::parse(&input) else {
                tracing::debug!(%input, "ignoring unknown command");
                continue;
            };

            tracing::debug!(%command, "dispatching");
            if self.dispatch(command)? == Flow::Exit {
                return Ok(());
            }
            self.session.blank_line()?;
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        let outcome = match command {
            Command::Add => handlers::add(self),
            Command::AddMany => handlers::add_many(self),
            Command::Remove => handlers::remove(self),
            Command::Import => handlers::import(self),
            Command::Export => handlers::export(self),
            Command::Ask => handlers::ask(self),
            Command::Exit => handlers::exit(self),
            Command::Log => handlers::log(self),
            Command::HardestCard => handlers::hardest_card(self),
            Command::ResetStats => handlers::reset_stats(self),
        };

        match outcome {
            Ok(flow) => Ok(flow),
            Err(err) => {
                let result = commands::report(err)?;
                self.session.show_result(&result)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn collection(&self) -> &CardCollection {
        self.api.collection()
    }

    pub fn log(&self) -> &SessionLog {
        self.session.log()
    }

    pub fn console(&self) -> &C {
        self.session.console()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::error::FlashcardsError;
    use crate::model::Card;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;

    fn repl(input: &[&str]) -> Repl<ScriptedConsole, StdRng> {
        Repl::with_rng(
            ScriptedConsole::new(input.iter().copied()),
            StdRng::seed_from_u64(11),
        )
    }

    fn deck(cards: &[(&str, &str, u32)]) -> CardCollection {
        let mut collection = CardCollection::new();
        for (term, definition, mistakes) in cards {
            collection.upsert(Card::with_mistakes(*term, *definition, *mistakes));
        }
        collection
    }

    fn output(repl: &Repl<ScriptedConsole, StdRng>) -> String {
        repl.console().output_text()
    }

    #[test]
    fn add_then_exit() {
        let mut repl = repl(&["add", "capital", "Paris", "exit"]);
        repl.run().unwrap();

        assert_eq!(repl.collection().len(), 1);
        let out = output(&repl);
        assert!(out.contains("The card:"));
        assert!(out.contains("The definition of the card:"));
        assert!(out.contains("The pair (\"capital\":\"Paris\") has been added."));
        assert!(out.ends_with("Bye bye!"));
    }

    #[test]
    fn add_reprompts_on_duplicate_fields() {
        let mut repl = repl(&[
            "add", "capital", "Paris", "add", "capital", "country", "Paris", "France", "exit",
        ]);
        repl.run().unwrap();

        let out = output(&repl);
        assert!(out.contains("The card \"capital\" already exists. Try again:"));
        assert!(out.contains("The definition \"Paris\" already exists. Try again:"));
        let cards: Vec<&Card> = repl.collection().cards().collect();
        assert_eq!(
            cards,
            vec![&Card::new("capital", "Paris"), &Card::new("country", "France")]
        );
    }

    #[test]
    fn add_many_uses_one_based_indexes() {
        let mut repl = repl(&["add many", "2", "a", "1", "a", "b", "2", "exit"]);
        repl.run().unwrap();

        let out = output(&repl);
        assert!(out.contains("The term for card #1:"));
        assert!(out.contains("The term \"a\" already exists. Try again:"));
        assert!(out.contains("The definition for card #2:"));
        assert_eq!(repl.collection().len(), 2);
    }

    #[test]
    fn unknown_commands_are_ignored() {
        let mut repl = repl(&["dance", "", "ADD", "exit"]);
        repl.run().unwrap();

        let menus = repl
            .console()
            .output()
            .iter()
            .filter(|line| line.starts_with("Input the action"))
            .count();
        assert_eq!(menus, 4);
        assert!(repl.collection().is_empty());
    }

    #[test]
    fn padded_commands_are_not_trimmed() {
        let mut repl = repl(&[" add ", "add\t", "x", "y", "exit"]);
        repl.run().unwrap();

        assert!(repl.collection().is_empty());
        assert!(!output(&repl).contains("The card:"));
    }

    #[test]
    fn remove_existing_and_missing() {
        let mut repl =
            repl(&["remove", "a", "remove", "a", "exit"]).with_collection(deck(&[("a", "1", 0)]));
        repl.run().unwrap();

        let out = output(&repl);
        assert!(out.contains("The card has been removed."));
        assert!(out.contains("Can't remove \"a\": there is no such card."));
    }

    #[test]
    fn ask_on_empty_deck_does_not_prompt_for_rounds() {
        let mut repl = repl(&["ask", "exit"]);
        repl.run().unwrap();

        let out = output(&repl);
        assert!(out.contains("There is no card."));
        assert!(!out.contains("How many times to ask?"));
    }

    #[test]
    fn every_wrong_round_adds_exactly_one_mistake() {
        let mut repl = repl(&["ask", "5", "x", "x", "x", "x", "x", "exit"])
            .with_collection(deck(&[("a", "1", 0), ("b", "2", 0), ("c", "3", 0)]));
        repl.run().unwrap();

        let total: u32 = repl.collection().cards().map(|c| c.mistakes).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn correct_answers_leave_mistakes_alone() {
        let mut repl = repl(&["ask", "3", "Paris", "Paris", "Paris", "exit"])
            .with_collection(deck(&[("France", "Paris", 1)]));
        repl.run().unwrap();

        assert_eq!(output(&repl).matches("Correct!").count(), 3);
        assert_eq!(repl.collection().cards().next().unwrap().mistakes, 1);
    }

    #[test]
    fn wrong_answer_without_other_match() {
        // Single card: the pick is deterministic.
        let mut repl = repl(&["ask", "1", "Tokyo", "exit"])
            .with_collection(deck(&[("France", "Paris", 0)]));
        repl.run().unwrap();
        assert!(output(&repl).contains("Wrong. The right answer is \"Paris\"."));
    }

    #[test]
    fn wrong_answer_matching_other_card_is_called_out() {
        let mut input = vec!["ask", "20"];
        input.extend(std::iter::repeat("Tokyo").take(20));
        input.push("exit");
        let mut repl = repl(&input)
            .with_collection(deck(&[("France", "Paris", 0), ("Japan", "Tokyo", 0)]));
        repl.run().unwrap();

        // "Tokyo" is right for Japan and names Japan when France is asked.
        let out = output(&repl);
        let correct = out.matches("Correct!").count();
        let called_out = out
            .matches("Wrong. The right answer is \"Paris\", but your definition is correct for \"Japan\".")
            .count();
        assert_eq!(correct + called_out, 20);

        let france = repl.collection().find_by_term("France").unwrap();
        let japan = repl.collection().find_by_term("Japan").unwrap();
        assert_eq!(repl.collection().get(france).unwrap().mistakes as usize, called_out);
        assert_eq!(repl.collection().get(japan).unwrap().mistakes, 0);
    }

    #[test]
    fn invalid_round_count_is_reported_and_loop_continues() {
        let mut repl =
            repl(&["ask", "many", "hardest card", "exit"]).with_collection(deck(&[("a", "1", 0)]));
        repl.run().unwrap();

        let out = output(&repl);
        assert!(out.contains("Invalid number: \"many\"."));
        assert!(out.contains("There are no cards with errors."));
    }

    #[test]
    fn hardest_card_and_reset_stats() {
        let mut repl = repl(&["hardest card", "reset stats", "hardest card", "exit"])
            .with_collection(deck(&[("a", "1", 0), ("b", "2", 2), ("c", "3", 2)]));
        repl.run().unwrap();

        let out = output(&repl);
        assert!(out.contains("The hardest cards are \"b\", \"c\"."));
        assert!(out.contains("Card statistics have been reset."));
        assert!(out.contains("There are no cards with errors."));
    }

    #[test]
    fn import_and_export_through_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.txt");
        let target = dir.path().join("out.txt");
        fs::write(&source, "a:1:0\nb:2:3\n").unwrap();

        let source_s = source.display().to_string();
        let target_s = target.display().to_string();
        let mut repl = repl(&["import", source_s.as_str(), "export", target_s.as_str(), "exit"]);
        repl.run().unwrap();

        let out = output(&repl);
        assert!(out.contains("2 cards have been loaded."));
        assert!(out.contains("2 cards have been saved."));
        assert_eq!(fs::read_to_string(&target).unwrap(), "a:1:0\nb:2:3\n");
    }

    #[test]
    fn import_of_missing_file_keeps_session_alive() {
        let mut repl = repl(&["import", "/definitely/not/here.txt", "exit"]);
        repl.run().unwrap();
        assert!(output(&repl).contains("File not found."));
    }

    #[test]
    fn exit_exports_when_destination_configured() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("saved.txt");
        let mut repl = repl(&["add", "a", "1", "exit"]).with_export_on_exit(Some(target.clone()));
        repl.run().unwrap();

        assert!(output(&repl).contains("1 cards have been saved."));
        assert_eq!(fs::read_to_string(&target).unwrap(), "a:1:0\n");
    }

    #[test]
    fn import_on_start_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.txt");
        fs::write(&source, "a:1:0\n").unwrap();

        let mut repl = repl(&["exit"]);
        repl.import_on_start(&source).unwrap();
        repl.run().unwrap();

        assert_eq!(repl.console().output()[0], "1 cards have been loaded.");
        assert_eq!(repl.collection().len(), 1);
    }

    #[test]
    fn log_contains_prompts_and_responses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");
        let path_s = path.display().to_string();
        let mut repl = repl(&["add", "capital", "Paris", "log", path_s.as_str(), "exit"]);
        repl.run().unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("Input the action"));
        assert!(saved.contains("capital\nThe definition of the card:\nParis\n"));
        assert!(saved.contains(&format!("File name:\n{}\n", path_s)));
        assert!(!saved.contains("The log has been saved."));
        assert!(repl.log().lines().iter().any(|l| l == "The log has been saved."));
    }

    #[test]
    fn closed_input_ends_the_loop_with_an_error() {
        let mut repl = repl(&["add", "capital"]);
        assert!(matches!(repl.run(), Err(FlashcardsError::InputClosed)));
    }
}
