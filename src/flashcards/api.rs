//! # API Facade
//!
//! A thin facade over the command layer and the single owner of the session's
//! [`CardCollection`]. Every front end (the interactive loop, tests, anything else) goes
//! through here.
//!
//! The facade dispatches and returns `Result<CmdResult>`. It does not prompt, print or
//! decide wording; that lives in `commands/*` (wording) and `repl` (prompting).

use crate::collection::CardCollection;
use crate::commands;
use crate::error::{FlashcardsError, Result};
use crate::model::CardId;
use crate::session::SessionLog;
use rand::Rng;
use std::path::Path;

#[derive(Debug, Default)]
pub struct FlashcardsApi {
    collection: CardCollection,
}

impl FlashcardsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: CardCollection) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &CardCollection {
        &self.collection
    }

    pub fn check_term(&self, term: &str) -> Result<()> {
        commands::add::check_term(&self.collection, term)
    }

    pub fn check_definition(&self, definition: &str) -> Result<()> {
        commands::add::check_definition(&self.collection, definition)
    }

    pub fn add_card(&mut self, term: String, definition: String) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.collection, term, definition)
    }

    pub fn remove_card(&mut self, term: &str) -> Result<commands::CmdResult> {
        Ok(commands::remove::run(&mut self.collection, term))
    }

    pub fn import_cards(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.collection, path)
    }

    pub fn export_cards(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.collection, path)
    }

    pub fn pick_card<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<CardId> {
        self.collection.choose(rng)
    }

    pub fn question(&self, id: CardId) -> Result<String> {
        self.collection
            .get(id)
            .map(commands::ask::question)
            .ok_or(FlashcardsError::CardNotFound(id))
    }

    pub fn answer(&mut self, id: CardId, response: &str) -> Result<commands::CmdResult> {
        commands::ask::grade(&mut self.collection, id, response)
    }

    pub fn hardest_cards(&self) -> Result<commands::CmdResult> {
        Ok(commands::hardest::run(&self.collection))
    }

    pub fn reset_stats(&mut self) -> Result<commands::CmdResult> {
        Ok(commands::reset::run(&mut self.collection))
    }

    pub fn save_log(&self, log: &SessionLog, path: &Path) -> Result<commands::CmdResult> {
        commands::log::run(log, path)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Verdict};
