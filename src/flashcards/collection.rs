//! # Card Collection
//!
//! The in-memory deck for one session. Cards are kept in insertion order, which is the
//! order used for display, export and tie-breaking in [`CardCollection::hardest_cards`].
//!
//! ## Uniqueness
//!
//! Interactive adds go through [`CardCollection::add_card`], which rejects a term or a
//! definition that is already present (checked independently, term first).
//!
//! Imports go through [`CardCollection::upsert`] instead: a known term is overwritten
//! in place and definitions are never checked. An import can therefore leave two cards
//! sharing a definition; lookups by definition return the first one.
//!
//! ## Identity
//!
//! Callers address cards by [`CardId`], never by reference, so a handle obtained before
//! a mutation is still meaningful after it (or simply resolves to `None` once removed).

use crate::error::{FlashcardsError, Result};
use crate::format;
use crate::model::{Card, CardId};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone)]
struct Entry {
    id: CardId,
    card: Card,
}

#[derive(Debug, Clone, Default)]
pub struct CardCollection {
    entries: Vec<Entry>,
}

impl CardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.entries.iter().map(|e| &e.card)
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.card)
    }

    pub fn find_by_term(&self, term: &str) -> Option<CardId> {
        self.entries
            .iter()
            .find(|e| e.card.term == term)
            .map(|e| e.id)
    }

    pub fn find_by_definition(&self, definition: &str) -> Option<CardId> {
        self.entries
            .iter()
            .find(|e| e.card.definition == definition)
            .map(|e| e.id)
    }

    /// Adds a new card with zero mistakes, enforcing term and definition uniqueness.
    pub fn add_card(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<CardId> {
        let term = term.into();
        let definition = definition.into();

        if self.find_by_term(&term).is_some() {
            return Err(FlashcardsError::DuplicateTerm(term));
        }
        if self.find_by_definition(&definition).is_some() {
            return Err(FlashcardsError::DuplicateDefinition(definition));
        }

        Ok(self.push(Card::new(term, definition)))
    }

    /// Inserts or overwrites by term. The existing card keeps its id and position.
    pub fn upsert(&mut self, card: Card) -> CardId {
        match self.entries.iter_mut().find(|e| e.card.term == card.term) {
            Some(entry) => {
                debug!(term = %card.term, "overwriting card");
                entry.card.definition = card.definition;
                entry.card.mistakes = card.mistakes;
                entry.id
            }
            None => self.push(card),
        }
    }

    pub fn remove_card(&mut self, term: &str) -> bool {
        match self.entries.iter().position(|e| e.card.term == term) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Bumps the mistake counter and returns the new value.
    pub fn record_mistake(&mut self, id: CardId) -> Option<u32> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.card.mistakes = entry.card.mistakes.saturating_add(1);
        Some(entry.card.mistakes)
    }

    /// All cards tied at the highest mistake count, or nothing if nobody has any mistakes.
    pub fn hardest_cards(&self) -> Vec<&Card> {
        let max = self.cards().map(|c| c.mistakes).max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }
        self.cards().filter(|c| c.mistakes == max).collect()
    }

    pub fn reset_stats(&mut self) {
        for entry in &mut self.entries {
            entry.card.mistakes = 0;
        }
    }

    /// Uniform pick with replacement.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<CardId> {
        self.entries.choose(rng).map(|e| e.id)
    }

    /// Loads a deck file, upserting every record.
    ///
    /// The file is parsed completely before the collection is touched, so a malformed
    /// line leaves the collection exactly as it was.
    pub fn import_from(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => FlashcardsError::FileNotFound(path.to_path_buf()),
            _ => FlashcardsError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let records = format::parse_records(&content)?;
        let count = records.len();
        for card in records {
            self.upsert(card);
        }

        info!(path = %path.display(), count, "imported cards");
        Ok(count)
    }

    /// Writes every card in collection order, replacing the file.
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let write_err = |source: std::io::Error| FlashcardsError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_err)?;
        let count = format::write_records(BufWriter::new(file), self.cards()).map_err(write_err)?;

        info!(path = %path.display(), count, "exported cards");
        Ok(count)
    }

    fn push(&mut self, card: Card) -> CardId {
        let id = CardId::new();
        self.entries.push(Entry { id, card });
        id
    }
}
