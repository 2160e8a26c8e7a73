//! One interactive handler per [`Command`](super::Command) variant.
//!
//! Handlers do the prompting, then hand plain values to the API and print whatever
//! comes back. Recoverable errors bubble up to [`Repl::dispatch`](super::Repl), which
//! reports them and keeps the loop alive.

use super::{Flow, Repl};
use crate::commands::CmdMessage;
use crate::console::Console;
use crate::error::{FlashcardsError, Result};
use crate::session::Session;
use rand::Rng;
use std::path::PathBuf;

/// Reads lines until `check` accepts one. Duplicates re-prompt with `retry`; any other
/// error ends the read.
fn read_unique<C, F, M>(session: &mut Session<C>, check: F, retry: M) -> Result<String>
where
    C: Console,
    F: Fn(&str) -> Result<()>,
    M: Fn(&str) -> String,
{
    loop {
        let value = session.read()?;
        match check(&value) {
            Ok(()) => return Ok(value),
            Err(FlashcardsError::DuplicateTerm(_) | FlashcardsError::DuplicateDefinition(_)) => {
                session.say(&retry(&value))?;
            }
            Err(err) => return Err(err),
        }
    }
}

fn read_path<C: Console>(session: &mut Session<C>) -> Result<PathBuf> {
    session.prompt("File name:").map(PathBuf::from)
}

pub(super) fn add<C: Console, R: Rng>(repl: &mut Repl<C, R>) -> Result<Flow> {
    let Repl { api, session, .. } = repl;

    session.say("The card:")?;
    let term = read_unique(
        session,
        |t| api.check_term(t),
        |t| format!("The card \"{}\" already exists. Try again:", t),
    )?;

    session.say("The definition of the card:")?;
    let definition = read_unique(
        session,
        |d| api.check_definition(d),
        |d| format!("The definition \"{}\" already exists. Try again:", d),
    )?;

    let result = api.add_card(term, definition)?;
    session.show_result(&result)?;
    Ok(Flow::Continue)
}

pub(super) fn add_many<C: Console, R: Rng>(repl: &mut Repl<C, R>) -> Result<Flow> {
    let Repl { api, session, .. } = repl;

    let count = session.prompt_count("Input the number of cards:")?;
    for i in 1..=count {
        session.say(&format!("The term for card #{}:", i))?;
        let term = read_unique(
            session,
            |t| api.check_term(t),
            |t| format!("The term \"{}\" already exists. Try again:", t),
        )?;

        session.say(&format!("The definition for card #{}:", i))?;
        let definition = read_unique(
            session,
            |d| api.check_definition(d),
            |d| format!("The definition \"{}\" already exists. Try again:", d),
        )?;

        let result = api.add_card(term, definition)?;
        session.show_result(&result)?;
    }
    Ok(Flow::Continue)
}

pub(super) fn remove<C: Console, R: Rng>(repl: &mut Repl<C, R>) -> Result<Flow> {
    let term = repl.session.prompt("Which card?")?;
    let result = repl.api.remove_card(&term)?;
    repl.session.show_result(&result)?;
    Ok(Flow::Continue)
}

pub(super) fn import<C: Console, R: Rng>(repl: &mut Repl<C, R>) -> Result<Flow> {
    let path = read_path(&mut repl.session)?;
    let result = repl.api.import_cards(&path)?;
    repl.session.show_result(&result)?;
    Ok(Flow::Continue)
}

pub(super) fn export<C: Console, R: Rng>(repl: &mut Repl<C, R>) -> Result<Flow> {
    let path = read_path(&mut repl.session)?;
    let result = repl.api.export_cards(&path)?;
    repl.session.show_result(&result)?;
    Ok(Flow::Continue)
}

pub(super) fn ask<C: Console, R: Rng>(repl: &mut Repl<C, R>) -> Result<Flow> {
    let Repl {
        api, session, rng, ..
    } = repl;

    if api.collection().is_empty() {
        session.show(&CmdMessage::info("There is no card."))?;
        return Ok(Flow::Continue);
    }

    let rounds = session.prompt_count("How many times to ask?")?;
    for _ in 0..rounds {
        let Some(id) = api.pick_card(&mut *rng) else {
            break;
        };
        let question = api.question(id)?;
        let response = session.prompt(&question)?;
        let result = api.answer(id, &response)?;
        session.show_result(&result)?;
    }
    Ok(Flow::Continue)
}

pub(super) fn exit<C: Console, R: Rng>(repl: &mut Repl<C, R>) -> Result<Flow> {
    if let Some(path) = repl.export_on_exit.clone() {
        let result = repl.api.export_cards(&path)?;
        repl.session.show_result(&result)?;
    }
    repl.session.say("Bye bye!")?;
    Ok(Flow::Exit)
}

pub(super) fn log<C: Console, R: Rng>(repl: &mut Repl<C, R>) -> Result<Flow> {
    let path = read_path(&mut repl.session)?;
    let result = repl.api.save_log(repl.session.log(), &path)?;
    repl.session.show_result(&result)?;
    Ok(Flow::Continue)
}

pub(super) fn hardest_card<C: Console, R: Rng>(repl: &mut Repl<C, R>) -> Result<Flow> {
    let result = repl.api.hardest_cards()?;
    repl.session.show_result(&result)?;
    Ok(Flow::Continue)
}

pub(super) fn reset_stats<C: Console, R: Rng>(repl: &mut Repl<C, R>) -> Result<Flow> {
    let result = repl.api.reset_stats()?;
    repl.session.show_result(&result)?;
    Ok(Flow::Continue)
}
