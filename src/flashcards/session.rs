//! # Session
//!
//! A [`Session`] pairs a [`Console`] with the [`SessionLog`] transcript. Every line that
//! goes through it, in either direction, is appended to the log, so the `log` command can
//! dump an exact record of the conversation so far.
//!
//! The log is an ordinary owned value: there is one per session and it is handed to
//! whoever needs it.

use crate::commands::{CmdMessage, CmdResult};
use crate::console::Console;
use crate::error::{FlashcardsError, Result};
use std::fs;
use std::path::Path;

/// Append-only transcript of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionLog {
    lines: Vec<String>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The transcript as file contents: every line newline-terminated.
    pub fn contents(&self) -> String {
        self.lines.iter().map(|l| format!("{}\n", l)).collect()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.contents()).map_err(|source| FlashcardsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

pub struct Session<C: Console> {
    console: C,
    log: SessionLog,
}

impl<C: Console> Session<C> {
    pub fn new(console: C) -> Self {
        Self::with_log(console, SessionLog::new())
    }

    pub fn with_log(console: C, log: SessionLog) -> Self {
        Self { console, log }
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        self.console.write_line(line)?;
        self.log.record(line);
        Ok(())
    }

    pub fn blank_line(&mut self) -> Result<()> {
        self.say("")
    }

    pub fn show(&mut self, message: &CmdMessage) -> Result<()> {
        self.console.write_message(message)?;
        self.log.record(message.content.as_str());
        Ok(())
    }

    pub fn show_result(&mut self, result: &CmdResult) -> Result<()> {
        for message in &result.messages {
            self.show(message)?;
        }
        Ok(())
    }

    /// Reads one response line. End of input is an error.
    pub fn read(&mut self) -> Result<String> {
        let line = self
            .console
            .read_line()?
            .ok_or(FlashcardsError::InputClosed)?;
        self.log.record(line.as_str());
        Ok(line)
    }

    pub fn prompt(&mut self, question: &str) -> Result<String> {
        self.say(question)?;
        self.read()
    }

    /// Prompts for a non-negative count.
    pub fn prompt_count(&mut self, question: &str) -> Result<usize> {
        let answer = self.prompt(question)?;
        answer
            .trim()
            .parse()
            .map_err(|_| FlashcardsError::InvalidNumber(answer))
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn console(&self) -> &C {
        &self.console
    }
}
