//! # Console Transport
//!
//! The line-oriented channel between the user and a session. Everything above this
//! layer talks to a [`Console`], never to stdin/stdout directly, so the whole command
//! loop runs unchanged against a script in tests.
//!
//! ## Implementations
//!
//! - [`terminal::TerminalConsole`]: stdin/stdout, with message levels rendered in color
//! - [`scripted::ScriptedConsole`]: canned input lines, captured output, no terminal

use crate::commands::CmdMessage;
use std::io;

pub mod scripted;
pub mod terminal;

pub use scripted::ScriptedConsole;
pub use terminal::TerminalConsole;

pub trait Console {
    /// Writes one line of output. `line` carries no trailing newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Reads one line of input without its line terminator. `None` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes a command message. Implementations may decorate it by level.
    fn write_message(&mut self, message: &CmdMessage) -> io::Result<()> {
        self.write_line(&message.content)
    }
}


/// Strips one trailing `\n` or `\r\n`.
pub(crate) fn trim_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
