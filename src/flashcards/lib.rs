//! # Flashcards Architecture
//!
//! Flashcards is a small terminal trainer: add term/definition cards, quiz yourself, see
//! which cards you keep getting wrong, and move decks in and out of plain text files.
//!
//! The crate is a library with a thin binary on top. Everything the binary does can be
//! driven from a test with a scripted console and a seeded RNG.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Flags, config, tracing setup, exit codes                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Loop (repl/)                                       │
//! │  - Menu, keyword table, one interactive handler per command │
//! │  - Talks to the user only through a Session                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, owns the CardCollection                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic and user-facing wording                   │
//! │  - Returns CmdResult, never prompts or prints               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection + Format (collection.rs, format.rs)             │
//! │  - Ordered cards, uniqueness, stats, deck file codec        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Console and Transcript
//!
//! The loop reads and writes through the [`console::Console`] trait. A
//! [`session::Session`] wraps the console and mirrors every line, both prompts and
//! answers, into a [`session::SessionLog`], which the `log` command writes to disk.
//! There is no process-global state.
//!
//! ## Testing Strategy
//!
//! - `collection`, `format`, `commands/*`: unit tests of the logic itself
//! - `repl`: whole conversations against [`console::ScriptedConsole`]
//! - `tests/`: the compiled binary fed through stdin

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod model;
pub mod repl;
pub mod session;
