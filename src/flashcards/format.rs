//! # Deck File Format
//!
//! Decks are stored as plain text, one card per line:
//!
//! ```text
//! term:definition:mistakes
//! ```
//!
//! Fields cannot contain the delimiter. Nothing escapes it; a line that does not split
//! into exactly three fields is rejected as a whole. Blank lines are ignored on read, and
//! so is whitespace around the mistake count.

use crate::error::{FlashcardsError, Result};
use crate::model::Card;
use std::io::Write;

pub const DELIMITER: char = ':';

/// Parses one record. `line_no` is 1-based and only used for error reporting.
pub fn parse_record(line_no: usize, line: &str) -> Result<Card> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [term, definition, mistakes] = fields.as_slice() else {
        return Err(FlashcardsError::MalformedRecord {
            line: line_no,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    };

    let mistakes = mistakes
        .trim()
        .parse::<u32>()
        .map_err(|_| FlashcardsError::MalformedRecord {
            line: line_no,
            reason: format!("mistake count \"{}\" is not a non-negative integer", mistakes),
        })?;

    Ok(Card::with_mistakes(*term, *definition, mistakes))
}

/// Parses a whole deck. Fails on the first malformed line, returning nothing parsed so far.
pub fn parse_records(content: &str) -> Result<Vec<Card>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_record(idx + 1, line))
        .collect()
}

pub fn format_record(card: &Card) -> String {
    format!(
        "{}{d}{}{d}{}",
        card.term,
        card.definition,
        card.mistakes,
        d = DELIMITER
    )
}

pub fn write_records<'a, W, I>(mut writer: W, cards: I) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Card>,
{
    let mut count = 0;
    for card in cards {
        writeln!(writer, "{}", format_record(card))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
