use crate::error::{PriceError, Result};
use crate::models::{Deck, DeckEntry};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

lazy_static! {
    static ref DECK_LINE: Regex = Regex::new(r"^(\d+)\s*(.*)$").unwrap();
}

fn parse_deck_line(line: &str) -> Option<DeckEntry> {
    let caps = DECK_LINE.captures(line.trim())?;
    let quantity: u32 = caps[1].parse().ok()?;
    let name = caps[2].trim();
    if quantity == 0 || name.is_empty() {
        return None;
    }
    Some(DeckEntry::new(name, quantity))
}

/// Parse deck list lines into a [`Deck`].
///
/// Blank lines are skipped. Any other line must be `<quantity><whitespace?><name>`
/// or the whole parse fails. A card listed twice keeps the quantity of its
/// last line.
pub fn parse_deck<I, S>(lines: I) -> Result<Deck>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut deck = Deck::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        match parse_deck_line(line) {
            Some(entry) => {
                if deck.get(&entry.name).is_some() {
                    log::debug!("Duplicate deck entry {:?}, keeping later quantity", entry.name);
                }
                deck.insert(entry);
            }
            None => {
                return Err(PriceError::Format {
                    line_number: index + 1,
                    line: line.to_string(),
                })
            }
        }
    }

    Ok(deck)
}

/// Read and parse a deck list file
pub fn read_deck(path: impl AsRef<Path>) -> Result<Deck> {
    let path = path.as_ref();
    let read_error = |source: std::io::Error| PriceError::ReadDeck {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(read_error)?;

    let deck = parse_deck(lines)?;
    log::info!(
        "Read {} entries ({} cards) from {}",
        deck.len(),
        deck.total_quantity(),
        path.display()
    );
    Ok(deck)
}
