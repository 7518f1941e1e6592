//! Deck command: loads a deck file and reports what is in it.
//!
//! The file holds whitespace-separated card tokens; malformed tokens are
//! skipped. Output is the deck itself, its size and whether any card
//! appears twice.

use std::io::Write;
use std::path::Path;

use parlor_engine::deck::Deck;

use crate::error::CliError;
use crate::ui;

pub fn handle_deck_command(
    file: &Path,
    shuffle: bool,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut deck = match seed {
        Some(s) => Deck::with_seed(s),
        None => Deck::new(),
    };
    if let Err(e) = deck.load_file(file) {
        let context = format!("cannot read {}: {}", file.display(), e);
        return Err(std::io::Error::new(e.kind(), context).into());
    }
    if deck.is_empty() {
        ui::display_warning(err, &format!("{} holds no valid cards", file.display()))?;
    }
    if shuffle {
        deck.shuffle();
    }

    writeln!(out, "{}", deck)?;
    writeln!(out, "Cards: {}", deck.len())?;
    writeln!(
        out,
        "Duplicates: {}",
        if deck.contains_duplicates() { "yes" } else { "no" }
    )?;
    Ok(())
}
