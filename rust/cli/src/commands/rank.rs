//! Rank command: names the category of a five-card hand, or picks the best
//! five out of seven.

use std::io::Write;

use parlor_engine::hand::{Hand, RANKED_SIZE, SEARCH_SIZE};

use crate::error::CliError;

pub fn handle_rank_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let mut hand = Hand::parse(cards)?;
    if hand.cards().windows(2).any(|w| w[0] == w[1]) {
        return Err(CliError::InvalidInput(
            "the same card appears twice".to_string(),
        ));
    }

    match hand.len() {
        RANKED_SIZE => {
            let category = hand.rank()?;
            writeln!(out, "Hand: {}", hand)?;
            writeln!(out, "Category: {}", category)?;
        }
        SEARCH_SIZE => {
            let (best, category) = hand.best_subset()?;
            writeln!(out, "Cards: {}", hand)?;
            writeln!(out, "Best five: {}", best)?;
            writeln!(out, "Category: {}", category)?;
        }
        n => {
            return Err(CliError::InvalidInput(format!(
                "expected {} or {} cards, got {}",
                RANKED_SIZE, SEARCH_SIZE, n
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(cards: &str) -> (Result<(), CliError>, String) {
        let mut out = Vec::new();
        let result = handle_rank_command(cards, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn five_cards_get_a_category() {
        let (result, text) = rank("Ah Kh Qh Jh 10h");
        assert!(result.is_ok());
        assert!(text.contains("Category: Straight flush"), "{text}");
    }

    #[test]
    fn seven_cards_pick_the_best_five() {
        let (result, text) = rank("2c 2d 3h 3s 4c 4d 5h");
        assert!(result.is_ok());
        assert!(text.contains("Category: Two pair"), "{text}");
        assert!(text.contains("Best five: "));
    }

    #[test]
    fn wrong_sizes_and_bad_tokens_fail() {
        assert!(matches!(rank("Ah Kh").0, Err(CliError::InvalidInput(_))));
        assert!(matches!(rank("Ah Kh Qh Jh 1h").0, Err(CliError::Engine(_))));
        assert!(matches!(rank("Ah Ah Qh Jh 9h").0, Err(CliError::InvalidInput(_))));
    }
}
