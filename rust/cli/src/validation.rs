//! Parsing of what a human types at the table.
//!
//! Parsing only checks the shape of the input. Whether the action is legal
//! right now is decided by [`parlor_engine::rules::validate_action`].

use parlor_engine::player::PlayerAction;

#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts (case-insensitive): `check`/`c`, `bet N`, `call`, `raise N`,
/// `fold`/`f`, `allin`/`all-in`, and `q`/`quit`.
///
/// # Example
///
/// ```rust
/// # use parlor_cli::validation::{parse_player_action, ParseResult};
/// use parlor_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("bet 2"), ParseResult::Action(PlayerAction::Bet(2)));
/// assert_eq!(parse_player_action("Q"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("dance"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&word) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    if word == "q" || word == "quit" {
        return ParseResult::Quit;
    }

    match word {
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" => ParseResult::Action(PlayerAction::AllIn),
        "bet" => match parse_amount(parts.get(1), "Bet") {
            Ok(n) => ParseResult::Action(PlayerAction::Bet(n)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "raise" => match parse_amount(parts.get(1), "Raise") {
            Ok(n) => ParseResult::Action(PlayerAction::Raise(n)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: check, bet <amount>, call, raise <amount>, fold, allin, q",
            word
        )),
    }
}

fn parse_amount(token: Option<&&str>, what: &str) -> Result<u64, String> {
    let Some(token) = token else {
        return Err(format!(
            "{} requires an amount (e.g., '{} 2')",
            what,
            what.to_lowercase()
        ));
    };
    match token.parse::<u64>() {
        Ok(0) => Err(format!("{} amount must be positive", what)),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Invalid {} amount", what.to_lowercase())),
    }
}

/// Parses 1-based card positions (`"1 3 5"`, commas allowed) into zero-based
/// indices. A blank answer or `none` means keep every card.
///
/// ```rust
/// # use parlor_cli::validation::parse_discards;
/// assert_eq!(parse_discards("1 3, 5"), Ok(vec![0, 2, 4]));
/// assert_eq!(parse_discards(""), Ok(vec![]));
/// assert!(parse_discards("0").is_err());
/// ```
pub fn parse_discards(input: &str) -> Result<Vec<usize>, String> {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| match t.parse::<usize>() {
            Ok(0) | Err(_) => Err(format!("'{}' is not a card position (1, 2, ...)", t)),
            Ok(n) => Ok(n - 1),
        })
        .collect()
}

/// Splits a comma- or whitespace-separated list of player names.
pub fn parse_names(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
