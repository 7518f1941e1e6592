use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card token: {0:?}")]
    InvalidCard(String),
    #[error("Deck has no more cards")]
    EmptyDeck,
    #[error("Hand has {actual} cards, expected {expected}")]
    WrongHandSize { expected: usize, actual: usize },
    #[error("One or both hands are unranked")]
    UnrankedComparison,
    #[error("Not enough cards to support {players} players (max {max})")]
    TooManyPlayers { players: usize, max: usize },
    #[error("A round needs at least 2 players, table has {players}")]
    NotEnoughPlayers { players: usize },
    #[error("{0} has no chips left")]
    PlayerHasNoChips(String),
    #[error("Invalid bet amount: {amount}, allowed: {minimum}..={maximum}")]
    InvalidBetAmount {
        amount: u64,
        minimum: u64,
        maximum: u64,
    },
    #[error("Illegal action {action}: {reason}")]
    IllegalAction { action: String, reason: String },
    #[error("Invalid discard selection: {0}")]
    InvalidDiscard(String),
    #[error("Card index {index} out of range for hand of {len}")]
    CardIndexOutOfRange { index: usize, len: usize },
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("{0} is already playing")]
    DuplicatePlayer(String),
    #[error("Names may not contain any of the characters \\/:?\"<>|*, got {0:?}")]
    IllegalName(String),
    #[error("Unknown game: {0}")]
    UnknownVariant(String),
}

impl GameError {
    /// True for errors that end the current round but leave the session usable.
    pub fn is_round_fatal(&self) -> bool {
        matches!(
            self,
            GameError::EmptyDeck
                | GameError::TooManyPlayers { .. }
                | GameError::NotEnoughPlayers { .. }
                | GameError::PlayerHasNoChips(_)
                | GameError::IllegalAction { .. }
                | GameError::InvalidBetAmount { .. }
                | GameError::InvalidDiscard(_)
        )
    }
}
