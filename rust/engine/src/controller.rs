//! The seam between a running round and whoever supplies decisions and
//! shows the table: a console, automated seats, or a test script.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::{Category, Hand};
use crate::player::PlayerAction;
use crate::rules::{ActionOptions, ValidatedAction};
use crate::variant::Variant;

/// Everything a seat needs to decide on a betting action.
#[derive(Debug, Clone, Copy)]
pub struct ActionPrompt<'a> {
    pub variant: Variant,
    pub seat: usize,
    pub name: &'a str,
    pub hand: &'a Hand,
    pub community: &'a [Card],
    pub chips: u64,
    pub pot: u64,
    pub options: ActionOptions,
}

#[derive(Debug, Clone, Copy)]
pub struct DiscardPrompt<'a> {
    pub variant: Variant,
    pub seat: usize,
    pub name: &'a str,
    pub hand: &'a Hand,
}

/// Supplies decisions for every seat and receives table events.
///
/// Both `choose_*` methods block until a decision exists. Returned actions
/// are still validated by the engine; an illegal one aborts the round.
pub trait Controller {
    fn choose_action(&mut self, prompt: &ActionPrompt<'_>) -> PlayerAction;

    /// Zero-based positions into the prompt's hand.
    fn choose_discards(&mut self, prompt: &DiscardPrompt<'_>) -> Vec<usize>;

    fn notify(&mut self, _event: &TableEvent) {}
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SeatView {
    pub name: String,
    /// Hidden form: face-down cards as `*`
    pub cards: String,
    pub chips: u64,
    pub in_round: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownHand {
    pub name: String,
    pub hand: String,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub chips: u64,
    /// Final hand, or `[folded]`
    pub hand: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TableEvent {
    RoundStarted {
        round: u64,
        variant: Variant,
        dealer: String,
        players: Vec<String>,
    },
    AnteCollected {
        total: u64,
        pot: u64,
    },
    TableView {
        seats: Vec<SeatView>,
        community: Vec<Card>,
        pot: u64,
    },
    ActionTaken {
        seat: usize,
        name: String,
        action: ValidatedAction,
        chips: u64,
        pot: u64,
    },
    Discarded {
        name: String,
        count: usize,
    },
    DiscardsReshuffled {
        cards: usize,
    },
    EarlyWin {
        name: String,
        pot: u64,
    },
    Showdown {
        hands: Vec<ShowdownHand>,
        winners: Vec<String>,
        shares: Vec<(String, u64)>,
    },
    Standings {
        rows: Vec<Standing>,
    },
    RoundAborted {
        reason: String,
        pot_carried: u64,
    },
}
