use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// Represents a player action during a betting interval.
/// Amounts on `Bet` and `Raise` are the size of the new bet, not the total paid.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Pass without betting (only while no bet is open)
    Check,
    /// Open the betting with the given amount
    Bet(u64),
    /// Match the open bet
    Call,
    /// Match the open bet, then raise it by the given amount
    Raise(u64),
    /// Leave the round
    Fold,
    /// Put every remaining chip in (only when short of the call)
    AllIn,
}

/// Chips a newly seated player starts with.
pub const STARTING_CHIPS: u64 = 20;

/// A seated player: persistent chips and record, plus per-round state.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
    chips: u64,
    /// Paid into the pot during the current betting interval
    amt_paid: u64,
    wins: u32,
    losses: u32,
    in_round: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u64) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            chips,
            amt_paid: 0,
            wins: 0,
            losses: 0,
            in_round: false,
        }
    }

    pub fn with_record(name: impl Into<String>, wins: u32, losses: u32, chips: u64) -> Self {
        let mut p = Self::new(name, chips);
        p.wins = wins;
        p.losses = losses;
        p
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
    pub fn chips(&self) -> u64 {
        self.chips
    }
    pub fn amt_paid(&self) -> u64 {
        self.amt_paid
    }
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn losses(&self) -> u32 {
        self.losses
    }
    pub fn in_round(&self) -> bool {
        self.in_round
    }

    /// In the round and still holding chips, so able to act.
    pub fn can_act(&self) -> bool {
        self.in_round && self.chips > 0
    }

    pub fn join_round(&mut self) {
        self.in_round = true;
        self.amt_paid = 0;
    }

    pub fn fold(&mut self) {
        self.in_round = false;
    }

    /// Moves up to `amount` chips out of the stack; returns what was actually paid.
    pub fn pay(&mut self, amount: u64) -> u64 {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.amt_paid += paid;
        paid
    }

    pub fn add_chips(&mut self, amount: u64) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub fn set_chips(&mut self, chips: u64) {
        self.chips = chips;
    }

    pub fn reset_paid(&mut self) {
        self.amt_paid = 0;
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    pub fn leave_round(&mut self) {
        self.in_round = false;
        self.amt_paid = 0;
    }
}
