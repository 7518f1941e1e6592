//! Baseline AI for parlor tables.
//!
//! A rule-based opponent: it rates the cards it can see on a 1-9 scale and
//! bets, calls or folds from fixed thresholds. Deterministic, so sessions
//! with a fixed deck seed replay exactly.

use std::collections::BTreeMap;

use crate::AIOpponent;
use parlor_engine::cards::{Card, Rank};
use parlor_engine::controller::{ActionPrompt, DiscardPrompt};
use parlor_engine::hand::{Category, Hand};
use parlor_engine::player::PlayerAction;
use parlor_engine::rules::ActionOptions;

/// Simple baseline AI implementation for testing and comparison.
///
/// # Strategy
///
/// - Strength 6+ (trips or better): bet the maximum, raise when facing a bet
/// - Strength 5 (two pair): bet the maximum, call
/// - Strength 3-4 (a pair): bet the minimum, call
/// - Weaker: check when free, call only a one-chip bet with an ace, else fold
/// - Draw discards: keep every paired rank and any made straight or flush;
///   with nothing, keep the two highest cards
///
/// # Example
///
/// ```rust
/// use parlor_ai::baseline::BaselineAI;
/// use parlor_ai::AIOpponent;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Rates the visible cards on a 1-9 scale.
    ///
    /// Made hands score their category (high card 1 ... straight flush 9)
    /// when exactly five or seven cards are visible. Rank groups are counted
    /// for any number of cards, so a pair on early streets still rates 3.
    pub fn strength(cards: &[Card]) -> u8 {
        let made = match cards.len() {
            5 => {
                let mut h = Hand::from_cards(cards.iter().copied());
                h.rank().ok()
            }
            7 => Hand::from_cards(cards.iter().copied())
                .best_subset()
                .ok()
                .map(|(_, c)| c),
            _ => None,
        }
        .map_or(0, category_score);

        let groups = rank_groups(cards);
        let largest = groups.values().copied().max().unwrap_or(0);
        let pairs = groups.values().filter(|&&n| n == 2).count();
        let high_pair = groups
            .iter()
            .any(|(&r, &n)| n >= 2 && r >= Rank::Jack);
        let has_ace = groups.contains_key(&Rank::Ace);

        let grouped = match (largest, pairs) {
            (n, _) if n >= 4 => 8,
            (3, p) if p >= 1 => 7,
            (3, _) => 6,
            (2, p) if p >= 2 => 5,
            (2, _) if high_pair => 4,
            (2, _) => 3,
            _ if has_ace => 2,
            _ => 1,
        };
        made.max(grouped)
    }

    fn visible_cards(prompt: &ActionPrompt<'_>) -> Vec<Card> {
        prompt
            .hand
            .cards()
            .iter()
            .chain(prompt.community)
            .copied()
            .collect()
    }
}

fn category_score(c: Category) -> u8 {
    c as u8 + 1
}

fn rank_groups(cards: &[Card]) -> BTreeMap<Rank, usize> {
    let mut groups = BTreeMap::new();
    for c in cards {
        *groups.entry(c.rank).or_insert(0) += 1;
    }
    groups
}

impl AIOpponent for BaselineAI {
    fn choose_action(&mut self, prompt: &ActionPrompt<'_>) -> PlayerAction {
        let strength = Self::strength(&Self::visible_cards(prompt));
        match prompt.options {
            ActionOptions::Opening { min_bet, max_bet } => {
                if strength >= 5 {
                    PlayerAction::Bet(max_bet)
                } else if strength >= 3 {
                    PlayerAction::Bet(min_bet)
                } else {
                    PlayerAction::Check
                }
            }
            ActionOptions::Facing {
                to_call, max_raise, ..
            } => {
                if strength >= 6 {
                    PlayerAction::Raise(max_raise)
                } else if strength >= 3 || (strength == 2 && to_call <= 1) {
                    PlayerAction::Call
                } else {
                    PlayerAction::Fold
                }
            }
            ActionOptions::ShortStack { .. } => {
                if strength >= 3 {
                    PlayerAction::AllIn
                } else {
                    PlayerAction::Fold
                }
            }
        }
    }

    fn choose_discards(&mut self, prompt: &DiscardPrompt<'_>) -> Vec<usize> {
        let cards = prompt.hand.cards();
        let mut made = prompt.hand.clone();
        if made.rank().is_ok_and(|c| c >= Category::Straight) {
            return Vec::new();
        }
        let groups = rank_groups(cards);
        let any_group = groups.values().any(|&n| n >= 2);

        // cards are sorted ascending, so the top two are the last two
        let keep_high = cards.len().saturating_sub(2);
        cards
            .iter()
            .enumerate()
            .filter(|(i, c)| {
                let grouped = groups.get(&c.rank).is_some_and(|&n| n >= 2);
                if any_group {
                    !grouped
                } else {
                    *i < keep_high
                }
            })
            .map(|(i, _)| i)
            .collect()
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
