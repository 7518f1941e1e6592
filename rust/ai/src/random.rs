//! An opponent that picks uniformly among the legal actions.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::AIOpponent;
use parlor_engine::controller::{ActionPrompt, DiscardPrompt};
use parlor_engine::player::PlayerAction;
use parlor_engine::rules::ActionOptions;

#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: ChaCha20Rng,
}

impl RandomAI {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    fn amount(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            min
        } else {
            self.rng.random_range(min..=max)
        }
    }
}

impl Default for RandomAI {
    fn default() -> Self {
        Self::new()
    }
}

impl AIOpponent for RandomAI {
    fn choose_action(&mut self, prompt: &ActionPrompt<'_>) -> PlayerAction {
        match prompt.options {
            ActionOptions::Opening { min_bet, max_bet } => {
                if self.rng.random_bool(0.5) {
                    PlayerAction::Check
                } else {
                    PlayerAction::Bet(self.amount(min_bet, max_bet))
                }
            }
            ActionOptions::Facing {
                min_raise,
                max_raise,
                ..
            } => match self.rng.random_range(0..3) {
                0 => PlayerAction::Raise(self.amount(min_raise, max_raise)),
                1 => PlayerAction::Fold,
                _ => PlayerAction::Call,
            },
            ActionOptions::ShortStack { .. } => {
                if self.rng.random_bool(0.5) {
                    PlayerAction::AllIn
                } else {
                    PlayerAction::Fold
                }
            }
        }
    }

    fn choose_discards(&mut self, prompt: &DiscardPrompt<'_>) -> Vec<usize> {
        (0..prompt.hand.len())
            .filter(|_| self.rng.random_bool(0.3))
            .collect()
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
