use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// Forced and allowed bet sizes for a table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stakes {
    pub ante: u64,
    pub min_bet: u64,
    pub max_bet: u64,
}

impl Default for Stakes {
    fn default() -> Self {
        Self {
            ante: 1,
            min_bet: 1,
            max_bet: 2,
        }
    }
}

/// What a player may do when it is their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOptions {
    /// No bet is open: check, or bet within the range.
    Opening { min_bet: u64, max_bet: u64 },
    /// A bet is open and the player can cover it: call, raise within the range, or fold.
    Facing {
        to_call: u64,
        min_raise: u64,
        max_raise: u64,
    },
    /// A bet is open and the player cannot cover more than it: all-in or fold.
    ShortStack { to_call: u64, chips: u64 },
}

impl ActionOptions {
    /// Options for a player holding `chips` who already paid `amt_paid` this
    /// interval, given the open bet (if any). Bet sizes are capped by the chips.
    pub fn compute(current_bet: Option<u64>, amt_paid: u64, chips: u64, stakes: &Stakes) -> Self {
        match current_bet {
            None => {
                let max_bet = stakes.max_bet.min(chips);
                ActionOptions::Opening {
                    min_bet: stakes.min_bet.min(max_bet),
                    max_bet,
                }
            }
            Some(bet) => {
                let to_call = bet.saturating_sub(amt_paid);
                if chips <= to_call {
                    ActionOptions::ShortStack { to_call, chips }
                } else {
                    let max_raise = stakes.max_bet.min(chips - to_call);
                    ActionOptions::Facing {
                        to_call,
                        min_raise: stakes.min_bet.min(max_raise),
                        max_raise,
                    }
                }
            }
        }
    }

    /// Words a player can answer with, for prompts.
    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            ActionOptions::Opening { .. } => &["check", "bet"],
            ActionOptions::Facing { .. } => &["call", "raise", "fold"],
            ActionOptions::ShortStack { .. } => &["allin", "fold"],
        }
    }

    pub fn to_call(&self) -> u64 {
        match *self {
            ActionOptions::Opening { .. } => 0,
            ActionOptions::Facing { to_call, .. } | ActionOptions::ShortStack { to_call, .. } => {
                to_call
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum ValidatedAction {
    Check,
    Bet(u64),
    Call(u64),
    /// Pays `to_call`, then opens a bet higher by `by`
    Raise { to_call: u64, by: u64 },
    Fold,
    AllIn(u64),
}

impl ValidatedAction {
    /// Chips this action moves from the player to the pot.
    pub fn cost(&self) -> u64 {
        match *self {
            ValidatedAction::Check | ValidatedAction::Fold => 0,
            ValidatedAction::Bet(n) | ValidatedAction::Call(n) | ValidatedAction::AllIn(n) => n,
            ValidatedAction::Raise { to_call, by } => to_call + by,
        }
    }
}

/// Validates a player action against the options offered for this turn.
///
/// # Errors
///
/// - [`GameError::InvalidBetAmount`] when a bet or raise is outside the offered range
/// - [`GameError::IllegalAction`] when the action is not offered at all
///
/// # Examples
///
/// ```
/// use parlor_engine::rules::{validate_action, ActionOptions, Stakes, ValidatedAction};
/// use parlor_engine::player::PlayerAction;
///
/// let stakes = Stakes::default();
/// let facing = ActionOptions::compute(Some(2), 0, 18, &stakes);
/// let result = validate_action(&facing, PlayerAction::Raise(2));
/// assert_eq!(result, Ok(ValidatedAction::Raise { to_call: 2, by: 2 }));
///
/// let short = ActionOptions::compute(Some(2), 0, 1, &stakes);
/// assert_eq!(validate_action(&short, PlayerAction::Call), Ok(ValidatedAction::AllIn(1)));
/// ```
pub fn validate_action(options: &ActionOptions, action: A) -> Result<ValidatedAction, GameError> {
    let illegal = |action: &A, reason: &str| GameError::IllegalAction {
        action: format!("{:?}", action),
        reason: reason.to_string(),
    };

    match (*options, action) {
        (ActionOptions::Opening { .. }, A::Check) => Ok(ValidatedAction::Check),
        (ActionOptions::Opening { min_bet, max_bet }, A::Bet(amount)) => {
            check_range(amount, min_bet, max_bet)?;
            Ok(ValidatedAction::Bet(amount))
        }
        (ActionOptions::Opening { .. }, other) => {
            Err(illegal(&other, "no bet is open; check or bet"))
        }

        (ActionOptions::Facing { to_call, .. }, A::Call) => Ok(ValidatedAction::Call(to_call)),
        (
            ActionOptions::Facing {
                to_call,
                min_raise,
                max_raise,
            },
            A::Raise(by),
        ) => {
            check_range(by, min_raise, max_raise)?;
            Ok(ValidatedAction::Raise { to_call, by })
        }
        (ActionOptions::Facing { .. }, A::Fold) => Ok(ValidatedAction::Fold),
        (ActionOptions::Facing { .. }, other) => {
            Err(illegal(&other, "a bet is open; call, raise or fold"))
        }

        (ActionOptions::ShortStack { chips, .. }, A::AllIn | A::Call) => {
            Ok(ValidatedAction::AllIn(chips))
        }
        (ActionOptions::ShortStack { .. }, A::Fold) => Ok(ValidatedAction::Fold),
        (ActionOptions::ShortStack { .. }, other) => {
            Err(illegal(&other, "not enough chips to call; go all-in or fold"))
        }
    }
}

fn check_range(amount: u64, minimum: u64, maximum: u64) -> Result<(), GameError> {
    if amount == 0 || amount < minimum || amount > maximum {
        Err(GameError::InvalidBetAmount {
            amount,
            minimum,
            maximum,
        })
    } else {
        Ok(())
    }
}

/// Checks zero-based discard positions against the hand size and returns
/// them sorted high to low, so removing in order keeps the rest valid.
pub fn validate_discards(positions: &[usize], hand_len: usize) -> Result<Vec<usize>, GameError> {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    if let Some(&bad) = sorted.iter().find(|&&p| p >= hand_len) {
        return Err(GameError::InvalidDiscard(format!(
            "position {} is outside a hand of {}",
            bad + 1,
            hand_len
        )));
    }
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return Err(GameError::InvalidDiscard(
            "the same card was picked twice".to_string(),
        ));
    }
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_bet_capped_by_chips() {
        let opts = ActionOptions::compute(None, 0, 1, &Stakes::default());
        assert_eq!(
            opts,
            ActionOptions::Opening {
                min_bet: 1,
                max_bet: 1
            }
        );
        assert!(matches!(
            validate_action(&opts, A::Bet(2)),
            Err(GameError::InvalidBetAmount { maximum: 1, .. })
        ));
    }

    #[test]
    fn check_rejected_when_facing_bet() {
        let opts = ActionOptions::compute(Some(2), 0, 10, &Stakes::default());
        assert!(matches!(
            validate_action(&opts, A::Check),
            Err(GameError::IllegalAction { .. })
        ));
    }

    #[test]
    fn discards_sorted_descending() {
        assert_eq!(validate_discards(&[0, 4, 2], 5).unwrap(), vec![4, 2, 0]);
        assert!(validate_discards(&[5], 5).is_err());
        assert!(validate_discards(&[1, 1], 5).is_err());
        assert!(validate_discards(&[], 5).unwrap().is_empty());
    }
}
