//! One betting interval, ante collection, and pot division.
//!
//! A [`BettingRound`] is driven from outside: ask [`BettingRound::next_actor`]
//! for the seat to act, collect that player's decision, then hand it to
//! [`BettingRound::apply`]. The interval closes once the final responder (the
//! seat before whoever last opened or raised) has had their turn, or once a
//! single player is left in the round.

use crate::errors::GameError;
use crate::player::{Player, PlayerAction};
use crate::rules::{validate_action, ActionOptions, Stakes, ValidatedAction};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IntervalState {
    Idle,
    AwaitingAction(usize),
    RoundClosed,
}

#[derive(Debug, Clone)]
pub struct BettingRound {
    state: IntervalState,
    seats: usize,
    cursor: usize,
    final_responder: usize,
    current_bet: Option<u64>,
    stakes: Stakes,
    started: bool,
}

impl BettingRound {
    /// Starts an interval for `seats` players; the first seat asked is the one after `dealer`.
    pub fn new(seats: usize, dealer: usize, stakes: Stakes) -> Self {
        let dealer = if seats == 0 { 0 } else { dealer % seats };
        Self {
            state: IntervalState::Idle,
            seats,
            cursor: dealer,
            final_responder: dealer,
            current_bet: None,
            stakes,
            started: false,
        }
    }

    pub fn state(&self) -> IntervalState {
        self.state
    }

    pub fn current_bet(&self) -> Option<u64> {
        self.current_bet
    }

    pub fn final_responder(&self) -> usize {
        self.final_responder
    }

    pub fn is_closed(&self) -> bool {
        self.state == IntervalState::RoundClosed
    }

    /// Advances to the next seat that must act, skipping folded and
    /// zero-chip players. Returns `None` once the interval has closed; closing
    /// resets every player's per-interval paid amount.
    pub fn next_actor(&mut self, players: &mut [Player]) -> Option<usize> {
        match self.state {
            IntervalState::RoundClosed => return None,
            IntervalState::AwaitingAction(seat) => return Some(seat),
            IntervalState::Idle => {}
        }

        loop {
            let done = active_count(players) <= 1
                || self.seats == 0
                || (self.started && self.cursor == self.final_responder);
            if done {
                self.close(players);
                return None;
            }
            self.started = true;
            self.cursor = (self.cursor + 1) % self.seats;
            if players[self.cursor].can_act() {
                self.state = IntervalState::AwaitingAction(self.cursor);
                return Some(self.cursor);
            }
        }
    }

    /// Options offered to `seat` right now.
    pub fn options(&self, player: &Player) -> ActionOptions {
        ActionOptions::compute(
            self.current_bet,
            player.amt_paid(),
            player.chips(),
            &self.stakes,
        )
    }

    /// Validates and applies the acting seat's decision, moving chips into `pot`.
    ///
    /// On error nothing changes and the same seat is still awaited.
    pub fn apply(
        &mut self,
        seat: usize,
        action: PlayerAction,
        players: &mut [Player],
        pot: &mut u64,
    ) -> Result<ValidatedAction, GameError> {
        let expected = match self.state {
            IntervalState::AwaitingAction(expected) => expected,
            _ => {
                return Err(GameError::IllegalAction {
                    action: format!("{:?}", action),
                    reason: "no player is due to act".to_string(),
                })
            }
        };
        if expected != seat {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            });
        }

        let validated = validate_action(&self.options(&players[seat]), action)?;
        let player = &mut players[seat];
        match validated {
            ValidatedAction::Check => {}
            ValidatedAction::Bet(amount) => {
                *pot += player.pay(amount);
                self.current_bet = Some(amount);
                self.final_responder = self.seat_before(seat);
            }
            ValidatedAction::Call(amount) | ValidatedAction::AllIn(amount) => {
                *pot += player.pay(amount);
            }
            ValidatedAction::Raise { to_call, by } => {
                *pot += player.pay(to_call + by);
                self.current_bet = Some(self.current_bet.unwrap_or(0) + by);
                self.final_responder = self.seat_before(seat);
            }
            ValidatedAction::Fold => player.fold(),
        }
        tracing::debug!(
            seat,
            player = player.name(),
            action = ?validated,
            pot = *pot,
            "betting action"
        );

        self.state = IntervalState::Idle;
        Ok(validated)
    }

    fn seat_before(&self, seat: usize) -> usize {
        (seat + self.seats - 1) % self.seats
    }

    fn close(&mut self, players: &mut [Player]) {
        for p in players.iter_mut() {
            p.reset_paid();
        }
        self.current_bet = None;
        self.state = IntervalState::RoundClosed;
    }
}

/// Players still holding a stake in the pot.
pub fn active_count(players: &[Player]) -> usize {
    players.iter().filter(|p| p.in_round()).count()
}

/// The seat of the only player left in the round, if exactly one remains.
pub fn sole_survivor(players: &[Player]) -> Option<usize> {
    let mut active = players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.in_round())
        .map(|(i, _)| i);
    match (active.next(), active.next()) {
        (Some(seat), None) => Some(seat),
        _ => None,
    }
}

/// Takes the ante from every player in the round, or what they have if less.
/// Returns the total collected.
pub fn collect_ante(players: &mut [Player], ante: u64, pot: &mut u64) -> u64 {
    let mut collected = 0;
    for p in players.iter_mut().filter(|p| p.in_round()) {
        collected += p.pay(ante);
        p.reset_paid();
    }
    *pot += collected;
    collected
}

/// Seat indices in acting order: the seat after `dealer` first, wrapping around.
pub fn seats_after(dealer: usize, seats: usize) -> Vec<usize> {
    (1..=seats).map(|i| (dealer + i) % seats).collect()
}

/// Splits `pot` among `winners`. Every share is `pot / k`; the first `pot % k`
/// winners in acting order get one chip more, so shares always sum to the pot.
///
/// ```
/// use parlor_engine::betting::divide_pot;
///
/// // dealer at seat 1: seat 2 is first in order, then seat 0
/// let shares = divide_pot(7, &[0, 2], 1, 3);
/// assert_eq!(shares, vec![(2, 4), (0, 3)]);
/// ```
pub fn divide_pot(pot: u64, winners: &[usize], dealer: usize, seats: usize) -> Vec<(usize, u64)> {
    let ordered: Vec<usize> = seats_after(dealer, seats)
        .into_iter()
        .filter(|s| winners.contains(s))
        .collect();
    if ordered.is_empty() {
        return Vec::new();
    }
    let k = ordered.len() as u64;
    let share = pot / k;
    let remainder = (pot % k) as usize;
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, seat)| (seat, share + u64::from(i < remainder)))
        .collect()
}
