use std::cmp::Ordering;

use crate::betting::{
    collect_ante, divide_pot, seats_after, sole_survivor, BettingRound,
};
use crate::cards::Card;
use crate::controller::{
    ActionPrompt, Controller, DiscardPrompt, SeatView, ShowdownHand, Standing, TableEvent,
};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::GameState;
use crate::hand::Hand;
use crate::logger::ActionRecord;
use crate::player::Player;
use crate::rules::{validate_discards, Stakes};
use crate::variant::{Facing, Phase, Scoring, Variant, VariantRules};

/// What a finished round produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round: u64,
    pub variant: Variant,
    /// Pot that was distributed, including anything carried in
    pub pot: u64,
    pub winners: Vec<String>,
    pub shares: Vec<(String, u64)>,
    /// Empty when everyone else folded
    pub showdown: Vec<ShowdownHand>,
    pub actions: Vec<ActionRecord>,
    pub community: Vec<Card>,
}

impl RoundOutcome {
    pub fn went_to_showdown(&self) -> bool {
        !self.showdown.is_empty()
    }

    /// One-line summary such as `"ann wins 7"` or `"ann, bob split 8"`.
    pub fn summary(&self) -> String {
        match self.winners.as_slice() {
            [one] => format!("{} wins {}", one, self.pot),
            many => format!("{} split {}", many.join(", "), self.pot),
        }
    }
}

/// One poker session: the table, its deck, and the pot between rounds.
///
/// # Examples
///
/// ```
/// use parlor_engine::engine::Engine;
/// use parlor_engine::player::Player;
/// use parlor_engine::rules::Stakes;
/// use parlor_engine::variant::Variant;
///
/// let mut engine = Engine::new(Variant::TexasHoldEm, Stakes::default(), Some(7));
/// engine.add_player(Player::new("ann", 20)).unwrap();
/// engine.add_player(Player::new("bob", 20)).unwrap();
/// assert_eq!(engine.table().len(), 2);
/// assert_eq!(engine.deck().len(), 52);
/// ```
#[derive(Debug)]
pub struct Engine {
    rules: VariantRules,
    stakes: Stakes,
    seed: Option<u64>,
    table: GameState,
    deck: Deck,
    full_deck_size: usize,
    discards: Deck,
    community: Vec<Card>,
    pot: u64,
    rounds_played: u64,
    interval: usize,
    actions: Vec<ActionRecord>,
}

impl Engine {
    pub fn new(variant: Variant, stakes: Stakes, seed: Option<u64>) -> Self {
        let deck = match seed {
            Some(s) => Deck::standard_with_seed(s),
            None => Deck::standard(),
        };
        Self::with_deck(variant, stakes, seed, deck)
    }

    /// Uses the given deck (for example one loaded from a file) as the main deck.
    pub fn with_deck(variant: Variant, stakes: Stakes, seed: Option<u64>, deck: Deck) -> Self {
        let rules = variant.rules();
        let discards = match seed {
            Some(s) => Deck::with_seed(s.wrapping_add(1)),
            None => Deck::new(),
        };
        Self {
            rules,
            stakes,
            seed,
            table: GameState::new(rules.max_players()),
            full_deck_size: deck.len(),
            deck,
            discards,
            community: Vec::new(),
            pot: 0,
            rounds_played: 0,
            interval: 0,
            actions: Vec::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.rules.variant
    }
    pub fn stakes(&self) -> Stakes {
        self.stakes
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn table(&self) -> &GameState {
        &self.table
    }
    pub fn table_mut(&mut self) -> &mut GameState {
        &mut self.table
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn pot(&self) -> u64 {
        self.pot
    }
    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    pub fn add_player(&mut self, player: Player) -> Result<usize, GameError> {
        self.table.add_player(player)
    }

    pub fn remove_player(&mut self, name: &str) -> Option<Player> {
        self.table.remove_player(name)
    }

    /// Name, record, chips and current hand (or `[folded]`) of every seat.
    pub fn standings(&self) -> Vec<Standing> {
        self.table
            .players()
            .iter()
            .map(|p| Standing {
                name: p.name().to_string(),
                wins: p.wins(),
                losses: p.losses(),
                chips: p.chips(),
                hand: if p.in_round() {
                    p.hand().to_string()
                } else {
                    "[folded]".to_string()
                },
            })
            .collect()
    }

    /// Refuses to start when the table cannot play; nothing is mutated.
    pub fn check_can_start(&self) -> Result<(), GameError> {
        let players = self.table.len();
        if players < 2 {
            return Err(GameError::NotEnoughPlayers { players });
        }
        let max = self.rules.max_players();
        if players > max {
            return Err(GameError::TooManyPlayers { players, max });
        }
        if let Some(broke) = self.table.players().iter().find(|p| p.chips() == 0) {
            return Err(GameError::PlayerHasNoChips(broke.name().to_string()));
        }
        Ok(())
    }

    /// Plays one full round: ante, deals, betting intervals, showdown, cleanup.
    ///
    /// If a phase fails after the round started, the round is aborted: chips
    /// already moved stay where they are, the pot carries into the next
    /// round, cards go back to the deck and the dealer still advances.
    pub fn play_round(&mut self, ctl: &mut dyn Controller) -> Result<RoundOutcome, GameError> {
        self.check_can_start()?;

        self.rounds_played += 1;
        self.interval = 0;
        self.actions.clear();
        tracing::info!(
            round = self.rounds_played,
            variant = %self.rules.variant,
            players = self.table.len(),
            dealer = self.table.dealer(),
            "round started"
        );

        let result = self.run_round(ctl);
        if let Err(e) = &result {
            tracing::info!(round = self.rounds_played, error = %e, pot = self.pot, "round aborted");
            ctl.notify(&TableEvent::RoundAborted {
                reason: e.to_string(),
                pot_carried: self.pot,
            });
        }
        self.cleanup();
        result
    }

    fn run_round(&mut self, ctl: &mut dyn Controller) -> Result<RoundOutcome, GameError> {
        self.deck.shuffle();
        for p in self.table.players_mut() {
            p.join_round();
        }
        let dealer = self.table.dealer();
        ctl.notify(&TableEvent::RoundStarted {
            round: self.rounds_played,
            variant: self.rules.variant,
            dealer: self.table.players()[dealer].name().to_string(),
            players: self
                .table
                .players()
                .iter()
                .map(|p| p.name().to_string())
                .collect(),
        });

        let total = collect_ante(self.table.players_mut(), self.stakes.ante, &mut self.pot);
        ctl.notify(&TableEvent::AnteCollected {
            total,
            pot: self.pot,
        });

        for phase in self.rules.plan() {
            if let Some(seat) = sole_survivor(self.table.players()) {
                return Ok(self.award_early(seat, ctl));
            }
            match phase {
                Phase::Deal(facing) => self.deal_step(facing)?,
                Phase::Community(count) => {
                    for _ in 0..count {
                        let card = self.deck.deal_front()?;
                        self.community.push(card);
                    }
                    tracing::debug!(community = ?self.community_tokens(), "community dealt");
                }
                Phase::DiscardAndDraw => self.discard_and_draw(ctl)?,
                Phase::Bet => {
                    ctl.notify(&self.table_view());
                    self.run_betting(ctl)?;
                }
                Phase::Showdown => break,
            }
        }

        if let Some(seat) = sole_survivor(self.table.players()) {
            return Ok(self.award_early(seat, ctl));
        }
        self.showdown(ctl)
    }

    /// One card to every seat still in the round, starting after the dealer.
    fn deal_step(&mut self, facing: Facing) -> Result<(), GameError> {
        let order = seats_after(self.table.dealer(), self.table.len());
        let players = self.table.players_mut();
        for seat in order {
            if players[seat].in_round() {
                players[seat]
                    .hand_mut()
                    .deal_from(&mut self.deck, facing.is_down())?;
            }
        }
        tracing::debug!(?facing, remaining = self.deck.len(), "deal step");
        Ok(())
    }

    fn run_betting(&mut self, ctl: &mut dyn Controller) -> Result<(), GameError> {
        self.interval += 1;
        let mut round = BettingRound::new(self.table.len(), self.table.dealer(), self.stakes);

        while let Some(seat) = round.next_actor(self.table.players_mut()) {
            let action = {
                let p = &self.table.players()[seat];
                ctl.choose_action(&ActionPrompt {
                    variant: self.rules.variant,
                    seat,
                    name: p.name(),
                    hand: p.hand(),
                    community: &self.community,
                    chips: p.chips(),
                    pot: self.pot,
                    options: round.options(p),
                })
            };

            let validated = round.apply(seat, action, self.table.players_mut(), &mut self.pot)?;
            let p = &self.table.players()[seat];
            self.actions.push(ActionRecord {
                seat,
                player: p.name().to_string(),
                interval: self.interval,
                action: validated.clone(),
            });
            ctl.notify(&TableEvent::ActionTaken {
                seat,
                name: p.name().to_string(),
                action: validated,
                chips: p.chips(),
                pot: self.pot,
            });
        }
        Ok(())
    }

    fn discard_and_draw(&mut self, ctl: &mut dyn Controller) -> Result<(), GameError> {
        let order = seats_after(self.table.dealer(), self.table.len());

        for &seat in &order {
            if !self.table.players()[seat].in_round() {
                continue;
            }
            let picked = {
                let p = &self.table.players()[seat];
                ctl.choose_discards(&DiscardPrompt {
                    variant: self.rules.variant,
                    seat,
                    name: p.name(),
                    hand: p.hand(),
                })
            };
            let p = &mut self.table.players_mut()[seat];
            let positions = validate_discards(&picked, p.hand().len())?;
            for index in &positions {
                let card = p.hand_mut().remove_card(*index)?;
                self.discards.add_card(card);
            }
            tracing::debug!(player = p.name(), count = positions.len(), "discarded");
            ctl.notify(&TableEvent::Discarded {
                name: p.name().to_string(),
                count: positions.len(),
            });
        }

        let hand_size = self.rules.deal.len();
        for &seat in &order {
            if !self.table.players()[seat].in_round() {
                continue;
            }
            while self.table.players()[seat].hand().len() < hand_size {
                let card = self.draw_replacement(ctl)?;
                self.table.players_mut()[seat]
                    .hand_mut()
                    .add_card(card.face_down());
            }
        }
        Ok(())
    }

    /// Next card from the deck, reshuffling the discard pile in when the deck is out.
    fn draw_replacement(&mut self, ctl: &mut dyn Controller) -> Result<Card, GameError> {
        if self.deck.is_empty() && !self.discards.is_empty() {
            let cards = self.discards.len();
            self.deck.absorb(&mut self.discards);
            self.deck.shuffle();
            tracing::debug!(cards, "discard pile reshuffled into the deck");
            ctl.notify(&TableEvent::DiscardsReshuffled { cards });
        }
        self.deck.deal_front()
    }

    fn award_early(&mut self, seat: usize, ctl: &mut dyn Controller) -> RoundOutcome {
        let pot = std::mem::take(&mut self.pot);
        let name = self.table.players()[seat].name().to_string();
        self.table.players_mut()[seat].add_chips(pot);
        self.record_results(&[seat]);
        tracing::info!(round = self.rounds_played, winner = %name, pot, "won without showdown");
        ctl.notify(&TableEvent::EarlyWin {
            name: name.clone(),
            pot,
        });
        ctl.notify(&TableEvent::Standings {
            rows: self.standings(),
        });

        RoundOutcome {
            round: self.rounds_played,
            variant: self.rules.variant,
            pot,
            winners: vec![name.clone()],
            shares: vec![(name, pot)],
            showdown: Vec::new(),
            actions: self.actions.clone(),
            community: self.community.clone(),
        }
    }

    fn showdown(&mut self, ctl: &mut dyn Controller) -> Result<RoundOutcome, GameError> {
        let dealer = self.table.dealer();
        let seats = self.table.len();

        let mut contenders: Vec<(usize, Hand)> = Vec::new();
        for seat in seats_after(dealer, seats) {
            if self.table.players()[seat].in_round() {
                contenders.push((seat, self.showdown_hand(seat)?));
            }
        }

        let mut best: Vec<usize> = Vec::new();
        for (i, (_, hand)) in contenders.iter().enumerate() {
            let ord = match best.first() {
                None => Ordering::Greater,
                Some(&b) => hand.compare(&contenders[b].1)?,
            };
            match ord {
                Ordering::Greater => {
                    best.clear();
                    best.push(i);
                }
                Ordering::Equal => best.push(i),
                Ordering::Less => {}
            }
        }
        let winner_seats: Vec<usize> = best.iter().map(|&i| contenders[i].0).collect();

        let pot = std::mem::take(&mut self.pot);
        let split = divide_pot(pot, &winner_seats, dealer, seats);
        let mut shares = Vec::with_capacity(split.len());
        for &(seat, amount) in &split {
            let p = &mut self.table.players_mut()[seat];
            p.add_chips(amount);
            shares.push((p.name().to_string(), amount));
        }
        tracing::debug!(pot, ?shares, "pot divided");
        self.record_results(&winner_seats);

        let hands: Vec<ShowdownHand> = contenders
            .iter()
            .map(|(seat, hand)| ShowdownHand {
                name: self.table.players()[*seat].name().to_string(),
                hand: hand.to_string(),
                category: hand.category().unwrap_or(crate::hand::Category::HighCard),
            })
            .collect();
        let winners: Vec<String> = shares.iter().map(|(n, _)| n.clone()).collect();
        tracing::info!(round = self.rounds_played, ?winners, pot, "showdown");

        ctl.notify(&TableEvent::Showdown {
            hands: hands.clone(),
            winners: winners.clone(),
            shares: shares.clone(),
        });
        ctl.notify(&TableEvent::Standings {
            rows: self.standings(),
        });

        Ok(RoundOutcome {
            round: self.rounds_played,
            variant: self.rules.variant,
            pot,
            winners,
            shares,
            showdown: hands,
            actions: self.actions.clone(),
            community: self.community.clone(),
        })
    }

    /// The ranked five-card hand a seat plays at showdown.
    fn showdown_hand(&self, seat: usize) -> Result<Hand, GameError> {
        let own = self.table.players()[seat].hand();
        let mut hand = match self.rules.scoring {
            Scoring::OwnHand => own.clone(),
            Scoring::BestOfOwnSeven => own.best_subset()?.0,
            Scoring::BestWithCommunity => {
                let pool = Hand::from_cards(own.cards().iter().chain(&self.community).copied());
                pool.best_subset()?.0
            }
        };
        if hand.category().is_none() {
            hand.rank()?;
        }
        Ok(hand)
    }

    fn record_results(&mut self, winners: &[usize]) {
        for (seat, p) in self.table.players_mut().iter_mut().enumerate() {
            if winners.contains(&seat) {
                p.record_win();
            } else {
                p.record_loss();
            }
        }
    }

    fn table_view(&self) -> TableEvent {
        TableEvent::TableView {
            seats: self
                .table
                .players()
                .iter()
                .map(|p| SeatView {
                    name: p.name().to_string(),
                    cards: p.hand().to_hidden_string(),
                    chips: p.chips(),
                    in_round: p.in_round(),
                })
                .collect(),
            community: self.community.clone(),
            pot: self.pot,
        }
    }

    fn community_tokens(&self) -> Vec<String> {
        self.community.iter().map(|c| c.to_string()).collect()
    }

    /// Returns every card to the deck and moves the dealer one seat on.
    fn cleanup(&mut self) {
        for p in self.table.players_mut() {
            let cards = p.hand_mut().drain();
            self.deck.extend(cards);
            p.leave_round();
        }
        self.deck.extend(self.community.drain(..));
        self.deck.absorb(&mut self.discards);
        if self.deck.len() != self.full_deck_size {
            tracing::warn!(
                expected = self.full_deck_size,
                actual = self.deck.len(),
                "deck did not return to full size"
            );
        }
        self.table.rotate_dealer();
    }
}
