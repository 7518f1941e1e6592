use std::collections::VecDeque;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{format_cards, full_deck, Card};
use crate::errors::GameError;

/// An ordered pile of cards; the front is the next card dealt.
///
/// Each deck owns its RNG. `Deck::new` seeds it from OS entropy so separate
/// processes never share a shuffle sequence; `with_seed` is for replayable
/// sessions and tests.
#[derive(Debug)]
pub struct Deck {
    cards: VecDeque<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            cards: VecDeque::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// 52 unique cards in rank-then-suit order, unshuffled.
    pub fn standard() -> Self {
        let mut deck = Self::new();
        deck.cards.extend(full_deck());
        deck
    }

    pub fn standard_with_seed(seed: u64) -> Self {
        let mut deck = Self::with_seed(seed);
        deck.cards.extend(full_deck());
        deck
    }

    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    pub fn deal_front(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::EmptyDeck)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push_back(card.face_up());
    }

    /// Appends every card of `other` to the back of this deck, leaving `other` empty.
    pub fn absorb(&mut self, other: &mut Deck) {
        self.extend(other.cards.drain(..));
    }

    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        for card in cards {
            self.add_card(card);
        }
    }

    pub fn contains_duplicates(&self) -> bool {
        let mut sorted: Vec<Card> = self.cards.iter().copied().collect();
        sorted.sort_unstable();
        sorted.windows(2).any(|w| w[0] == w[1])
    }

    /// Appends every well-formed whitespace-separated token from `reader`.
    /// Malformed tokens are skipped. Returns how many cards were added.
    pub fn load_from<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let mut added = 0;
        for line in reader.lines() {
            added += self.load_str(&line?);
        }
        Ok(added)
    }

    pub fn load_str(&mut self, text: &str) -> usize {
        let before = self.cards.len();
        for token in text.split_whitespace() {
            let card = Card::parse(token);
            if card.is_valid() {
                self.add_card(card);
            } else {
                tracing::debug!(token, "skipping malformed card token");
            }
        }
        self.cards.len() - before
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> io::Result<usize> {
        let file = File::open(path)?;
        self.load_from(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cards(self.cards.iter()))
    }
}
