use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{format_cards, Card, Rank};
use crate::deck::Deck;
use crate::errors::GameError;

/// Cards that take part in ranking and comparison.
pub const RANKED_SIZE: usize = 5;
/// Cards a best-subset search starts from.
pub const SEARCH_SIZE: usize = 7;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        };
        f.write_str(name)
    }
}

/// Ranks of the duplicate groups found by the last ranking pass.
///
/// In a two-pair hand `pair` holds the higher pair and `second_pair` the
/// lower one. Each group kind has its own slot.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TieBreak {
    pub pair: Option<Rank>,
    pub second_pair: Option<Rank>,
    pub triple: Option<Rank>,
    pub quad: Option<Rank>,
}

impl TieBreak {
    fn record_group(&mut self, extra_copies: usize, rank: Rank) {
        match extra_copies {
            1 => {
                if self.pair.is_some() {
                    self.second_pair = self.pair;
                }
                self.pair = Some(rank);
            }
            2 => self.triple = Some(rank),
            3 => self.quad = Some(rank),
            _ => {}
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Ranking {
    category: Category,
    tie_break: TieBreak,
}

/// A sorted (ascending) set of cards with a cached ranking.
///
/// The cache is dropped on every mutation; call [`Hand::rank`] again once
/// the hand holds exactly five cards.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    ranking: Option<Ranking>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        let mut hand = Self::new();
        for card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Parses whitespace- or comma-separated tokens, rejecting malformed ones.
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let mut hand = Self::new();
        for token in text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            hand.add_card(Card::parse_strict(token)?);
        }
        Ok(hand)
    }

    pub fn add_card(&mut self, card: Card) {
        let at = self.cards.partition_point(|c| c <= &card);
        self.cards.insert(at, card);
        self.ranking = None;
    }

    pub fn deal_from(&mut self, deck: &mut Deck, face_down: bool) -> Result<Card, GameError> {
        let mut card = deck.deal_front()?;
        card.face_down = face_down;
        self.add_card(card);
        Ok(card)
    }

    pub fn remove_card(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.cards.len() {
            return Err(GameError::CardIndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        self.ranking = None;
        Ok(self.cards.remove(index))
    }

    pub fn drain(&mut self) -> Vec<Card> {
        self.ranking = None;
        std::mem::take(&mut self.cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn category(&self) -> Option<Category> {
        self.ranking.map(|r| r.category)
    }

    pub fn tie_break(&self) -> Option<TieBreak> {
        self.ranking.map(|r| r.tie_break)
    }

    /// Classifies a five-card hand and caches the result.
    ///
    /// One pass over adjacent cards counts runs of equal ranks (pair, triple,
    /// quad), adjacent equal suits and adjacent rank steps of one.
    ///
    /// ```
    /// use parlor_engine::hand::{Category, Hand};
    ///
    /// let mut hand = Hand::parse("2c 2d 7h 7s 7c").unwrap();
    /// assert_eq!(hand.rank().unwrap(), Category::FullHouse);
    /// ```
    pub fn rank(&mut self) -> Result<Category, GameError> {
        if self.cards.len() != RANKED_SIZE {
            return Err(GameError::WrongHandSize {
                expected: RANKED_SIZE,
                actual: self.cards.len(),
            });
        }

        let mut tie_break = TieBreak::default();
        let mut run = 0;
        let mut same_suits = 0;
        let mut steps = 0;
        for w in self.cards.windows(2) {
            if w[1].suit == w[0].suit {
                same_suits += 1;
            }
            if w[1].rank == w[0].rank {
                run += 1;
                continue;
            }
            tie_break.record_group(run, w[0].rank);
            run = 0;
            if w[1].rank.value() == w[0].rank.value() + 1 {
                steps += 1;
            }
        }
        tie_break.record_group(run, self.cards[RANKED_SIZE - 1].rank);

        if is_wheel(&self.cards) {
            steps += 1;
        }

        let straight = steps == RANKED_SIZE - 1;
        let flush = same_suits == RANKED_SIZE - 1;
        let category = if straight && flush {
            Category::StraightFlush
        } else if tie_break.quad.is_some() {
            Category::FourOfAKind
        } else if tie_break.triple.is_some() && tie_break.pair.is_some() {
            Category::FullHouse
        } else if flush {
            Category::Flush
        } else if straight {
            Category::Straight
        } else if tie_break.triple.is_some() {
            Category::ThreeOfAKind
        } else if tie_break.second_pair.is_some() {
            Category::TwoPair
        } else if tie_break.pair.is_some() {
            Category::OnePair
        } else {
            Category::HighCard
        };

        self.ranking = Some(Ranking {
            category,
            tie_break,
        });
        Ok(category)
    }

    /// Orders two ranked five-card hands: category first, then the
    /// category's tie-break ranks.
    pub fn compare(&self, other: &Hand) -> Result<Ordering, GameError> {
        for hand in [self, other] {
            if hand.cards.len() != RANKED_SIZE {
                return Err(GameError::WrongHandSize {
                    expected: RANKED_SIZE,
                    actual: hand.cards.len(),
                });
            }
        }
        let (Some(mine), Some(theirs)) = (self.ranking, other.ranking) else {
            return Err(GameError::UnrankedComparison);
        };
        Ok(mine
            .category
            .cmp(&theirs.category)
            .then_with(|| self.comparison_key(&mine).cmp(&other.comparison_key(&theirs))))
    }

    fn comparison_key(&self, ranking: &Ranking) -> Vec<u8> {
        let tb = &ranking.tie_break;
        let value = |r: Option<Rank>| r.map_or(0, Rank::value);

        match ranking.category {
            // The ace of a wheel still counts high here.
            Category::HighCard | Category::Flush | Category::Straight | Category::StraightFlush => {
                self.ranks_descending(&[])
            }
            Category::OnePair => {
                let mut key = vec![value(tb.pair)];
                key.extend(self.ranks_descending(&[tb.pair]));
                key
            }
            Category::TwoPair => {
                let mut key = vec![value(tb.pair), value(tb.second_pair)];
                key.extend(self.ranks_descending(&[tb.pair, tb.second_pair]));
                key
            }
            Category::ThreeOfAKind => {
                let mut key = vec![value(tb.triple)];
                key.extend(self.ranks_descending(&[tb.triple]));
                key
            }
            Category::FullHouse => vec![value(tb.triple), value(tb.pair)],
            Category::FourOfAKind => {
                let mut key = vec![value(tb.quad)];
                key.extend(self.ranks_descending(&[tb.quad]));
                key
            }
        }
    }

    fn ranks_descending(&self, skip: &[Option<Rank>]) -> Vec<u8> {
        self.cards
            .iter()
            .rev()
            .filter(|c| !skip.contains(&Some(c.rank)))
            .map(|c| c.rank.value())
            .collect()
    }

    /// Finds the strongest five-card subset of a seven-card hand.
    ///
    /// The 21 subsets are visited in lexicographic index order and a later
    /// subset replaces the current best only when strictly stronger.
    pub fn best_subset(&self) -> Result<(Hand, Category), GameError> {
        if self.cards.len() != SEARCH_SIZE {
            return Err(GameError::WrongHandSize {
                expected: SEARCH_SIZE,
                actual: self.cards.len(),
            });
        }

        let mut best: Option<Hand> = None;
        for picked in combinations(SEARCH_SIZE, RANKED_SIZE) {
            let mut candidate = Hand::from_cards(picked.iter().map(|&i| self.cards[i]));
            candidate.rank()?;
            let replace = match &best {
                None => true,
                Some(current) => candidate.compare(current)? == Ordering::Greater,
            };
            if replace {
                best = Some(candidate);
            }
        }

        let best = best.ok_or(GameError::WrongHandSize {
            expected: SEARCH_SIZE,
            actual: self.cards.len(),
        })?;
        let category = best.category().ok_or(GameError::UnrankedComparison)?;
        Ok((best, category))
    }

    /// True when both hands are ranked with the same category and hold the
    /// same ranks position by position.
    pub fn same_rank_as(&self, other: &Hand) -> bool {
        match (self.category(), other.category()) {
            (Some(a), Some(b)) if a == b => {
                self.cards.len() == other.cards.len()
                    && self
                        .cards
                        .iter()
                        .zip(&other.cards)
                        .all(|(x, y)| x.rank == y.rank)
            }
            _ => false,
        }
    }

    /// Renders the hand with face-down cards first, each shown as `*`.
    pub fn to_hidden_string(&self) -> String {
        let mut shown = self.cards.clone();
        shown.sort_by(|a, b| a.cmp_face_down_lowest(b));
        let tokens: Vec<String> = shown
            .iter()
            .map(|c| {
                if c.face_down {
                    "*".to_string()
                } else {
                    c.to_string()
                }
            })
            .collect();
        format!("[{}]", tokens.join(", "))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cards(self.cards.iter()))
    }
}

fn is_wheel(sorted: &[Card]) -> bool {
    const WHEEL: [Rank; 5] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];
    sorted.len() == WHEEL.len() && sorted.iter().zip(WHEEL).all(|(c, r)| c.rank == r)
}

/// Index sets of size `k` out of `n`, in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut idx: Vec<usize> = (0..k).collect();
    if k > n {
        return out;
    }
    loop {
        out.push(idx.clone());
        let Some(i) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            break;
        };
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations_of_seven_choose_five() {
        let combos = combinations(7, 5);
        assert_eq!(combos.len(), 21);
        assert_eq!(combos[0], vec![0, 1, 2, 3, 4]);
        assert_eq!(combos[20], vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn two_pair_keeps_both_pairs() {
        let mut hand = Hand::parse("3c 3d 9h 9s Kc").unwrap();
        assert_eq!(hand.rank().unwrap(), Category::TwoPair);
        let tb = hand.tie_break().unwrap();
        assert_eq!(tb.pair, Some(Rank::Nine));
        assert_eq!(tb.second_pair, Some(Rank::Three));
        assert_eq!(tb.quad, None);
    }
}
