use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents one of the four suits in a standard 52-card deck.
/// `Invalid` marks a card parsed from a malformed token and sorts lowest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Suit {
    /// Malformed or missing suit character
    Invalid,
    /// Clubs suit (c)
    Clubs,
    /// Diamonds suit (d)
    Diamonds,
    /// Hearts suit (h)
    Hearts,
    /// Spades suit (s)
    Spades,
}

impl Suit {
    pub fn from_char(c: char) -> Suit {
        match c.to_ascii_lowercase() {
            'c' => Suit::Clubs,
            'd' => Suit::Diamonds,
            'h' => Suit::Hearts,
            's' => Suit::Spades,
            _ => Suit::Invalid,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Invalid => '?',
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and hand evaluation purposes;
/// `Invalid` (0) marks a malformed token.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    /// Malformed rank
    Invalid = 0,
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => Rank::Invalid,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    fn from_letter(c: char) -> Rank {
        match c.to_ascii_uppercase() {
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => Rank::Invalid,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => f.write_str("J"),
            Rank::Queen => f.write_str("Q"),
            Rank::King => f.write_str("K"),
            Rank::Ace => f.write_str("A"),
            Rank::Invalid => f.write_str("?"),
            r => write!(f, "{}", r.value()),
        }
    }
}

/// A single playing card.
///
/// Identity is rank and suit only: `face_down` is a display hint and takes no
/// part in equality, hashing, or ordering. Cards order by rank first, then by
/// suit (clubs < diamonds < hearts < spades).
#[derive(Debug, Copy, Clone)]
pub struct Card {
    /// The rank of the card (Two through Ace, or Invalid)
    pub rank: Rank,
    /// The suit of the card (Clubs, Diamonds, Hearts, Spades, or Invalid)
    pub suit: Suit,
    /// Hidden from other players when rendered
    pub face_down: bool,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_down: false,
        }
    }

    /// Parses a short token such as `"10h"`, `"Ks"` or `"2c"`.
    ///
    /// Malformed tokens never fail: they produce a card carrying
    /// `Rank::Invalid` and/or `Suit::Invalid`. Check [`Card::is_valid`]
    /// before using the result.
    ///
    /// ```
    /// use parlor_engine::cards::{Card, Rank, Suit};
    ///
    /// let ten = Card::parse("10H");
    /// assert_eq!((ten.rank, ten.suit), (Rank::Ten, Suit::Hearts));
    /// assert_eq!(ten.to_string(), "10h");
    ///
    /// assert!(!Card::parse("1x").is_valid());
    /// ```
    pub fn parse(token: &str) -> Card {
        const INVALID: Card = Card::new(Rank::Invalid, Suit::Invalid);

        let chars: Vec<char> = token.chars().collect();
        if chars.len() < 2 || chars.len() > 3 {
            return INVALID;
        }

        let (rank, suit_char) = if chars[0].is_ascii_digit() {
            let digits: String = chars.iter().take_while(|c| c.is_ascii_digit()).collect();
            let value: u8 = match digits.parse() {
                Ok(v) => v,
                Err(_) => return INVALID,
            };
            if !(2..=10).contains(&value) {
                return INVALID;
            }
            if value < 10 && chars.len() != 2 {
                return INVALID;
            }
            (Rank::from_u8(value), chars.get(digits.len()).copied())
        } else {
            if chars.len() != 2 {
                return INVALID;
            }
            (Rank::from_letter(chars[0]), chars.get(1).copied())
        };

        let suit = suit_char.map(Suit::from_char).unwrap_or(Suit::Invalid);
        Card::new(rank, suit)
    }

    /// Like [`Card::parse`] but rejects malformed tokens.
    pub fn parse_strict(token: &str) -> Result<Card, crate::errors::GameError> {
        let card = Card::parse(token);
        if card.is_valid() {
            Ok(card)
        } else {
            Err(crate::errors::GameError::InvalidCard(token.to_string()))
        }
    }

    pub fn is_valid(&self) -> bool {
        self.rank != Rank::Invalid && self.suit != Suit::Invalid
    }

    pub fn face_down(mut self) -> Self {
        self.face_down = true;
        self
    }

    pub fn face_up(mut self) -> Self {
        self.face_down = false;
        self
    }

    /// Ordering used for hidden display: face-down cards first, then normal order.
    pub fn cmp_face_down_lowest(&self, other: &Card) -> Ordering {
        other
            .face_down
            .cmp(&self.face_down)
            .then_with(|| self.cmp(other))
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.as_char())
    }
}

impl From<&str> for Card {
    fn from(token: &str) -> Self {
        Card::parse(token)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Card::parse_strict(&token).map_err(serde::de::Error::custom)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// The 52 rank x suit combinations, each exactly once.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &all_ranks() {
        for &s in &all_suits() {
            v.push(Card::new(r, s));
        }
    }
    v
}

/// Renders cards as `[c1, c2, ..., cn]`.
pub fn format_cards<'a, I>(cards: I) -> String
where
    I: IntoIterator<Item = &'a Card>,
{
    let tokens: Vec<String> = cards.into_iter().map(|c| c.to_string()).collect();
    format!("[{}]", tokens.join(", "))
}
