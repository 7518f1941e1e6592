use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

const DECK_SIZE: usize = 52;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Variant {
    #[serde(rename = "draw")]
    FiveCardDraw,
    #[serde(rename = "stud")]
    SevenCardStud,
    #[serde(rename = "holdem")]
    TexasHoldEm,
}

impl Variant {
    pub const ALL: [Variant; 3] = [
        Variant::FiveCardDraw,
        Variant::SevenCardStud,
        Variant::TexasHoldEm,
    ];

    pub fn short_name(self) -> &'static str {
        match self {
            Variant::FiveCardDraw => "draw",
            Variant::SevenCardStud => "stud",
            Variant::TexasHoldEm => "holdem",
        }
    }

    pub fn rules(self) -> VariantRules {
        use Facing::{Down, Up};
        match self {
            Variant::FiveCardDraw => VariantRules {
                variant: self,
                deal: &[Down, Down, Down, Down, Down],
                middle: MiddlePhase::Discard,
                scoring: Scoring::OwnHand,
            },
            Variant::SevenCardStud => VariantRules {
                variant: self,
                deal: &[Down, Down, Up],
                middle: MiddlePhase::Streets(&[Up, Up, Up, Down]),
                scoring: Scoring::BestOfOwnSeven,
            },
            Variant::TexasHoldEm => VariantRules {
                variant: self,
                deal: &[Down, Down],
                middle: MiddlePhase::Community(&[3, 1, 1]),
                scoring: Scoring::BestWithCommunity,
            },
        }
    }

    pub fn max_players(self) -> usize {
        self.rules().max_players()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::FiveCardDraw => "Five Card Draw",
            Variant::SevenCardStud => "Seven Card Stud",
            Variant::TexasHoldEm => "Texas Hold'em",
        })
    }
}

impl FromStr for Variant {
    type Err = GameError;

    /// Accepts short or full names, ignoring case, spaces, dashes and apostrophes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "draw" | "fivecarddraw" => Ok(Variant::FiveCardDraw),
            "stud" | "sevencardstud" => Ok(Variant::SevenCardStud),
            "holdem" | "texasholdem" => Ok(Variant::TexasHoldEm),
            _ => Err(GameError::UnknownVariant(s.to_string())),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Facing {
    Up,
    Down,
}

impl Facing {
    pub fn is_down(self) -> bool {
        self == Facing::Down
    }
}

/// What happens between the first and last betting intervals.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MiddlePhase {
    /// Discard and replenish to a full hand, then one more interval
    Discard,
    /// One card per player per street, each street followed by an interval
    Streets(&'static [Facing]),
    /// Shared cards per street, each street followed by an interval
    Community(&'static [usize]),
}

/// Which cards a player's showdown hand is chosen from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Scoring {
    OwnHand,
    BestOfOwnSeven,
    BestWithCommunity,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VariantRules {
    pub variant: Variant,
    /// Cards dealt before the first interval, one step per entry
    pub deal: &'static [Facing],
    pub middle: MiddlePhase,
    pub scoring: Scoring,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// One card to every seat in the round, in acting order
    Deal(Facing),
    /// Cards turned face up in the middle of the table
    Community(usize),
    DiscardAndDraw,
    Bet,
    Showdown,
}

impl VariantRules {
    pub fn cards_per_player(&self) -> usize {
        match self.middle {
            MiddlePhase::Streets(streets) => self.deal.len() + streets.len(),
            _ => self.deal.len(),
        }
    }

    pub fn community_cards(&self) -> usize {
        match self.middle {
            MiddlePhase::Community(streets) => streets.iter().sum(),
            _ => 0,
        }
    }

    /// How many seats one deck can serve.
    pub fn max_players(&self) -> usize {
        (DECK_SIZE - self.community_cards()) / self.cards_per_player()
    }

    /// The full phase sequence of one round, showdown last.
    pub fn plan(&self) -> Vec<Phase> {
        let mut phases: Vec<Phase> = self.deal.iter().map(|&f| Phase::Deal(f)).collect();
        phases.push(Phase::Bet);
        match self.middle {
            MiddlePhase::Discard => {
                phases.push(Phase::DiscardAndDraw);
                phases.push(Phase::Bet);
            }
            MiddlePhase::Streets(streets) => {
                for &facing in streets {
                    phases.push(Phase::Deal(facing));
                    phases.push(Phase::Bet);
                }
            }
            MiddlePhase::Community(streets) => {
                for &count in streets {
                    phases.push(Phase::Community(count));
                    phases.push(Phase::Bet);
                }
            }
        }
        phases.push(Phase::Showdown);
        phases
    }
}
