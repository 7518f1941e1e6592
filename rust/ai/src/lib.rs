//! # parlor-ai: Automated Seats
//!
//! Opponents that answer the same prompts a human seat gets: a betting
//! decision per [`ActionPrompt`] and a discard choice per [`DiscardPrompt`].
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait every automated seat implements
//! - [`baseline`] - Hand-strength heuristic opponent
//! - [`random`] - Seeded random opponent
//! - [`create_ai`] - Factory function for creating opponents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use parlor_ai::{create_ai, AIOpponent};
//! use parlor_engine::controller::ActionPrompt;
//! use parlor_engine::hand::Hand;
//! use parlor_engine::rules::{ActionOptions, Stakes};
//! use parlor_engine::variant::Variant;
//!
//! let mut ai = create_ai("baseline");
//! let hand = Hand::parse("Ac Ad Ah 4s 9c").unwrap();
//! let prompt = ActionPrompt {
//!     variant: Variant::FiveCardDraw,
//!     seat: 0,
//!     name: "bot",
//!     hand: &hand,
//!     community: &[],
//!     chips: 19,
//!     pot: 3,
//!     options: ActionOptions::compute(None, 0, 19, &Stakes::default()),
//! };
//! let action = ai.choose_action(&prompt);
//! println!("{} chose {:?}", ai.name(), action);
//! ```

use parlor_engine::controller::{ActionPrompt, DiscardPrompt};
use parlor_engine::player::PlayerAction;

pub mod baseline;
pub mod random;

/// Interface for automated seats.
///
/// Implementations must only return actions that the prompt's
/// [`ActionOptions`](parlor_engine::rules::ActionOptions) allow, and discard
/// positions inside the prompt's hand.
///
/// # Example Implementation
///
/// ```rust
/// use parlor_ai::AIOpponent;
/// use parlor_engine::controller::{ActionPrompt, DiscardPrompt};
/// use parlor_engine::player::PlayerAction;
/// use parlor_engine::rules::ActionOptions;
///
/// struct Calling;
///
/// impl AIOpponent for Calling {
///     fn choose_action(&mut self, prompt: &ActionPrompt<'_>) -> PlayerAction {
///         match prompt.options {
///             ActionOptions::Opening { .. } => PlayerAction::Check,
///             ActionOptions::Facing { .. } => PlayerAction::Call,
///             ActionOptions::ShortStack { .. } => PlayerAction::AllIn,
///         }
///     }
///
///     fn choose_discards(&mut self, _prompt: &DiscardPrompt<'_>) -> Vec<usize> {
///         Vec::new()
///     }
///
///     fn name(&self) -> &str {
///         "Calling"
///     }
/// }
/// ```
pub trait AIOpponent: Send {
    /// Pick a betting action among the prompt's options.
    fn choose_action(&mut self, prompt: &ActionPrompt<'_>) -> PlayerAction;

    /// Zero-based positions of the cards to throw away.
    fn choose_discards(&mut self, prompt: &DiscardPrompt<'_>) -> Vec<usize>;

    fn name(&self) -> &str;
}

/// Creates an opponent by kind. Unknown kinds fall back to `"baseline"`.
///
/// # Supported AI Types
///
/// - `"baseline"` - hand-strength heuristic
/// - `"random"` - uniform choice among legal actions, seeded from the OS
///
/// ```rust
/// use parlor_ai::create_ai;
///
/// assert_eq!(create_ai("baseline").name(), "BaselineAI");
/// assert_eq!(create_ai("random").name(), "RandomAI");
/// assert_eq!(create_ai("unknown").name(), "BaselineAI");
/// ```
pub fn create_ai(ai_type: &str) -> Box<dyn AIOpponent> {
    create_ai_seeded(ai_type, None)
}

/// Like [`create_ai`], with a fixed seed for kinds that use randomness.
pub fn create_ai_seeded(ai_type: &str, seed: Option<u64>) -> Box<dyn AIOpponent> {
    match ai_type.to_ascii_lowercase().as_str() {
        "random" => Box::new(match seed {
            Some(s) => random::RandomAI::with_seed(s),
            None => random::RandomAI::new(),
        }),
        _ => Box::new(baseline::BaselineAI::new()),
    }
}

/// Kinds accepted by [`create_ai`] without falling back.
pub fn known_kinds() -> &'static [&'static str] {
    &["baseline", "random"]
}
