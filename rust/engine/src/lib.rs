//! # parlor-engine: Poker Round Engine
//!
//! Plays Five Card Draw, Seven Card Stud and Texas Hold'em rounds for a
//! table of players: hand ranking with best-5-of-7 selection, a betting
//! interval state machine, and one generic round orchestrator driven by
//! per-variant deal plans.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and token parsing
//! - [`deck`] - Ordered card pile with seeded ChaCha shuffling and file loading
//! - [`hand`] - Hand ranking, tie-breaks and best-subset search
//! - [`player`] - Player state and actions
//! - [`rules`] - Stakes, action options and action validation
//! - [`betting`] - Betting interval state machine, ante and pot division
//! - [`variant`] - Deal plans and scoring per game variant
//! - [`controller`] - Decision and display seam used by the orchestrator
//! - [`game`] - Seating, name rules and dealer rotation
//! - [`engine`] - Round orchestration
//! - [`logger`] - RoundRecord JSONL output
//! - [`records`] - Per-player record files
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use parlor_engine::hand::{Category, Hand};
//!
//! let seven = Hand::parse("2c 2d 3h 3s 4c 4d 5h").unwrap();
//! let (best, category) = seven.best_subset().unwrap();
//! assert_eq!(category, Category::TwoPair);
//! assert_eq!(best.len(), 5);
//! ```
//!
//! ## Validating actions
//!
//! ```rust
//! use parlor_engine::player::PlayerAction;
//! use parlor_engine::rules::{validate_action, ActionOptions, Stakes};
//!
//! let opening = ActionOptions::compute(None, 0, 20, &Stakes::default());
//! assert!(validate_action(&opening, PlayerAction::Bet(2)).is_ok());
//! assert!(validate_action(&opening, PlayerAction::Bet(3)).is_err());
//! ```

pub mod betting;
pub mod cards;
pub mod controller;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod records;
pub mod rules;
pub mod variant;
