//! Command handlers, one module per subcommand.
//!
//! Each handler takes its output streams as `&mut dyn Write` (and the
//! input stream when it reads answers) and returns `Result<(), CliError>`.

pub mod cfg;
pub mod deck;
pub mod play;
pub mod rank;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deck::handle_deck_command;
pub use play::{handle_play_command, PlayOptions};
pub use rank::handle_rank_command;
pub use sim::{handle_sim_command, SimOptions};
