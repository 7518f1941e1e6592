//! Simulation command: a bots-only session.
//!
//! Every seat is an automated opponent of one kind. Each finished round is
//! appended to the JSONL output (when given) as a
//! [`RoundRecord`](parlor_engine::logger::RoundRecord), and a one-line
//! result is printed. Bots that run out of chips leave; the run stops early
//! when fewer than two remain.
//!
//! # Examples
//!
//! ```no_run
//! use parlor_cli::commands::sim::{handle_sim_command, SimOptions};
//! use parlor_cli::config::Config;
//! use parlor_engine::variant::Variant;
//! use std::io;
//!
//! let opts = SimOptions {
//!     game: Variant::SevenCardStud,
//!     bots: 4,
//!     rounds: 100,
//!     seed: Some(42),
//!     ai: None,
//!     output: Some("data/stud.jsonl".into()),
//! };
//! handle_sim_command(opts, &Config::default(), &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use std::io::Write;
use std::path::PathBuf;

use parlor_ai::{create_ai_seeded, known_kinds};
use parlor_engine::engine::Engine;
use parlor_engine::logger::RoundLogger;
use parlor_engine::player::Player;
use parlor_engine::variant::Variant;

use crate::config::Config;
use crate::console::Console;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub game: Variant,
    pub bots: usize,
    pub rounds: u64,
    pub seed: Option<u64>,
    /// Overrides the configured AI kind
    pub ai: Option<String>,
    pub output: Option<PathBuf>,
}

pub fn handle_sim_command(
    opts: SimOptions,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let max = opts.game.max_players();
    if opts.bots < 2 || opts.bots > max {
        let msg = format!("bots must be between 2 and {} for {}", max, opts.game);
        return Err(CliError::InvalidInput(msg));
    }
    let kind = opts.ai.clone().unwrap_or_else(|| cfg.ai.clone());
    if !known_kinds().contains(&kind.as_str()) {
        ui::display_warning(err, &format!("unknown AI kind '{}', using baseline", kind))?;
    }

    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut logger = match &opts.output {
        Some(path) => {
            ensure_parent_dir(path).map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            Some(RoundLogger::create(path)?)
        }
        None => None,
    };

    writeln!(
        out,
        "sim: game={} bots={} rounds={} seed={} ai={}",
        opts.game.short_name(),
        opts.bots,
        opts.rounds,
        seed,
        kind
    )?;

    let mut engine = Engine::new(opts.game, cfg.stakes(), Some(seed));
    let (mut sink_out, mut sink_err) = (std::io::sink(), std::io::sink());
    let mut bots = Console::bots_only(&mut sink_out, &mut sink_err);
    for i in 1..=opts.bots {
        let name = format!("bot{}", i);
        engine.add_player(Player::new(name.clone(), cfg.starting_chips))?;
        bots.add_bot(&name, create_ai_seeded(&kind, Some(seed.wrapping_add(i as u64))));
    }

    let mut played = 0u64;
    let mut aborted = 0u64;
    while played < opts.rounds {
        for name in engine.table().broke_players() {
            engine.remove_player(&name);
            bots.remove_bot(&name);
            writeln!(out, "{} is out of chips", name)?;
        }
        if engine.table().len() < 2 {
            writeln!(out, "Only one player left after {} rounds", played)?;
            break;
        }

        let started = engine.rounds_played();
        played += 1;
        match engine.play_round(&mut bots) {
            Ok(outcome) => {
                writeln!(out, "Round {}: {}", outcome.round, outcome.summary())?;
                if let Some(logger) = logger.as_mut() {
                    logger.log_outcome(Some(seed), &outcome)?;
                }
            }
            Err(e) if engine.rounds_played() > started => {
                aborted += 1;
                ui::display_warning(err, &format!("round {} aborted: {}", played, e))?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(out, "Rounds played: {}", played)?;
    if aborted > 0 {
        writeln!(out, "Rounds aborted: {}", aborted)?;
    }
    if let Some(path) = &opts.output {
        writeln!(out, "Round records: {}", path.display())?;
    }
    ui::write_standings(out, &engine.standings())?;
    Ok(())
}
