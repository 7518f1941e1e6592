//! # Play Command
//!
//! A hot-seat session at the console. Humans named with `--players` answer
//! prompts on the input stream; `--bots N` adds automated seats.
//!
//! Before every round the session resolves players without chips (reset or
//! leave). Between rounds, when a human is seated, it asks who leaves and
//! who joins. Typing `q` (or closing the input) ends the session once the
//! current round is over; decisions still owed in that round are passive.
//!
//! Human records are loaded from the records directory when a player sits
//! down and written back when they leave and when the session ends.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use parlor_ai::{create_ai_seeded, known_kinds};
use parlor_engine::engine::Engine;
use parlor_engine::logger::RoundLogger;
use parlor_engine::player::Player;
use parlor_engine::records::PlayerRecord;
use parlor_engine::variant::Variant;

use crate::config::Config;
use crate::console::Console;
use crate::error::CliError;
use crate::ui;
use crate::validation::parse_names;

#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub game: Variant,
    pub players: Vec<String>,
    pub bots: usize,
    /// `None` plays until everyone quits or the table breaks up
    pub rounds: Option<u64>,
    pub seed: Option<u64>,
    pub log: Option<PathBuf>,
    pub records_dir: Option<PathBuf>,
}

/// Handle the play command.
///
/// # Errors
///
/// `InvalidInput` for `--rounds 0`, fewer than two seats, or an unusable
/// name on the command line; `Engine` when the table refuses the seating;
/// `Io` when the round log cannot be opened or output cannot be written.
pub fn handle_play_command(
    opts: PlayOptions,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if opts.rounds == Some(0) {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let records_dir = opts
        .records_dir
        .clone()
        .unwrap_or_else(|| cfg.records_dir.clone());

    writeln!(
        out,
        "play: game={} seed={}",
        opts.game.short_name(),
        seed
    )?;
    let stakes = cfg.stakes();
    writeln!(
        out,
        "Ante {}, bets {}-{}",
        stakes.ante, stakes.min_bet, stakes.max_bet
    )?;

    let mut logger = match &opts.log {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    let mut engine = Engine::new(opts.game, stakes, Some(seed));
    let mut names = opts.players.clone();
    if names.is_empty() && opts.bots == 0 {
        write!(out, "Player names (comma separated): ")?;
        out.flush()?;
        if let Some(line) = crate::io_utils::read_stdin_line(stdin) {
            names = parse_names(&line);
        }
    }
    if names.len() + opts.bots < 2 {
        return Err(CliError::InvalidInput(
            "at least two players are needed".to_string(),
        ));
    }

    if !known_kinds().contains(&cfg.ai.as_str()) {
        ui::display_warning(
            err,
            &format!("unknown AI kind '{}', using baseline", cfg.ai),
        )?;
    }

    let mut console = Console::new(stdin, out, err);
    for name in &names {
        seat_human(&mut engine, &mut console, name, cfg, &records_dir)?;
    }
    for i in 0..opts.bots {
        let name = free_bot_name(&engine);
        let ai = create_ai_seeded(&cfg.ai, Some(seed.wrapping_add(i as u64 + 1)));
        engine.add_player(Player::new(name.clone(), cfg.starting_chips))?;
        console.add_bot(&name, ai);
    }

    let mut played = 0u64;
    loop {
        if opts.rounds.is_some_and(|max| played >= max) {
            break;
        }
        if played > 0 && has_human(&engine, &console) {
            between_rounds(&mut engine, &mut console, cfg, &records_dir);
        }
        resolve_broke(&mut engine, &mut console, cfg, &records_dir);
        if engine.table().len() < 2 {
            console.say("Not enough players to continue.");
            break;
        }

        let started = engine.rounds_played();
        match engine.play_round(&mut console) {
            Ok(outcome) => {
                console.say(&format!("Result: {}", outcome.summary()));
                if let Some(logger) = logger.as_mut() {
                    logger.log_outcome(Some(seed), &outcome)?;
                }
            }
            Err(e) if engine.rounds_played() > started => {
                tracing::warn!(error = %e, "round aborted");
            }
            Err(e) => return Err(e.into()),
        }
        played += 1;
        print_standings(&mut console, &engine);

        if let Some(e) = console.take_io_error() {
            return Err(e.into());
        }
        if console.quit_requested() {
            break;
        }
    }

    for player in engine.table().players() {
        if !console.is_bot(player.name()) {
            save_record(&mut console, player, &records_dir);
        }
    }
    console.say(&format!("Rounds played: {}", played));
    if let Some(e) = console.take_io_error() {
        return Err(e.into());
    }
    Ok(())
}

fn has_human(engine: &Engine, console: &Console<'_>) -> bool {
    engine
        .table()
        .players()
        .iter()
        .any(|p| !console.is_bot(p.name()))
}

fn free_bot_name(engine: &Engine) -> String {
    (1..)
        .map(|n| format!("bot{}", n))
        .find(|name| engine.table().check_name(name).is_ok())
        .unwrap_or_else(|| "bot".to_string())
}

/// Seats a human, restoring their record when one exists.
fn seat_human(
    engine: &mut Engine,
    console: &mut Console<'_>,
    name: &str,
    cfg: &Config,
    records_dir: &Path,
) -> Result<(), parlor_engine::errors::GameError> {
    // Validate first so a bad name never reaches the filesystem.
    engine.table().check_name(name)?;
    let player = match PlayerRecord::load(records_dir, name) {
        Ok(Some(record)) => {
            console.say(&format!(
                "Welcome back, {} ({} wins, {} losses, {} chips)",
                record.name, record.wins, record.losses, record.chips
            ));
            record.into_player()
        }
        Ok(None) => Player::new(name, cfg.starting_chips),
        Err(e) => {
            tracing::warn!(player = name, error = %e, "unreadable player record");
            console.say(&format!("Could not read the record for {}, starting fresh", name));
            Player::new(name, cfg.starting_chips)
        }
    };
    engine.add_player(player)?;
    Ok(())
}

fn save_record(console: &mut Console<'_>, player: &Player, records_dir: &Path) {
    if let Err(e) = PlayerRecord::of(player).save(records_dir) {
        tracing::warn!(player = player.name(), error = %e, "record not saved");
        console.say(&format!(
            "WARNING: could not save the record for {}: {}",
            player.name(),
            e
        ));
    }
}

fn unseat(engine: &mut Engine, console: &mut Console<'_>, name: &str, records_dir: &Path) {
    let Some(player) = engine.remove_player(name) else {
        console.say(&format!("No player named {}", name));
        return;
    };
    if !console.remove_bot(player.name()) {
        save_record(console, &player, records_dir);
    }
    console.say(&format!("{} leaves the table with {} chips", player.name(), player.chips()));
}

fn between_rounds(engine: &mut Engine, console: &mut Console<'_>, cfg: &Config, records_dir: &Path) {
    if let Some(line) = console.ask("Anyone leaving? (names, blank for none): ") {
        for name in parse_names(&line) {
            unseat(engine, console, &name, records_dir);
        }
    }
    if let Some(line) = console.ask("Anyone joining? (names, blank for none): ") {
        for name in parse_names(&line) {
            match seat_human(engine, console, &name, cfg, records_dir) {
                Ok(()) => console.say(&format!("{} joins the table", name)),
                Err(e) => console.say(&format!("Cannot seat {}: {}", name, e)),
            }
        }
    }
}

/// Every player without chips resets to the starting stack or leaves.
/// Bots and players who can no longer answer leave.
fn resolve_broke(engine: &mut Engine, console: &mut Console<'_>, cfg: &Config, records_dir: &Path) {
    for name in engine.table().broke_players() {
        let reset = if console.is_bot(&name) {
            false
        } else {
            let question = format!(
                "{} has no chips. (r)eset to {} or (l)eave? ",
                name, cfg.starting_chips
            );
            loop {
                match console.ask(&question).map(|a| a.to_lowercase()) {
                    Some(a) if a == "r" || a == "reset" => break true,
                    Some(a) if a == "l" || a == "leave" => break false,
                    Some(_) => continue,
                    None => break false,
                }
            }
        };
        if reset {
            if let Some(seat) = engine.table().find_player(&name) {
                engine.table_mut().players_mut()[seat].set_chips(cfg.starting_chips);
                console.say(&format!("{} starts over with {} chips", name, cfg.starting_chips));
            }
        } else {
            unseat(engine, console, &name, records_dir);
        }
    }
}

fn print_standings(console: &mut Console<'_>, engine: &Engine) {
    let mut buf = Vec::new();
    if ui::write_standings(&mut buf, &engine.standings()).is_ok() {
        console.say(String::from_utf8_lossy(&buf).trim_end());
    }
}
