//! # parlor CLI Library
//!
//! The command-line front end of the parlor poker engine: hot-seat play,
//! bots-only simulation, and small inspection tools.
//!
//! The entry points are [`run`], which reads answers from the process
//! stdin, and [`run_with_input`], which takes any buffered reader so whole
//! sessions can be scripted.
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = parlor_cli::run_with_input(
//!     ["parlor", "rank", "--cards", "Ah Kh Qh Jh 10h"],
//!     &mut out,
//!     &mut err,
//!     &mut Cursor::new(""),
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Straight flush"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: hot-seat session, humans on stdin plus optional bots
//! - `sim`: bots-only session with JSONL round records
//! - `rank`: rank a five-card hand or the best five of seven
//! - `deck`: load a deck file and check it
//! - `cfg`: display the resolved configuration

use std::io::{BufRead, Write};

use clap::Parser;

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, ParlorCli};
use commands::{
    handle_cfg_command, handle_deck_command, handle_play_command, handle_rank_command,
    handle_sim_command, PlayOptions, SimOptions,
};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "rank", "deck", "cfg"];

/// Main entry point: parses `args`, runs the subcommand, returns the exit code.
///
/// Interactive answers are read from the process stdin.
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Like [`run`], reading interactive answers from `input`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ParlorCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    match dispatch(cli.cmd, out, err, input) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::for_error(&e)
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }
    if writeln!(err, "{}", e).is_err()
        || writeln!(err, "Usage: parlor <command> [options]\n").is_err()
        || writeln!(err, "Commands:").is_err()
    {
        return exit_code::ERROR;
    }
    for c in COMMANDS {
        if writeln!(err, "  {}", c).is_err() {
            return exit_code::ERROR;
        }
    }
    let _ = writeln!(err, "\nFor full help, run: parlor --help");
    exit_code::ERROR
}

fn dispatch(
    cmd: Commands,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Rank { cards } => handle_rank_command(&cards, out),
        Commands::Deck {
            file,
            shuffle,
            seed,
        } => handle_deck_command(&file, shuffle, seed, out, err),
        Commands::Play {
            game,
            players,
            bots,
            rounds,
            seed,
            log,
            records_dir,
        } => {
            let cfg = config::load()?;
            let opts = PlayOptions {
                game: game.into(),
                players,
                bots,
                rounds,
                seed,
                log,
                records_dir,
            };
            handle_play_command(opts, &cfg, out, err, input)
        }
        Commands::Sim {
            game,
            bots,
            rounds,
            seed,
            ai,
            output,
        } => {
            let cfg = config::load()?;
            let opts = SimOptions {
                game: game.into(),
                bots,
                rounds,
                seed,
                ai,
                output,
            };
            handle_sim_command(opts, &cfg, out, err)
        }
    }
}
