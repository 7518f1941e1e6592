//! Message helpers so every command reports errors and warnings the same way.

use std::io::Write;

use parlor_engine::controller::Standing;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Prints the standings table: one row per seat.
pub fn write_standings(out: &mut dyn Write, rows: &[Standing]) -> std::io::Result<()> {
    let width = rows
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("Player".len());
    writeln!(
        out,
        "{:<width$}  {:>4}  {:>6}  {:>5}  Hand",
        "Player", "Wins", "Losses", "Chips"
    )?;
    for r in rows {
        writeln!(
            out,
            "{:<width$}  {:>4}  {:>6}  {:>5}  {}",
            r.name, r.wins, r.losses, r.chips, r.hand
        )?;
    }
    Ok(())
}
