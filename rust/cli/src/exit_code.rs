//! Process exit codes.

use crate::error::CliError;

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, bad configuration, I/O, rule violations.
pub const ERROR: i32 = 2;

/// Interrupted by user (Ctrl+C) exit code.
pub const INTERRUPTED: i32 = 130;

pub fn for_error(e: &CliError) -> i32 {
    match e {
        CliError::Interrupted(_) => INTERRUPTED,
        _ => ERROR,
    }
}
