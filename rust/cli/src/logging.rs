//! Diagnostic logging for the `parlor` binary.
//!
//! Engine and CLI code emit `tracing` events; only `main` installs a
//! subscriber. Output goes to stderr so it never mixes with game output.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Filter directives from `PARLOR_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
pub fn filter_directives<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ["PARLOR_LOG", "RUST_LOG"]
        .iter()
        .filter_map(|key| lookup(key))
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Installs the global fmt subscriber. Calling it twice is harmless.
pub fn init_logging() {
    let directives = filter_directives(|key| std::env::var(key).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_ok() {
        tracing::debug!(filter = %directives, "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parlor_log_wins_over_rust_log() {
        let lookup = |key: &str| match key {
            "PARLOR_LOG" => Some("debug".to_string()),
            "RUST_LOG" => Some("info".to_string()),
            _ => None,
        };
        assert_eq!(filter_directives(lookup), "debug");
    }

    #[test]
    fn blank_values_fall_through() {
        let lookup = |key: &str| match key {
            "PARLOR_LOG" => Some("  ".to_string()),
            "RUST_LOG" => Some("parlor_engine=debug".to_string()),
            _ => None,
        };
        assert_eq!(filter_directives(lookup), "parlor_engine=debug");
        assert_eq!(filter_directives(|_| None), DEFAULT_FILTER);
    }
}
