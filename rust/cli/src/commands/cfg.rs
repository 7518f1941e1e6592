//! Configuration command handler.
//!
//! Prints the resolved configuration as pretty JSON, each key with the
//! layer it came from:
//!
//! ```json
//! {
//!   "starting_chips": {
//!     "value": 20,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config::{self, ConfigResolved};
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    write_resolved(&resolved, out)
}

pub fn write_resolved(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_chips": { "value": config.starting_chips, "source": sources.starting_chips },
        "ante": { "value": config.ante, "source": sources.ante },
        "min_bet": { "value": config.min_bet, "source": sources.min_bet },
        "max_bet": { "value": config.max_bet, "source": sources.max_bet },
        "seed": { "value": config.seed, "source": sources.seed },
        "records_dir": { "value": config.records_dir, "source": sources.records_dir },
        "ai": { "value": config.ai, "source": sources.ai },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_with;

    #[test]
    fn test_cfg_writes_every_key_with_its_source() {
        let lookup = |key: &str| (key == "PARLOR_ANTE").then(|| "3".to_string());
        let resolved = load_with(lookup).unwrap();
        let mut out = Vec::new();
        write_resolved(&resolved, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        for key in [
            "starting_chips",
            "ante",
            "min_bet",
            "max_bet",
            "seed",
            "records_dir",
            "ai",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["ante"]["value"], 3);
        assert_eq!(json["ante"]["source"], "env");
        assert_eq!(json["seed"]["value"], serde_json::Value::Null);
        assert_eq!(json["ai"]["source"], "default");
        assert!(String::from_utf8(out).unwrap().contains("\n  "));
    }
}
