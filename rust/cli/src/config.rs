//! Layered settings: built-in defaults, then a TOML file named by
//! `PARLOR_CONFIG`, then `PARLOR_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use parlor_engine::player::STARTING_CHIPS;
use parlor_engine::rules::Stakes;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_chips: u64,
    pub ante: u64,
    pub min_bet: u64,
    pub max_bet: u64,
    pub seed: Option<u64>,
    pub records_dir: PathBuf,
    pub ai: String,
}

impl Config {
    pub fn stakes(&self) -> Stakes {
        Stakes {
            ante: self.ante,
            min_bet: self.min_bet,
            max_bet: self.max_bet,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let stakes = Stakes::default();
        Self {
            starting_chips: STARTING_CHIPS,
            ante: stakes.ante,
            min_bet: stakes.min_bet,
            max_bet: stakes.max_bet,
            seed: None,
            records_dir: PathBuf::from("players"),
            ai: "baseline".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_chips: ValueSource,
    pub ante: ValueSource,
    pub min_bet: ValueSource,
    pub max_bet: ValueSource,
    pub seed: ValueSource,
    pub records_dir: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            ante: ValueSource::Default,
            min_bet: ValueSource::Default,
            max_bet: ValueSource::Default,
            seed: ValueSource::Default,
            records_dir: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with(|key| std::env::var(key).ok())
}

/// Resolves the configuration with `lookup` standing in for the process
/// environment. Empty values count as unset.
pub fn load_with<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = var("PARLOR_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.ante {
            cfg.ante = v;
            sources.ante = ValueSource::File;
        }
        if let Some(v) = f.min_bet {
            cfg.min_bet = v;
            sources.min_bet = ValueSource::File;
        }
        if let Some(v) = f.max_bet {
            cfg.max_bet = v;
            sources.max_bet = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.records_dir {
            cfg.records_dir = v;
            sources.records_dir = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(v) = var("PARLOR_STARTING_CHIPS") {
        cfg.starting_chips = parse_number(&v, "starting_chips")?;
        sources.starting_chips = ValueSource::Env;
    }
    if let Some(v) = var("PARLOR_ANTE") {
        cfg.ante = parse_number(&v, "ante")?;
        sources.ante = ValueSource::Env;
    }
    if let Some(v) = var("PARLOR_MIN_BET") {
        cfg.min_bet = parse_number(&v, "min_bet")?;
        sources.min_bet = ValueSource::Env;
    }
    if let Some(v) = var("PARLOR_MAX_BET") {
        cfg.max_bet = parse_number(&v, "max_bet")?;
        sources.max_bet = ValueSource::Env;
    }
    if let Some(v) = var("PARLOR_SEED") {
        cfg.seed = Some(parse_number(&v, "seed")?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = var("PARLOR_RECORDS_DIR") {
        cfg.records_dir = PathBuf::from(v);
        sources.records_dir = ValueSource::Env;
    }
    if let Some(v) = var("PARLOR_AI") {
        cfg.ai = v.trim().to_string();
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_chips: Option<u64>,
    #[serde(default)]
    ante: Option<u64>,
    #[serde(default)]
    min_bet: Option<u64>,
    #[serde(default)]
    max_bet: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    records_dir: Option<PathBuf>,
    #[serde(default)]
    ai: Option<String>,
}

fn parse_number(value: &str, key: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", key, value)))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_chips == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_chips must be >0".into(),
        ));
    }
    if cfg.min_bet == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_bet must be >=1".into(),
        ));
    }
    if cfg.max_bet < cfg.min_bet {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_bet must be >= min_bet".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_classic_table() {
        let resolved = load_with(env(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.config.stakes(), Stakes::default());
        assert_eq!(resolved.config.starting_chips, 20);
        assert_eq!(resolved.sources.ai, ValueSource::Default);
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parlor.toml");
        fs::write(&path, "ante = 2\nmax_bet = 6\nai = \"random\"\n").unwrap();
        let path = path.to_string_lossy().to_string();

        let resolved = load_with(env(&[
            ("PARLOR_CONFIG", path.as_str()),
            ("PARLOR_MAX_BET", "4"),
            ("PARLOR_SEED", "99"),
        ]))
        .unwrap();
        let c = &resolved.config;
        assert_eq!((c.ante, c.min_bet, c.max_bet), (2, 1, 4));
        assert_eq!(c.seed, Some(99));
        assert_eq!(c.ai, "random");
        assert_eq!(resolved.sources.ante, ValueSource::File);
        assert_eq!(resolved.sources.max_bet, ValueSource::Env);
        assert_eq!(resolved.sources.min_bet, ValueSource::Default);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            load_with(env(&[("PARLOR_ANTE", "lots")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(load_with(env(&[("PARLOR_STARTING_CHIPS", "0")])).is_err());
        assert!(load_with(env(&[("PARLOR_MIN_BET", "0")])).is_err());
        assert!(load_with(env(&[("PARLOR_MIN_BET", "3"), ("PARLOR_MAX_BET", "2")])).is_err());
    }

    #[test]
    fn unreadable_or_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml").to_string_lossy().to_string();
        assert!(matches!(
            load_with(env(&[("PARLOR_CONFIG", missing.as_str())])),
            Err(ConfigError::Io(_))
        ));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "ante = \"one\"\n").unwrap();
        let bad = bad.to_string_lossy().to_string();
        assert!(matches!(
            load_with(env(&[("PARLOR_CONFIG", bad.as_str())])),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let resolved = load_with(env(&[("PARLOR_SEED", ""), ("PARLOR_AI", " ")])).unwrap();
        assert_eq!(resolved.config.seed, None);
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }
}
