//! Per-player record files: `<dir>/<name>` holding four lines
//! (name, wins, losses, chips).

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::player::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub chips: u64,
}

impl PlayerRecord {
    pub fn of(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            wins: player.wins(),
            losses: player.losses(),
            chips: player.chips(),
        }
    }

    pub fn into_player(self) -> Player {
        Player::with_record(self.name, self.wins, self.losses, self.chips)
    }

    pub fn path(dir: &Path, name: &str) -> PathBuf {
        dir.join(name)
    }

    /// Reads `<dir>/<name>`; `Ok(None)` when no file exists yet.
    pub fn load(dir: &Path, name: &str) -> io::Result<Option<Self>> {
        let text = match fs::read_to_string(Self::path(dir, name)) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        Self::parse(&text).map(Some)
    }

    pub fn parse(text: &str) -> io::Result<Self> {
        let mut lines = text.lines().map(str::trim);
        let mut next = |what: &str| {
            lines
                .next()
                .filter(|l| !l.is_empty())
                .ok_or_else(|| invalid(format!("record is missing the {} line", what)))
        };
        let name = next("name")?.to_string();
        let wins = next("wins")?;
        let losses = next("losses")?;
        let chips = next("chips")?;
        Ok(Self {
            name,
            wins: wins.parse().map_err(|_| invalid(format!("bad wins: {wins}")))?,
            losses: losses
                .parse()
                .map_err(|_| invalid(format!("bad losses: {losses}")))?,
            chips: chips.parse().map_err(|_| invalid(format!("bad chips: {chips}")))?,
        })
    }

    /// Overwrites `<dir>/<name>`, creating `dir` if needed.
    pub fn save(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)?;
        let body = format!(
            "{}\n{}\n{}\n{}\n",
            self.name, self.wins, self.losses, self.chips
        );
        fs::write(Self::path(dir, &self.name), body)
    }
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, msg)
}
