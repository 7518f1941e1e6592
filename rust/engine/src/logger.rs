use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::controller::ShowdownHand;
use crate::engine::RoundOutcome;
use crate::rules::ValidatedAction;
use crate::variant::Variant;

/// One validated action, tagged with the betting interval it happened in.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub player: String,
    /// 1-based betting interval within the round
    pub interval: usize,
    pub action: ValidatedAction,
}

/// Hands revealed at showdown and who took the pot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winners: Vec<String>,
    pub hands: Vec<ShowdownHand>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete record of one round, written as a JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Format: YYYYMMDD-NNNNNN
    pub round_id: String,
    pub variant: Variant,
    pub seed: Option<u64>,
    pub actions: Vec<ActionRecord>,
    pub community: Vec<Card>,
    pub result: Option<String>,
    /// RFC 3339, filled in on write when missing
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl RoundRecord {
    pub fn from_outcome(round_id: String, seed: Option<u64>, outcome: &RoundOutcome) -> Self {
        let showdown = outcome.went_to_showdown().then(|| ShowdownInfo {
            winners: outcome.winners.clone(),
            hands: outcome.showdown.clone(),
            notes: (outcome.winners.len() > 1).then(|| "split pot".to_string()),
        });
        Self {
            round_id,
            variant: outcome.variant,
            seed,
            actions: outcome.actions.clone(),
            community: outcome.community.clone(),
            result: Some(outcome.summary()),
            ts: None,
            showdown,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that numbers rounds under a fixed date and writes nowhere.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }

    /// Assigns the next id to `outcome` and writes it.
    pub fn log_outcome(&mut self, seed: Option<u64>, outcome: &RoundOutcome) -> std::io::Result<String> {
        let id = self.next_id();
        self.write(&RoundRecord::from_outcome(id.clone(), seed, outcome))?;
        Ok(id)
    }
}
