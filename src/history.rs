//! Append-only history log: one comma-separated record per resolved round, no header row.
//! Records end in `\r\n`, the line ending existing `data.csv` files already use.
//!
//! Column order: `hero_name, hero_weapon, hero_damage, villain_name, villain_weapon, villain_damage`.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::battle::{decide_winner, RoundResult, WeaponKind, Winner};

pub const DEFAULT_HISTORY_PATH: &str = "data.csv";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history log io error: {0}")]
    Io(#[from] io::Error),

    #[error("history log csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub hero_name: String,
    pub hero_weapon: WeaponKind,
    pub hero_damage: u32,
    pub villain_name: String,
    pub villain_weapon: WeaponKind,
    pub villain_damage: u32,
}

impl From<&RoundResult> for HistoryRecord {
    fn from(result: &RoundResult) -> Self {
        Self {
            hero_name: result.hero.name.clone(),
            hero_weapon: result.hero.weapon,
            hero_damage: result.hero_damage,
            villain_name: result.villain.name.clone(),
            villain_weapon: result.villain.weapon,
            villain_damage: result.villain_damage,
        }
    }
}

impl HistoryRecord {
    pub fn winner(&self) -> Winner {
        decide_winner(
            &self.hero_name,
            self.hero_damage,
            &self.villain_name,
            self.villain_damage,
        )
    }
}

/// Where resolved rounds are recorded.
pub trait HistorySink {
    fn append(&mut self, record: &HistoryRecord) -> Result<(), HistoryError>;
}

/// File-backed log. The file is opened in append mode (and created if absent) for each
/// write, so nothing is held open between rounds.
#[derive(Debug, Clone)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistorySink for FileHistory {
    fn append(&mut self, record: &HistoryRecord) -> Result<(), HistoryError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write_record(file, record)?;
        tracing::debug!(path = %self.path.display(), hero = %record.hero_name, villain = %record.villain_name, "history record appended");
        Ok(())
    }
}

/// In-memory log, for sessions that should not touch disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    pub records: Vec<HistoryRecord>,
}

impl HistorySink for MemoryHistory {
    fn append(&mut self, record: &HistoryRecord) -> Result<(), HistoryError> {
        self.records.push(record.clone());
        Ok(())
    }
}

fn record_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer)
}

fn write_record<W: Write>(writer: W, record: &HistoryRecord) -> Result<(), HistoryError> {
    let mut csv_writer = record_writer(writer);
    csv_writer.serialize(record)?;
    csv_writer.flush()?;
    Ok(())
}

/// The exact line (with trailing newline) that would be appended for `record`.
pub fn format_record(record: &HistoryRecord) -> Result<String, HistoryError> {
    let mut buffer = Vec::new();
    write_record(&mut buffer, record)?;
    String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err).into())
}

/// Reads every record back. A missing file is an empty history.
pub fn read_history(path: impl AsRef<Path>) -> Result<Vec<HistoryRecord>, HistoryError> {
    let file = match File::open(path.as_ref()) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(file);
    reader
        .deserialize()
        .collect::<Result<Vec<HistoryRecord>, csv::Error>>()
        .map_err(HistoryError::from)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HistorySummary {
    pub rounds: u32,
    pub ties: u32,
    pub wins_by_name: BTreeMap<String, u32>,
}

pub fn summarize(records: &[HistoryRecord]) -> HistorySummary {
    let mut summary = HistorySummary::default();
    for record in records {
        summary.rounds += 1;
        match record.winner() {
            Winner::Hero(name) | Winner::Villain(name) => {
                *summary.wins_by_name.entry(name).or_insert(0) += 1;
            }
            Winner::Tie => summary.ties += 1,
        }
    }
    summary
}
