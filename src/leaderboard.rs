//! Persisted score leaderboard
//!
//! Plain-text file, one entry per line in the legacy format
//! `"<name>: <score> \n"`, descending by score. Read once at startup,
//! written once per game-ending transition. Names containing `:` or
//! newlines are not escaped - a known limitation of the format.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{info, warn};

use crate::error::GameError;

/// A single leaderboard row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    /// Best score ever achieved under this name
    pub score: u32,
}

/// Score table keyed by nickname, kept sorted descending by score
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in descending score order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn best_for(&self, name: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.score)
    }

    /// Fold a finished run into the table, keeping the per-name maximum.
    /// Returns true if the stored score changed.
    pub fn record(&mut self, name: &str, score: u32) -> bool {
        let changed = match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) if score > entry.score => {
                entry.score = score;
                true
            }
            Some(_) => false,
            None => {
                self.entries.push(LeaderboardEntry {
                    name: name.to_string(),
                    score,
                });
                true
            }
        };
        if changed {
            // stable sort: equal scores keep their existing order
            self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        }
        changed
    }

    /// Read the table from disk. A missing file is an empty leaderboard;
    /// blank or malformed lines are skipped with a warning instead of
    /// aborting the whole read.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("no leaderboard at {}, starting fresh", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(GameError::LeaderboardRead(e)),
        };

        let mut board = Self::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let parsed = line.split_once(':').and_then(|(name, score)| {
                score.trim().parse::<u32>().ok().map(|s| (name, s))
            });
            match parsed {
                Some((name, score)) => {
                    board.record(name, score);
                }
                None => warn!("skipping malformed leaderboard line: {line:?}"),
            }
        }
        info!(
            "loaded {} leaderboard entries from {}",
            board.entries.len(),
            path.display()
        );
        Ok(board)
    }

    /// Write the table to disk, highest score first.
    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        let mut out = Vec::new();
        for entry in &self.entries {
            writeln!(out, "{}: {} ", entry.name, entry.score)
                .map_err(GameError::LeaderboardWrite)?;
        }
        fs::write(path, out).map_err(GameError::LeaderboardWrite)?;
        info!(
            "saved {} leaderboard entries to {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }
}
