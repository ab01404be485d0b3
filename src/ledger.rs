//! The on-disk score ledger: a line-oriented text file holding one
//! cumulative total per player name.
//!
//! Line format: `YYYY-MM-DD HH:MM - Player: <name> - Score: <total>`.
//! Recording a result reads the whole file, merges the delta into the
//! player's total, and rewrites every line with a fresh timestamp.
//! Malformed lines are dropped (and counted) rather than aborting the
//! read.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::persistence;

pub const SCORES_FILE: &str = "scores.txt";

/// Parsed ledger contents: per-name totals plus how many lines were
/// skipped as unparseable (surfaced in the menu, never fatal).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub totals: BTreeMap<String, u32>,
    pub skipped_lines: usize,
}

impl LedgerSnapshot {
    /// Totals sorted best-first, ties broken by name.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut rows: Vec<(&str, u32)> = self
            .totals
            .iter()
            .map(|(name, &total)| (name.as_str(), total))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        rows
    }
}

/// Handle on the ledger file. Cheap to construct; every operation opens
/// the file fresh, so concurrent sessions see each other's writes.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store rooted at `~/.scamper/scores.txt`.
    pub fn open_default() -> io::Result<Self> {
        Ok(Self::new(persistence::data_path(SCORES_FILE)?))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read and parse the ledger. A missing file is an empty ledger. When
    /// a name appears on several lines the later line wins.
    pub fn load(&self) -> io::Result<LedgerSnapshot> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LedgerSnapshot::default()),
            Err(e) => return Err(e),
        };

        let mut snapshot = LedgerSnapshot::default();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Some((name, total)) => {
                    snapshot.totals.insert(name, total);
                }
                None => snapshot.skipped_lines += 1,
            }
        }
        Ok(snapshot)
    }

    /// Add `delta` to `name`'s total and rewrite the whole file. Returns
    /// the player's new total.
    pub fn record(&self, name: &str, delta: u32) -> io::Result<u32> {
        let mut snapshot = self.load()?;
        let total = snapshot.totals.entry(name.to_string()).or_insert(0);
        *total = total.saturating_add(delta);
        let new_total = *total;

        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M");
        let mut out = String::new();
        for (player, score) in &snapshot.totals {
            out.push_str(&format!(
                "{} - Player: {} - Score: {}\n",
                stamp, player, score
            ));
        }
        fs::write(&self.path, out)?;
        Ok(new_total)
    }
}

fn parse_line(line: &str) -> Option<(String, u32)> {
    let (_stamp, rest) = line.split_once(" - Player: ")?;
    let (name, score) = rest.split_once(" - Score: ")?;
    if name.is_empty() {
        return None;
    }
    let total: u32 = score.trim().parse().ok()?;
    Some((name.to_string(), total))
}
