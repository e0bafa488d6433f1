//! One leaderboard partition
//!
//! Entries are kept sorted descending by score and capped at
//! [`RETENTION_CAP`]. Equal scores keep submission order, so the earlier
//! submission ranks higher.

use serde::{Deserialize, Serialize};

use crate::consts::RETENTION_CAP;

/// A single submitted score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub username: String,
    pub score: i64,
    /// Unix timestamp (ms) of the submission
    pub submitted_at: i64,
}

/// A retained entry annotated with its 1-based rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub username: String,
    pub score: i64,
    pub timestamp: i64,
}

/// Sorted, bounded collection of scores for one difficulty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rebuild from arbitrary entries, restoring order and the cap.
    ///
    /// Input order breaks ties.
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        // stable sort keeps input order among equal scores
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(RETENTION_CAP);
        Self { entries }
    }

    /// Insert a score in order and drop whatever falls past the cap.
    ///
    /// Returns the rank achieved (1-indexed), or `None` if the entry was
    /// discarded straight away.
    pub fn insert(&mut self, entry: ScoreEntry) -> Option<usize> {
        // after every entry with an equal or higher score
        let pos = self.entries.partition_point(|e| e.score >= entry.score);
        if pos >= RETENTION_CAP {
            return None;
        }
        self.entries.insert(pos, entry);
        self.entries.truncate(RETENTION_CAP);
        Some(pos + 1)
    }

    /// Up to `n` best entries with their rank in the full collection
    pub fn top(&self, n: usize) -> Vec<RankedEntry> {
        self.entries
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, e)| RankedEntry {
                rank: i + 1,
                username: e.username.clone(),
                score: e.score,
                timestamp: e.submitted_at,
            })
            .collect()
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<i64> {
        self.entries.first().map(|e| e.score)
    }
}
