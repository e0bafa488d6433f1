//! Per-difficulty leaderboard store
//!
//! One [`Leaderboard`] per difficulty, each behind its own lock so a submit
//! (insert, sort, truncate) is applied as one step and partitions never
//! contend with each other. Readers see the state before or after a write,
//! never in between.

pub mod board;
pub mod wire;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

pub use board::{Leaderboard, RankedEntry, ScoreEntry};
pub use wire::{ErrorBody, SubmitRequest, SubmitResponse};

use crate::consts::DISPLAY_TOP;
use crate::difficulty::Difficulty;
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct RankingStore {
    partitions: [Mutex<Leaderboard>; 3],
}

impl RankingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score stamped with the current time and return the
    /// refreshed top [`DISPLAY_TOP`] view.
    pub fn submit(
        &self,
        difficulty: Difficulty,
        username: &str,
        score: f64,
    ) -> Result<Vec<RankedEntry>> {
        self.submit_at(difficulty, username, score, crate::now_millis())
    }

    /// [`submit`](Self::submit) with an explicit timestamp
    pub fn submit_at(
        &self,
        difficulty: Difficulty,
        username: &str,
        score: f64,
        submitted_at: i64,
    ) -> Result<Vec<RankedEntry>> {
        let score = validate(username, score)?;
        let mut board = self.lock(difficulty)?;
        let rank = board.insert(ScoreEntry {
            username: username.to_string(),
            score,
            submitted_at,
        });
        match rank {
            Some(rank) => log::info!("{difficulty}: {username} scored {score}, rank {rank}"),
            None => log::info!("{difficulty}: {username} scored {score}, not retained"),
        }
        Ok(board.top(DISPLAY_TOP))
    }

    /// Parse a raw request and submit it
    pub fn submit_request(&self, req: &SubmitRequest) -> Result<(Difficulty, Vec<RankedEntry>)> {
        let difficulty: Difficulty = req.difficulty.parse()?;
        let ranking = self.submit(difficulty, &req.username, req.score)?;
        Ok((difficulty, ranking))
    }

    /// Up to `n` best entries of one partition, ranked 1..
    pub fn top_n(&self, difficulty: Difficulty, n: usize) -> Result<Vec<RankedEntry>> {
        Ok(self.lock(difficulty)?.top(n))
    }

    /// Number of retained entries in one partition
    pub fn len(&self, difficulty: Difficulty) -> Result<usize> {
        Ok(self.lock(difficulty)?.len())
    }

    /// Copy of every partition
    pub fn snapshot(&self) -> Result<RankingSnapshot> {
        Ok(RankingSnapshot {
            low: self.lock(Difficulty::Low)?.entries().to_vec(),
            medium: self.lock(Difficulty::Medium)?.entries().to_vec(),
            high: self.lock(Difficulty::High)?.entries().to_vec(),
        })
    }

    pub fn from_snapshot(snapshot: RankingSnapshot) -> Self {
        Self {
            partitions: [
                Mutex::new(Leaderboard::from_entries(snapshot.low)),
                Mutex::new(Leaderboard::from_entries(snapshot.medium)),
                Mutex::new(Leaderboard::from_entries(snapshot.high)),
            ],
        }
    }

    /// Load a snapshot file; a missing file yields an empty store
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No rankings at {}, starting fresh", path.display());
            return Ok(Self::new());
        }
        let json = std::fs::read_to_string(path)?;
        let snapshot: RankingSnapshot = serde_json::from_str(&json)?;
        let store = Self::from_snapshot(snapshot);
        log::info!("Loaded rankings from {}", path.display());
        Ok(store)
    }

    /// Write every partition to a snapshot file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.snapshot()?)?;
        std::fs::write(path, json)?;
        log::info!("Rankings saved to {}", path.display());
        Ok(())
    }

    fn lock(&self, difficulty: Difficulty) -> Result<MutexGuard<'_, Leaderboard>> {
        self.partitions[difficulty.index()]
            .lock()
            .map_err(|e| Error::unexpected(format!("{difficulty} partition lock poisoned: {e}")))
    }
}

/// Serialized form of the whole store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSnapshot {
    #[serde(default)]
    pub low: Vec<ScoreEntry>,
    #[serde(default)]
    pub medium: Vec<ScoreEntry>,
    #[serde(default)]
    pub high: Vec<ScoreEntry>,
}

fn validate(username: &str, score: f64) -> Result<i64> {
    if username.is_empty() {
        return Err(Error::invalid("username must not be empty"));
    }
    if !score.is_finite() {
        return Err(Error::invalid("score must be a finite number"));
    }
    if score.fract() != 0.0 || score.abs() >= i64::MAX as f64 {
        return Err(Error::invalid("score must be a whole number"));
    }
    Ok(score as i64)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::consts::RETENTION_CAP;

    #[test]
    fn test_submit_and_rank() {
        let store = RankingStore::new();
        for score in [50.0, 80.0, 30.0, 95.0, 10.0] {
            store.submit(Difficulty::Medium, "p", score).unwrap();
        }
        let top: Vec<(usize, i64)> = store
            .top_n(Difficulty::Medium, 10)
            .unwrap()
            .iter()
            .map(|e| (e.rank, e.score))
            .collect();
        assert_eq!(top, vec![(1, 95), (2, 80), (3, 50), (4, 30), (5, 10)]);
    }

    #[test]
    fn test_partitions_are_independent() {
        let store = RankingStore::new();
        store.submit(Difficulty::High, "a", 10.0).unwrap();
        assert!(store.top_n(Difficulty::Low, 10).unwrap().is_empty());
        assert!(store.top_n(Difficulty::Medium, 10).unwrap().is_empty());
        assert_eq!(store.len(Difficulty::High).unwrap(), 1);
    }

    #[test]
    fn test_submit_returns_display_view() {
        let store = RankingStore::new();
        let mut last = Vec::new();
        for score in 0..25 {
            last = store.submit(Difficulty::Low, "p", score as f64).unwrap();
        }
        assert_eq!(last.len(), DISPLAY_TOP);
        assert_eq!(last[0].score, 24);
        assert_eq!(last[9].rank, 10);
    }

    #[test]
    fn test_rejects_bad_input() {
        let store = RankingStore::new();
        for (name, score) in [
            ("", 5.0),
            ("a", f64::NAN),
            ("a", f64::INFINITY),
            ("a", 2.5),
            ("a", 9_223_372_036_854_775_808.0),
            ("a", -9_223_372_036_854_775_808.0),
        ] {
            let err = store.submit(Difficulty::Low, name, score).unwrap_err();
            assert!(err.is_invalid_argument());
        }
        assert_eq!(store.len(Difficulty::Low).unwrap(), 0);
    }

    #[test]
    fn test_submit_request_bad_difficulty() {
        let store = RankingStore::new();
        let req = SubmitRequest {
            username: "a".into(),
            difficulty: "easy".into(),
            score: 3.0,
        };
        assert!(store.submit_request(&req).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_negative_scores_allowed() {
        let store = RankingStore::new();
        store.submit(Difficulty::Low, "a", -5.0).unwrap();
        store.submit(Difficulty::Low, "b", 0.0).unwrap();
        let top = store.top_n(Difficulty::Low, 10).unwrap();
        assert_eq!(top[0].username, "b");
        assert_eq!(top[1].score, -5);
    }

    #[test]
    fn test_retention_over_105() {
        let store = RankingStore::new();
        for score in 1..=105 {
            store.submit(Difficulty::High, "p", score as f64).unwrap();
        }
        let all = store.top_n(Difficulty::High, usize::MAX).unwrap();
        assert_eq!(all.len(), RETENTION_CAP);
        assert!(all.iter().all(|e| e.score > 5));
    }

    #[test]
    fn test_concurrent_submits_not_lost() {
        let store = Arc::new(RankingStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..10 {
                        store.submit(Difficulty::Medium, "t", (t * 10 + i) as f64).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.len(Difficulty::Medium).unwrap(), 80);
        let top = store.top_n(Difficulty::Medium, 1).unwrap();
        assert_eq!(top[0].score, 79);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rankings.json");

        let store = RankingStore::new();
        store.submit_at(Difficulty::Medium, "a", 10.0, 1).unwrap();
        store.submit_at(Difficulty::Medium, "b", 10.0, 2).unwrap();
        store.submit_at(Difficulty::High, "c", 3.0, 3).unwrap();
        store.save(&path).unwrap();

        let loaded = RankingStore::load(&path).unwrap();
        assert_eq!(loaded.snapshot().unwrap(), store.snapshot().unwrap());
        let names: Vec<String> = loaded
            .top_n(Difficulty::Medium, 10)
            .unwrap()
            .into_iter()
            .map(|e| e.username)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = RankingStore::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(store.len(Difficulty::Low).unwrap(), 0);
    }

    #[test]
    fn test_load_corrupt_file_is_unexpected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = RankingStore::load(&path).unwrap_err();
        assert!(!err.is_invalid_argument());
    }
}
