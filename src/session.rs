//! One timed round
//!
//! Holds what the host page tracks around the engine: score, countdown and
//! whether the round is over. The host owns the three timers; when
//! [`GameSession::countdown`] reports the end it must cancel them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::ROUND_SECONDS;
use crate::difficulty::Difficulty;
use crate::ranking::SubmitRequest;
use crate::settings::Preferences;
use crate::sim::{Bounds, CreatureKind, Engine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionPhase {
    /// Waiting for the player to press start
    #[default]
    Ready,
    Playing,
    Over,
}

/// Result of a click that hit something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swat {
    pub creature_id: u32,
    pub kind: CreatureKind,
    pub points: i64,
}

#[derive(Debug)]
pub struct GameSession {
    username: String,
    difficulty: Difficulty,
    score: i64,
    time_left: u32,
    phase: SessionPhase,
    engine: Engine,
}

impl GameSession {
    pub fn new(prefs: &Preferences, seed: u64) -> Self {
        let profile = prefs.difficulty.profile();
        Self {
            username: prefs.username.clone(),
            difficulty: prefs.difficulty,
            score: 0,
            time_left: ROUND_SECONDS,
            phase: SessionPhase::Ready,
            engine: Engine::new(seed, profile),
        }
    }

    /// Start a fresh round inside `bounds`
    pub fn start(&mut self, bounds: Bounds) {
        if self.phase == SessionPhase::Playing {
            return;
        }
        self.score = 0;
        self.time_left = ROUND_SECONDS;
        self.phase = SessionPhase::Playing;
        self.engine.set_bounds(bounds);
        self.engine.start(self.difficulty.profile());
        log::info!("{} started a {} round", self.username, self.difficulty);
    }

    /// Spawn timer callback
    pub fn spawn_tick(&mut self) -> Option<u32> {
        self.engine.spawn_tick()
    }

    /// Frame callback
    pub fn advance(&mut self, bounds: Bounds) {
        self.engine.advance(bounds);
    }

    /// Resolve a click: score the first creature under `point` and remove it
    pub fn click(&mut self, point: Vec2) -> Option<Swat> {
        if self.phase != SessionPhase::Playing {
            return None;
        }
        let (creature_id, kind) = self.engine.hit_test(point).map(|c| (c.id, c.kind))?;
        self.engine.remove(creature_id);
        let points = kind.points();
        self.add_points(points);
        Some(Swat {
            creature_id,
            kind,
            points,
        })
    }

    pub fn add_points(&mut self, points: i64) {
        self.score += points;
    }

    /// One-second timer callback. Returns true when this call ended the round.
    pub fn countdown(&mut self) -> bool {
        if self.phase != SessionPhase::Playing {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.end();
            return true;
        }
        false
    }

    /// Finish the round early or on timeout
    pub fn end(&mut self) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        self.engine.stop();
        self.phase = SessionPhase::Over;
        log::info!("round over: {} scored {}", self.username, self.score);
    }

    /// The leaderboard request for a finished round.
    ///
    /// Zero scores and nameless players are not submitted.
    pub fn submission(&self) -> Option<SubmitRequest> {
        if self.phase != SessionPhase::Over || self.score == 0 || self.username.is_empty() {
            return None;
        }
        Some(SubmitRequest {
            username: self.username.clone(),
            difficulty: self.difficulty.as_str().to_string(),
            score: self.score as f64,
        })
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}
