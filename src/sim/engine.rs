//! Simulation engine lifecycle and queries
//!
//! The engine owns every live creature. The host drives it from three
//! independent triggers (spawn timer, frame callback, countdown) and must
//! deregister them when it calls [`Engine::stop`]. Frame delivery is up to
//! the host; the engine only exposes per-call steps.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::within_radius;
use super::state::{Bounds, Creature, EnginePhase};
use crate::difficulty::DifficultyProfile;
use crate::tuning::Tuning;

#[derive(Debug)]
pub struct Engine {
    pub(super) phase: EnginePhase,
    pub(super) profile: DifficultyProfile,
    pub(super) tuning: Tuning,
    /// Live creatures in spawn order
    pub(super) creatures: Vec<Creature>,
    /// Last play area reported by the host
    pub(super) bounds: Bounds,
    pub(super) rng: Pcg32,
    /// Frames advanced since start
    pub(super) frames: u64,
    /// Creatures spawned since start
    pub(super) spawned: u32,
    /// Wall bounces since start
    pub(super) bounces: u64,
    next_id: u32,
}

impl Engine {
    /// Create an idle engine with the given RNG seed
    pub fn new(seed: u64, profile: DifficultyProfile) -> Self {
        Self::with_tuning(seed, profile, Tuning::default())
    }

    pub fn with_tuning(seed: u64, profile: DifficultyProfile, tuning: Tuning) -> Self {
        Self {
            phase: EnginePhase::Idle,
            profile,
            tuning,
            creatures: Vec::new(),
            bounds: Bounds::default(),
            rng: Pcg32::seed_from_u64(seed),
            frames: 0,
            spawned: 0,
            bounces: 0,
            next_id: 1,
        }
    }

    /// Idle -> Running. Clears creatures and counters. No-op if already running.
    pub fn start(&mut self, profile: DifficultyProfile) {
        if self.phase == EnginePhase::Running {
            log::debug!("start ignored: engine already running");
            return;
        }
        self.profile = profile;
        self.creatures.clear();
        self.frames = 0;
        self.spawned = 0;
        self.bounces = 0;
        self.phase = EnginePhase::Running;
        log::debug!("engine started ({})", profile.difficulty);
    }

    /// Running -> Idle. Clears creatures. Idempotent.
    pub fn stop(&mut self) {
        if self.phase == EnginePhase::Running {
            log::debug!(
                "engine stopped after {} frames, {} spawned, {} bounces",
                self.frames,
                self.spawned,
                self.bounces
            );
        }
        self.phase = EnginePhase::Idle;
        self.creatures.clear();
    }

    /// Update the play area used for spawning
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// First creature (in spawn order) whose center is strictly within the
    /// hit radius of `point`
    pub fn hit_test(&self, point: Vec2) -> Option<&Creature> {
        let radius = self.tuning.hit_radius;
        self.creatures
            .iter()
            .find(|c| within_radius(c.pos, point, radius))
    }

    /// Remove a creature by id, returning it if it was alive
    pub fn remove(&mut self, id: u32) -> Option<Creature> {
        let idx = self.creatures.iter().position(|c| c.id == id)?;
        Some(self.creatures.remove(idx))
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == EnginePhase::Running
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn population(&self) -> usize {
        self.creatures.len()
    }

    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn bounces(&self) -> u64 {
        self.bounces
    }

    /// Allocate a new creature ID
    pub(super) fn next_creature_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place a creature directly (host-side scenarios and tests).
    ///
    /// Obeys the same rules as spawning: refused when idle or at the cap.
    pub fn insert(&mut self, mut creature: Creature) -> Option<u32> {
        if !self.is_running() || self.creatures.len() >= self.profile.max_population {
            return None;
        }
        creature.id = self.next_creature_id();
        let id = creature.id;
        self.creatures.push(creature);
        Some(id)
    }
}
