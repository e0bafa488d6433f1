//! Per-trigger simulation steps
//!
//! `spawn_tick` runs on the profile's spawn interval and `advance` once per
//! animation frame. They may interleave in any order but never run at the
//! same time.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::collision::reflect_off_walls;
use super::engine::Engine;
use super::spawn::weighted_pick;
use super::state::{Bounds, Creature};
use crate::heading_to_dir;

impl Engine {
    /// Try to spawn one creature.
    ///
    /// Returns the new creature's id, or `None` when idle or at the
    /// population cap.
    pub fn spawn_tick(&mut self) -> Option<u32> {
        if !self.is_running() || self.creatures.len() >= self.profile.max_population {
            return None;
        }

        let kind = weighted_pick(&self.tuning.kind_weights, self.rng.random::<f32>());
        let speed = self.profile.speed.lerp(self.rng.random::<f32>());
        let heading = self.rng.random::<f32>() * TAU;

        let margin = self.tuning.spawn_margin;
        let (x_lo, x_hi) = self.bounds.x_range(margin);
        let (y_lo, y_hi) = self.bounds.y_range(margin);
        let pos = Vec2::new(
            x_lo + self.rng.random::<f32>() * (x_hi - x_lo),
            y_lo + self.rng.random::<f32>() * (y_hi - y_lo),
        );

        let id = self.next_creature_id();
        self.creatures.push(Creature {
            id,
            kind,
            pos,
            heading,
            speed,
        });
        self.spawned += 1;
        Some(id)
    }

    /// Move every creature one frame within `bounds`.
    ///
    /// Per creature: step along heading, bounce off walls, then maybe wander.
    pub fn advance(&mut self, bounds: Bounds) {
        if !self.is_running() {
            return;
        }
        self.bounds = bounds;
        self.frames += 1;

        let margin = self.tuning.wall_margin;
        let wander_chance = self.tuning.wander_chance;
        let wander_span = self.tuning.wander_span;

        for creature in &mut self.creatures {
            let candidate = creature.pos + heading_to_dir(creature.heading) * creature.speed;
            let (pos, heading, hit) =
                reflect_off_walls(candidate, creature.heading, bounds, margin);
            creature.pos = pos;
            creature.heading = heading;
            if hit.any() {
                self.bounces += 1;
            }

            if self.rng.random::<f32>() < wander_chance {
                creature.heading += (self.rng.random::<f32>() - 0.5) * wander_span;
            }
        }
    }
}
