//! Data-driven game balance
//!
//! Values that are not tied to a difficulty tier. Tests zero out the random
//! parts to make motion exact.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::CreatureKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Inset from each edge for spawn positions
    pub spawn_margin: f32,
    /// Inset from each edge for wall reflection
    pub wall_margin: f32,
    /// Click radius (exclusive)
    pub hit_radius: f32,
    /// Per-frame probability of a heading wobble
    pub wander_chance: f32,
    /// Wobble offset is drawn from `[-span/2, span/2)`
    pub wander_span: f32,
    /// Spawn weights in declaration order, summing to 1.0
    pub kind_weights: [(CreatureKind, f32); 3],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_margin: SPAWN_MARGIN,
            wall_margin: WALL_MARGIN,
            hit_radius: HIT_RADIUS,
            wander_chance: WANDER_CHANCE,
            wander_span: WANDER_SPAN,
            kind_weights: [
                (CreatureKind::Common, 0.7),
                (CreatureKind::DiseaseCarrier, 0.2),
                (CreatureKind::Stinger, 0.1),
            ],
        }
    }
}

impl Tuning {
    /// Default balance with wandering turned off
    pub fn without_wander() -> Self {
        Self {
            wander_chance: 0.0,
            ..Self::default()
        }
    }
}
