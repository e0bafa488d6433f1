//! Simulation entity types

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Engine lifecycle. There is no pause state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EnginePhase {
    #[default]
    Idle,
    Running,
}

/// Creature kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureKind {
    Common,
    DiseaseCarrier,
    Stinger,
}

impl CreatureKind {
    pub const ALL: [CreatureKind; 3] = [
        CreatureKind::Common,
        CreatureKind::DiseaseCarrier,
        CreatureKind::Stinger,
    ];

    /// Points awarded for swatting one. Stingers hurt.
    pub fn points(&self) -> i64 {
        match self {
            CreatureKind::Common => 1,
            CreatureKind::DiseaseCarrier => 3,
            CreatureKind::Stinger => -5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreatureKind::Common => "common",
            CreatureKind::DiseaseCarrier => "disease_carrier",
            CreatureKind::Stinger => "stinger",
        }
    }
}

/// A creature entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// Never reused within an engine
    pub id: u32,
    pub kind: CreatureKind,
    pub pos: Vec2,
    /// Radians
    pub heading: f32,
    /// Units per frame, fixed at spawn
    pub speed: f32,
}

/// Visible play area, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Allowed `[lo, hi]` for x after insetting by `margin`
    #[inline]
    pub fn x_range(&self, margin: f32) -> (f32, f32) {
        inset(self.width, margin)
    }

    /// Allowed `[lo, hi]` for y after insetting by `margin`
    #[inline]
    pub fn y_range(&self, margin: f32) -> (f32, f32) {
        inset(self.height, margin)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

// A span narrower than both margins collapses to its midpoint.
fn inset(extent: f32, margin: f32) -> (f32, f32) {
    let lo = margin;
    let hi = extent - margin;
    if hi < lo {
        let mid = extent / 2.0;
        (mid, mid)
    } else {
        (lo, hi)
    }
}
