//! Difficulty tiers and their fixed balance profiles

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Difficulty tier. The set is closed: anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    #[default]
    Medium,
    High,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Low, Difficulty::Medium, Difficulty::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        }
    }

    /// Stable index into per-tier tables
    pub fn index(&self) -> usize {
        match self {
            Difficulty::Low => 0,
            Difficulty::Medium => 1,
            Difficulty::High => 2,
        }
    }

    /// Balance profile for this tier
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Low => DifficultyProfile {
                difficulty: *self,
                speed: SpeedRange { min: 2.0, max: 3.0 },
                spawn_interval_ms: 1000,
                max_population: 5,
            },
            Difficulty::Medium => DifficultyProfile {
                difficulty: *self,
                speed: SpeedRange { min: 4.0, max: 5.0 },
                spawn_interval_ms: 700,
                max_population: 7,
            },
            Difficulty::High => DifficultyProfile {
                difficulty: *self,
                speed: SpeedRange { min: 6.0, max: 8.0 },
                spawn_interval_ms: 500,
                max_population: 10,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Difficulty::Low),
            "medium" => Ok(Difficulty::Medium),
            "high" => Ok(Difficulty::High),
            other => Err(Error::invalid(format!("unknown difficulty '{other}'"))),
        }
    }
}

/// Half-open speed range `[min, max)` in units per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    /// Map a uniform draw in `[0, 1)` onto the range.
    ///
    /// Rounding can land a draw just below 1 on `max`; those are pulled back
    /// to the largest value below it so the upper bound stays exclusive.
    #[inline]
    pub fn lerp(&self, t: f32) -> f32 {
        let v = self.min + t * (self.max - self.min);
        if v >= self.max && self.max > self.min {
            self.max.next_down()
        } else {
            v
        }
    }
}

/// Immutable per-tier configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub difficulty: Difficulty,
    pub speed: SpeedRange,
    /// Time between spawn attempts
    pub spawn_interval_ms: u32,
    /// Most creatures alive at once
    pub max_population: usize,
}

impl DifficultyProfile {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.spawn_interval_ms))
    }
}
