//! Bug Swat - click the bugs before the clock runs out
//!
//! Core modules:
//! - `sim`: Creature simulation (spawning, motion, hit-testing)
//! - `session`: One timed round driven by the host page
//! - `ranking`: Per-difficulty bounded leaderboard
//! - `server`: HTTP surface for the leaderboard (native only)
//! - `platform`: Browser bindings (wasm32 only)
//! - `tuning`: Data-driven game balance

pub mod difficulty;
pub mod error;
pub mod platform;
pub mod ranking;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use difficulty::{Difficulty, DifficultyProfile};
pub use error::{Error, Result};
pub use ranking::RankingStore;
pub use session::GameSession;
pub use settings::Preferences;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Length of one round in seconds
    pub const ROUND_SECONDS: u32 = 60;

    /// Entries retained per leaderboard partition
    pub const RETENTION_CAP: usize = 100;
    /// Entries shown on the leaderboard
    pub const DISPLAY_TOP: usize = 10;

    /// Distance kept between spawned creatures and the play area edges
    pub const SPAWN_MARGIN: f32 = 50.0;
    /// Inset of the walls creatures bounce off
    pub const WALL_MARGIN: f32 = 50.0;
    /// Click radius around a creature center
    pub const HIT_RADIUS: f32 = 50.0;

    /// Per-frame chance that a creature changes course slightly
    pub const WANDER_CHANCE: f32 = 0.05;
    /// Full width of the wander offset (centered on zero)
    pub const WANDER_SPAN: f32 = 0.5;
}

/// Unit vector for a heading in radians
#[inline]
pub fn heading_to_dir(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

/// Milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
