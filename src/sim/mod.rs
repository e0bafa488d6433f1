//! Creature simulation
//!
//! Owns the live creatures and nothing else. No I/O, no timers: the host
//! calls `spawn_tick` on its spawn interval, `advance` once per frame and
//! `hit_test`/`remove` on clicks. Iteration order is spawn order.

pub mod collision;
pub mod engine;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{WallHit, reflect_off_walls, within_radius};
pub use engine::Engine;
pub use spawn::weighted_pick;
pub use state::{Bounds, Creature, CreatureKind, EnginePhase};
