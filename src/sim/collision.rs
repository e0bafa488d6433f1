//! Wall reflection and click hit detection
//!
//! The play area is a rectangle inset by a margin. Creatures that would leave
//! it are clamped back onto the edge and their heading is mirrored.

use std::f32::consts::PI;

use glam::Vec2;

use super::state::Bounds;

/// Which walls a move bounced off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub horizontal: bool,
    pub vertical: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

/// Clamp a candidate position into the inset play area, reflecting heading.
///
/// Leaving the x range mirrors the horizontal component
/// (`heading = PI - heading`); leaving the y range mirrors the vertical one
/// (`heading = -heading`). Both can fire in one step, which reverses the
/// heading in a corner.
pub fn reflect_off_walls(
    candidate: Vec2,
    heading: f32,
    bounds: Bounds,
    margin: f32,
) -> (Vec2, f32, WallHit) {
    let mut pos = candidate;
    let mut heading = heading;
    let mut hit = WallHit::default();

    let (x_lo, x_hi) = bounds.x_range(margin);
    if pos.x < x_lo || pos.x > x_hi {
        heading = PI - heading;
        pos.x = pos.x.clamp(x_lo, x_hi);
        hit.horizontal = true;
    }

    let (y_lo, y_hi) = bounds.y_range(margin);
    if pos.y < y_lo || pos.y > y_hi {
        heading = -heading;
        pos.y = pos.y.clamp(y_lo, y_hi);
        hit.vertical = true;
    }

    (pos, heading, hit)
}

/// True when `point` lies strictly inside `radius` of `center`
#[inline]
pub fn within_radius(center: Vec2, point: Vec2, radius: f32) -> bool {
    center.distance_squared(point) < radius * radius
}
