//! Rotating sweep hazards
//!
//! Every tile owns one cone anchored at its centre. The cone's heading is a
//! pure function of wall-clock time and the tile coordinate:
//! - angle(t, col, row) = (t / time_scale + col * col_phase + row * row_phase) mod 2π
//! - half-width: fixed, on each side of the heading
//! - radius: half a tile plus half a gap
//!
//! Cones are only evaluated for visible tiles, but since the heading comes from
//! the clock a cone re-entering view is already at the right angle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tile::TileCoord;
use crate::config::GameConfig;
use crate::{angular_distance, wrap_angle};

/// A tile's sweep cone at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepCone {
    /// Apex (tile centre), in whatever frame the caller works in
    pub apex: Vec2,
    pub radius: f32,
    /// Heading of the centreline (radians, [0, 2π))
    pub angle: f32,
    /// Half of the angular width
    pub half_width: f32,
}

impl SweepCone {
    /// Cone of `coord` at `now_ms`, with its apex placed at `apex`
    pub fn at(config: &GameConfig, coord: TileCoord, apex: Vec2, now_ms: f64) -> Self {
        Self {
            apex,
            radius: config.cone_radius(),
            angle: sweep_angle(config, coord, now_ms),
            half_width: config.hazard_half_width,
        }
    }

    /// Whether a direction lies strictly within the cone's angular extent
    pub fn contains_angle(&self, theta: f32) -> bool {
        angular_distance(theta, self.angle) < self.half_width
    }

    /// Whether a point is strictly inside the cone
    pub fn contains_point(&self, point: Vec2) -> bool {
        let delta = point - self.apex;
        if delta.length() >= self.radius {
            return false;
        }
        self.contains_angle(delta.y.atan2(delta.x))
    }
}

/// Heading of a tile's sweep at `now_ms`
pub fn sweep_angle(config: &GameConfig, coord: TileCoord, now_ms: f64) -> f32 {
    // Time term in f64: millisecond clocks outgrow f32 precision quickly
    let time_term = (now_ms / config.hazard_time_scale_ms).rem_euclid(std::f64::consts::TAU);
    let phase = coord.col as f32 * config.hazard_col_phase + coord.row as f32 * config.hazard_row_phase;
    wrap_angle(time_term as f32 + phase)
}

/// Damage a player at `point` takes from one cone this frame
pub fn sweep_damage(config: &GameConfig, cone: &SweepCone, point: Vec2) -> f64 {
    if cone.contains_point(point) {
        config.hazard_damage
    } else {
        0.0
    }
}
