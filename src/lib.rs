//! Tile Sweep - an infinite tile field with sweeping hazards
//!
//! Core modules:
//! - `sim`: Simulation core (tile generation, collisions, hazards, game state)
//! - `config`: Named, overridable game parameters
//! - `game`: Controller the rendering/input shell talks to

pub mod config;
pub mod game;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::Game;

/// Game configuration constants (reference values, see [`GameConfig`])
pub mod consts {
    use std::f32::consts::PI;

    /// Tile edge length (world units)
    pub const TILE_SIZE: f32 = 200.0;
    /// Gap between neighbouring tiles
    pub const GAP: f32 = 50.0;

    pub const PLAYER_RADIUS: f32 = 12.0;
    /// Pickup radius of a key
    pub const KEY_RADIUS: f32 = 8.0;
    /// Unit steps per directional input
    pub const PLAYER_SPEED: u32 = 30;

    pub const MAX_HEALTH: f64 = 100.0;
    pub const MAX_SYSTEM_HEALTH: f64 = 100.0;
    /// System health lost every frame, regardless of player action
    pub const SYSTEM_DEPLETION_RATE: f64 = 0.015;

    /// Obstacles per tile
    pub const OBSTACLE_COUNT: u32 = 5;
    pub const OBSTACLE_SIZE: f32 = 80.0;
    /// Full span of the random obstacle offset (offset = (r - 0.5) * span)
    pub const OBSTACLE_JITTER: f32 = 60.0;

    /// Probability that a tile rolls for a key
    pub const KEY_SPAWN_CHANCE: f32 = 0.2;
    /// Placement attempts before a rolled key is given up
    pub const KEY_PLACEMENT_ATTEMPTS: u32 = 20;

    /// Half of the sweep cone's angular width (radians)
    pub const HAZARD_HALF_WIDTH: f32 = PI / 12.0;
    /// Health lost per frame per cone the player stands in
    pub const HAZARD_DAMAGE: f64 = 0.2;
    /// Milliseconds per radian of sweep rotation
    pub const HAZARD_TIME_SCALE_MS: f64 = 500.0;
    pub const HAZARD_COL_PHASE: f32 = 0.3;
    pub const HAZARD_ROW_PHASE: f32 = 0.5;

    pub const VIEWPORT_WIDTH: f32 = 1280.0;
    pub const VIEWPORT_HEIGHT: f32 = 720.0;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Smallest absolute difference between two angles, in [0, π]
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    use std::f32::consts::PI;
    ((a - b + 3.0 * PI).rem_euclid(std::f32::consts::TAU) - PI).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-5);
        assert!((wrap_angle(5.0 * PI) - PI).abs() < 1e-4);
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!(wrap_angle(-1e-9) < std::f32::consts::TAU);
    }

    #[test]
    fn test_angular_distance_wraparound() {
        // 350° vs 10° are 20° apart
        let d = angular_distance(350f32.to_radians(), 10f32.to_radians());
        assert!((d - 20f32.to_radians()).abs() < 1e-4);
        assert!(angular_distance(1.0, 1.0) < 1e-5);
        assert!((angular_distance(0.0, PI) - PI).abs() < 1e-4);
    }
}
