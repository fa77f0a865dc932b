//! Game parameters
//!
//! Every tunable of the simulation, defaulting to the reference constants in
//! [`crate::consts`]. Partial JSON overrides are merged over the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::TileCoord;

/// Widest visible window, in tiles per axis
const MAX_VIEWPORT_TILES: f32 = 4096.0;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === World layout ===
    pub tile_size: f32,
    pub gap: f32,
    /// Tile highlighted as the base station
    pub base_station: TileCoord,

    // === Player ===
    pub player_radius: f32,
    /// Unit steps per directional input
    pub player_speed: u32,
    pub max_health: f64,

    // === System health ===
    pub max_system_health: f64,
    /// Drained every frame
    pub system_depletion_rate: f64,

    // === Tile features ===
    pub obstacle_count: u32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Full span of the obstacle offset jitter
    pub obstacle_jitter: f32,
    pub key_radius: f32,
    pub key_spawn_chance: f32,
    pub key_placement_attempts: u32,

    // === Sweep hazards ===
    pub hazard_half_width: f32,
    pub hazard_damage: f64,
    /// Milliseconds per radian of rotation
    pub hazard_time_scale_ms: f64,
    pub hazard_col_phase: f32,
    pub hazard_row_phase: f32,

    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            gap: GAP,
            base_station: TileCoord::new(0, 0),

            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            max_health: MAX_HEALTH,

            max_system_health: MAX_SYSTEM_HEALTH,
            system_depletion_rate: SYSTEM_DEPLETION_RATE,

            obstacle_count: OBSTACLE_COUNT,
            obstacle_width: OBSTACLE_SIZE,
            obstacle_height: OBSTACLE_SIZE,
            obstacle_jitter: OBSTACLE_JITTER,
            key_radius: KEY_RADIUS,
            key_spawn_chance: KEY_SPAWN_CHANCE,
            key_placement_attempts: KEY_PLACEMENT_ATTEMPTS,

            hazard_half_width: HAZARD_HALF_WIDTH,
            hazard_damage: HAZARD_DAMAGE,
            hazard_time_scale_ms: HAZARD_TIME_SCALE_MS,
            hazard_col_phase: HAZARD_COL_PHASE,
            hazard_row_phase: HAZARD_ROW_PHASE,

            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Distance between the origins of neighbouring tiles
    #[inline]
    pub fn tile_spacing(&self) -> f32 {
        self.tile_size + self.gap
    }

    /// Reach of a tile's sweep cone, measured from the tile center
    #[inline]
    pub fn cone_radius(&self) -> f32 {
        self.tile_size / 2.0 + self.gap / 2.0
    }

    /// Parse a (possibly partial) JSON document over the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("Loaded config overrides: {:?}", config);
        Ok(config)
    }

    /// Check every field is in a range the simulation can work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if !(self.tile_size > 0.0 && self.tile_size.is_finite()) {
            return invalid("tile_size", "must be positive and finite");
        }
        if !(self.gap >= 0.0 && self.gap.is_finite()) {
            return invalid("gap", "must be non-negative and finite");
        }
        if !(self.player_radius >= 0.0) {
            return invalid("player_radius", "must not be negative");
        }
        if !(self.key_radius >= 0.0) {
            return invalid("key_radius", "must not be negative");
        }
        if !(self.max_health > 0.0) {
            return invalid("max_health", "must be positive");
        }
        if !(self.max_system_health > 0.0) {
            return invalid("max_system_health", "must be positive");
        }
        if !(self.system_depletion_rate >= 0.0) {
            return invalid("system_depletion_rate", "must not be negative");
        }
        if !(self.hazard_damage >= 0.0) {
            return invalid("hazard_damage", "must not be negative");
        }
        if !(self.hazard_time_scale_ms > 0.0) {
            return invalid("hazard_time_scale_ms", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.key_spawn_chance) {
            return invalid("key_spawn_chance", "must be within [0, 1]");
        }
        if self.key_placement_attempts == 0 {
            return invalid("key_placement_attempts", "must be at least 1");
        }
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return invalid("viewport", "must have a positive size");
        }
        let spacing = self.tile_spacing();
        if !(self.viewport_width / spacing <= MAX_VIEWPORT_TILES
            && self.viewport_height / spacing <= MAX_VIEWPORT_TILES)
        {
            return invalid("viewport", "spans too many tiles");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference() {
        let config = GameConfig::default();
        assert_eq!(config.tile_spacing(), 250.0);
        assert_eq!(config.cone_radius(), 125.0);
        assert_eq!(config.obstacle_count, 5);
        assert_eq!(config.key_placement_attempts, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = GameConfig::from_json(r#"{ "player_speed": 10, "gap": 20.0 }"#).unwrap();
        assert_eq!(config.player_speed, 10);
        assert_eq!(config.gap, 20.0);
        assert_eq!(config.tile_size, TILE_SIZE);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_json(r#"{ "key_spawn_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "key_spawn_chance",
                ..
            }
        ));

        let err = GameConfig::from_json(r#"{ "tile_size": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "tile_size", .. }));
    }

    #[test]
    fn test_viewport_span_bounded() {
        let config = GameConfig {
            viewport_width: 1.0e30,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field: "viewport", .. })));

        let config = GameConfig {
            tile_size: f32::INFINITY,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field: "tile_size", .. })));
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
