//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`], owned by the
//! controller and passed explicitly into each subsystem.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::store::TileFeatureStore;
use super::viewport::Viewport;
use crate::config::{ConfigError, GameConfig};

/// A value clamped to [0, max]
///
/// Values are f64 so small per-frame drains stay exact enough over long runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Meter {
    current: f64,
    max: f64,
}

impl Meter {
    /// A full meter
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Remove `amount`, clamping at zero. Returns true if the meter is now empty.
    pub fn drain(&mut self, amount: f64) -> bool {
        self.current = (self.current - amount).min(self.max).max(0.0);
        self.is_depleted()
    }

    /// Fill level in [0, 1]
    pub fn fraction(&self) -> f64 {
        self.current / self.max
    }

    /// Whole percent, rounded down (HUD readout)
    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).floor() as u32
    }
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// World position of the avatar's centre
    pub pos: Vec2,
    pub health: Meter,
    pub keys: u32,
}

impl Player {
    /// New player at the gap crossing north-west of the base station
    pub fn spawn(config: &GameConfig) -> Self {
        let origin = config.base_station.world_origin(config.tile_spacing());
        Self {
            pos: origin - Vec2::splat(config.gap / 2.0),
            health: Meter::full(config.max_health),
            keys: 0,
        }
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Player health ran out
    PlayerDied,
    /// System health ran out
    SystemFailure,
}

impl GameOverCause {
    pub fn message(&self) -> &'static str {
        match self {
            GameOverCause::PlayerDied => "YOU DIED",
            GameOverCause::SystemFailure => "SYSTEM FAILURE",
        }
    }
}

impl std::fmt::Display for GameOverCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Current phase of the run. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    GameOver(GameOverCause),
}

impl GamePhase {
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::GameOver(_))
    }
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub viewport: Viewport,
    pub player: Player,
    pub system_health: Meter,
    pub phase: GamePhase,
    /// Lazily generated world
    pub store: TileFeatureStore,
    /// Frames simulated so far
    pub frames: u64,
}

impl GameState {
    /// Create a new game state drawing world features from `rng`.
    /// Fails if `config` does not pass [`GameConfig::validate`].
    pub fn new(config: GameConfig, rng: Box<dyn RandomSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            viewport: Viewport::new(config.viewport_width, config.viewport_height),
            player: Player::spawn(&config),
            system_health: Meter::full(config.max_system_health),
            phase: GamePhase::Running,
            store: TileFeatureStore::new(&config, rng),
            frames: 0,
            config,
        })
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Enter game over. Only the first transition sticks; returns whether
    /// this call caused it.
    pub fn end(&mut self, cause: GameOverCause) -> bool {
        if self.phase.is_over() {
            return false;
        }
        self.phase = GamePhase::GameOver(cause);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::FixedSequence;

    #[test]
    fn test_meter_clamps() {
        let mut meter = Meter::full(100.0);
        assert!(!meter.drain(30.0));
        assert_eq!(meter.value(), 70.0);
        assert!(meter.drain(500.0));
        assert_eq!(meter.value(), 0.0);
        // Negative drain cannot overfill
        meter.drain(-1000.0);
        assert_eq!(meter.value(), 100.0);
    }

    #[test]
    fn test_meter_percent_floors() {
        let mut meter = Meter::full(100.0);
        meter.drain(0.015);
        assert_eq!(meter.percent(), 99);
        assert_eq!(Meter::full(100.0).percent(), 100);
    }

    #[test]
    fn test_spawn_in_gap_crossing() {
        let player = Player::spawn(&GameConfig::default());
        assert_eq!(player.pos, Vec2::new(-25.0, -25.0));
        assert_eq!(player.health.value(), 100.0);
        assert_eq!(player.keys, 0);
    }

    #[test]
    fn test_first_cause_wins() {
        let mut state =
            GameState::new(GameConfig::default(), Box::new(FixedSequence::constant(0.5))).unwrap();
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.end(GameOverCause::PlayerDied));
        assert!(!state.end(GameOverCause::SystemFailure));
        assert_eq!(state.phase, GamePhase::GameOver(GameOverCause::PlayerDied));
        assert_eq!(GameOverCause::SystemFailure.to_string(), "SYSTEM FAILURE");
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = GameConfig {
            tile_size: 0.0,
            gap: 0.0,
            ..GameConfig::default()
        };
        let err = GameState::new(config, Box::new(FixedSequence::constant(0.5))).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "tile_size", .. }));

        let config = GameConfig {
            viewport_width: 1.0e30,
            ..GameConfig::default()
        };
        assert!(GameState::new(config, Box::new(FixedSequence::constant(0.5))).is_err());
    }
}
