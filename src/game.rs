//! Game controller
//!
//! Owns the [`GameState`] and is the only thing the rendering/input shell
//! talks to. The shell calls [`Game::on_frame`] once per display refresh and
//! stops scheduling frames once [`Game::is_running`] turns false; key presses
//! go to [`Game::on_directional_input`] as they arrive.

use crate::config::{ConfigError, GameConfig};
use crate::sim::{
    Command, Direction, FrameOutcome, GameState, RandomSource, SeededSource, apply_command, frame,
};

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// New game with a fresh random world
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, rand::random())
    }

    /// New game whose world is drawn from a PCG stream seeded with `seed`
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let game = Self::with_source(config, Box::new(SeededSource::new(seed)))?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(game)
    }

    /// New game drawing world features from an arbitrary source.
    /// Rejects configs that fail [`GameConfig::validate`].
    pub fn with_source(config: GameConfig, rng: Box<dyn RandomSource>) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(config, rng)?,
        })
    }

    /// Advance one frame at wall-clock time `now_ms`
    pub fn on_frame(&mut self, now_ms: f64) -> FrameOutcome {
        frame(&mut self.state, now_ms)
    }

    /// Handle an arrow-key press. Returns true if the player moved.
    pub fn on_directional_input(&mut self, direction: Direction) -> bool {
        self.on_command(direction.into())
    }

    pub fn on_command(&mut self, command: Command) -> bool {
        apply_command(&mut self.state, command)
    }

    /// Whether the shell should schedule another frame
    pub fn is_running(&self) -> bool {
        !self.state.is_over()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for shells that stage scenarios (tests, demos)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FixedSequence, GameOverCause, MoveIntent};
    use glam::Vec2;

    fn flat_game() -> Game {
        let config = GameConfig {
            viewport_width: 800.0,
            viewport_height: 600.0,
            ..GameConfig::default()
        };
        Game::with_source(config, Box::new(FixedSequence::constant(0.5))).unwrap()
    }

    #[test]
    fn test_same_seed_same_world() {
        let mut a = Game::with_seed(GameConfig::default(), 99999).unwrap();
        let mut b = Game::with_seed(GameConfig::default(), 99999).unwrap();

        for (i, direction) in [Direction::Right, Direction::Down, Direction::Down, Direction::Left]
            .into_iter()
            .enumerate()
        {
            a.on_directional_input(direction);
            b.on_directional_input(direction);
            a.on_frame(i as f64 * 16.0);
            b.on_frame(i as f64 * 16.0);
        }

        assert_eq!(a.state().player.pos, b.state().player.pos);
        assert_eq!(a.state().store.tile_count(), b.state().store.tile_count());
        let coord = crate::sim::TileCoord::new(1, 1);
        assert_eq!(
            a.state_mut().store.obstacles(coord).to_vec(),
            b.state_mut().store.obstacles(coord).to_vec()
        );
    }

    #[test]
    fn test_controller_lifecycle() {
        let mut game = flat_game();
        game.state_mut().system_health.drain(99.99);
        assert!(game.is_running());

        assert!(game.on_directional_input(Direction::Down));
        let outcome = game.on_frame(0.0);
        let FrameOutcome::GameOver(snapshot) = outcome else {
            panic!("expected system failure");
        };
        assert_eq!(snapshot.cause, GameOverCause::SystemFailure);
        assert!(!game.is_running());

        // Input after game over is dropped
        let pos = game.state().player.pos;
        assert!(!game.on_command(Command::Move(MoveIntent::new(1, 0))));
        assert_eq!(game.state().player.pos, pos);
        assert_eq!(pos, Vec2::new(-25.0, 5.0));
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let config = GameConfig {
            tile_size: 0.0,
            gap: 0.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
        let err = Game::with_seed(config, 1).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(Game::new(config).is_err());
    }
}
