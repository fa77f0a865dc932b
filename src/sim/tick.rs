//! Per-frame simulation and input handling
//!
//! Frame order: traverse the visible tiles (lazy generation, key pickup and
//! sweep damage happen as part of the traversal), drain system health, then
//! settle the game-over transition. Input is applied immediately when it
//! arrives, between frames.

use serde::{Deserialize, Serialize};

use super::collision::{MoveIntent, move_player};
use super::hazard::{SweepCone, sweep_damage};
use super::snapshot::{FrameOutcome, GameOverSnapshot, HudReadout, RenderSnapshot, TileView};
use super::state::{GameOverCause, GamePhase, GameState};

/// Arrow-key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl From<Direction> for MoveIntent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => MoveIntent::new(0, -1),
            Direction::Down => MoveIntent::new(0, 1),
            Direction::Left => MoveIntent::new(-1, 0),
            Direction::Right => MoveIntent::new(1, 0),
        }
    }
}

/// Input commands from the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// One key press: up to `player_speed` unit steps
    Move(MoveIntent),
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Move(direction.into())
    }
}

/// Apply an input command. Ignored once the game is over.
///
/// Returns true if the player's position changed.
pub fn apply_command(state: &mut GameState, command: Command) -> bool {
    if state.is_over() {
        return false;
    }
    match command {
        Command::Move(intent) => {
            let before = state.player.pos;
            move_player(state, intent);
            state.player.pos != before
        }
    }
}

/// Advance the game by one frame at wall-clock time `now_ms`
pub fn frame(state: &mut GameState, now_ms: f64) -> FrameOutcome {
    // Frozen after game over
    if let GamePhase::GameOver(cause) = state.phase {
        return FrameOutcome::GameOver(GameOverSnapshot::new(state, cause));
    }

    state.frames += 1;
    let tiles = traverse_visible(state, now_ms);

    if state.system_health.drain(state.config.system_depletion_rate) {
        state.end(GameOverCause::SystemFailure);
    }

    if let GamePhase::GameOver(cause) = state.phase {
        log::info!(
            "{} after {} frames ({} keys, {} tiles explored)",
            cause,
            state.frames,
            state.player.keys,
            state.store.tile_count()
        );
        return FrameOutcome::GameOver(GameOverSnapshot::new(state, cause));
    }

    let config = &state.config;
    FrameOutcome::Running(RenderSnapshot {
        frame: state.frames,
        camera_world: state.player.pos - state.viewport.center(),
        player_world: state.player.pos,
        player_screen: state.viewport.center(),
        player_radius: config.player_radius,
        key_radius: config.key_radius,
        tile_size: config.tile_size,
        gap: config.gap,
        health: state.player.health.fraction(),
        system_health: state.system_health.fraction(),
        hud: HudReadout::from_state(state),
        tiles,
    })
}

/// Walk every visible tile: generate it, pick up keys, apply sweep damage
fn traverse_visible(state: &mut GameState, now_ms: f64) -> Vec<TileView> {
    let config = state.config;
    let window = state.viewport.window(state.player.pos, config.tile_spacing());
    let player_screen = state.viewport.center();
    let pickup_range = config.player_radius + config.key_radius;
    let half_tile = glam::Vec2::splat(config.tile_size / 2.0);

    let mut views = Vec::with_capacity(window.len());
    for tile in window.tiles() {
        let obstacles = state.store.obstacles(tile.coord).to_vec();

        let mut keys = Vec::new();
        for key in state.store.keys_mut(tile.coord) {
            if key.is_collected() {
                continue;
            }
            if player_screen.distance(tile.screen_origin + key.pos) <= pickup_range {
                key.collect();
                state.player.keys += 1;
                log::debug!("Picked up key in tile {} ({} total)", tile.coord, state.player.keys);
            } else {
                keys.push(key.pos);
            }
        }

        let sweep = SweepCone::at(&config, tile.coord, tile.screen_origin + half_tile, now_ms);
        let damage = sweep_damage(&config, &sweep, player_screen);
        if damage > 0.0 && state.player.health.drain(damage) {
            state.end(GameOverCause::PlayerDied);
        }

        views.push(TileView {
            coord: tile.coord,
            screen_origin: tile.screen_origin,
            obstacles,
            keys,
            sweep,
            base_station: tile.coord == config.base_station,
        });
    }
    views
}
