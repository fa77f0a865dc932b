//! Read-only views handed to the drawing layer
//!
//! All positions in a [`RenderSnapshot`] are screen-space (camera top-left at
//! the origin, player at the viewport centre) unless named `world`.

use glam::Vec2;
use serde::Serialize;

use super::hazard::SweepCone;
use super::state::{GameOverCause, GameState};
use super::tile::{ObstacleRect, TileCoord};

/// One visible tile
#[derive(Debug, Clone, Serialize)]
pub struct TileView {
    pub coord: TileCoord,
    pub screen_origin: Vec2,
    /// Tile-local rects
    pub obstacles: Vec<ObstacleRect>,
    /// Tile-local positions of keys still on the ground
    pub keys: Vec<Vec2>,
    /// Sweep cone with its apex in screen space
    pub sweep: SweepCone,
    pub base_station: bool,
}

/// Values the shell publishes as text every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudReadout {
    pub system_health_pct: u32,
    pub player_health_pct: u32,
    pub keys: u32,
}

impl HudReadout {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            system_health_pct: state.system_health.percent(),
            player_health_pct: state.player.health.percent(),
            keys: state.player.keys,
        }
    }
}

/// Everything needed to draw a running frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub frame: u64,
    /// World position of the screen's top-left corner
    pub camera_world: Vec2,
    pub player_world: Vec2,
    pub player_screen: Vec2,
    pub player_radius: f32,
    pub key_radius: f32,
    pub tile_size: f32,
    pub gap: f32,
    /// Player health as a fraction of max
    pub health: f64,
    /// System health as a fraction of max
    pub system_health: f64,
    pub hud: HudReadout,
    pub tiles: Vec<TileView>,
}

/// Terminal frame
#[derive(Debug, Clone, Serialize)]
pub struct GameOverSnapshot {
    pub cause: GameOverCause,
    pub message: &'static str,
    pub frames: u64,
    pub hud: HudReadout,
    /// Tiles generated over the run
    pub tiles_explored: usize,
}

impl GameOverSnapshot {
    pub fn new(state: &GameState, cause: GameOverCause) -> Self {
        Self {
            cause,
            message: cause.message(),
            frames: state.frames,
            hud: HudReadout::from_state(state),
            tiles_explored: state.store.tile_count(),
        }
    }
}

/// Result of advancing one frame
#[derive(Debug, Clone, Serialize)]
pub enum FrameOutcome {
    Running(RenderSnapshot),
    GameOver(GameOverSnapshot),
}

impl FrameOutcome {
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self, FrameOutcome::GameOver(_))
    }
}
