//! Collision against the infinite obstacle field
//!
//! The player is a circle; obstacles are tile-local rectangles. Tests run in
//! the camera-relative frame the renderer uses: the window is built from the
//! player's *current* position, and the candidate is placed at the screen
//! centre plus its world delta from the player.

use glam::Vec2;

use super::state::GameState;
use super::store::TileFeatureStore;
use super::tile::circle_box_overlap;
use super::viewport::Viewport;

/// Movement intent for one input event, one unit step per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveIntent {
    pub dx: i8,
    pub dy: i8,
}

impl MoveIntent {
    pub fn new(dx: i8, dy: i8) -> Self {
        Self {
            dx: dx.signum(),
            dy: dy.signum(),
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Query context for one collision check
pub struct CollisionField<'a> {
    pub store: &'a mut TileFeatureStore,
    pub viewport: Viewport,
    pub spacing: f32,
    pub radius: f32,
}

impl CollisionField<'_> {
    /// Whether a player circle at `candidate` would overlap any obstacle near
    /// the player's current position `current`.
    ///
    /// Tiles in the window are generated on demand.
    pub fn would_collide(&mut self, current: Vec2, candidate: Vec2) -> bool {
        let window = self.viewport.window(current, self.spacing);
        let future = self.viewport.center() + (candidate - current);
        let radius = self.radius;

        for tile in window.tiles() {
            let hit = self.store.obstacles(tile.coord).iter().any(|rect| {
                circle_box_overlap(future, radius, tile.screen_origin + rect.min(), rect.size())
            });
            if hit {
                return true;
            }
        }
        false
    }
}

/// Apply a move: `steps` unit steps, each resolved x first then y.
///
/// Axes are tested separately so a blocked axis does not stop the other
/// (sliding along walls). Returns the final position.
pub fn step_move(field: &mut CollisionField<'_>, start: Vec2, intent: MoveIntent, steps: u32) -> Vec2 {
    let mut pos = start;
    if intent.is_idle() {
        return pos;
    }

    for _ in 0..steps {
        let next = pos + Vec2::new(intent.dx as f32, intent.dy as f32);

        if !field.would_collide(pos, Vec2::new(next.x, pos.y)) {
            pos.x = next.x;
        }
        if !field.would_collide(pos, Vec2::new(pos.x, next.y)) {
            pos.y = next.y;
        }
    }
    pos
}

/// Move the player in `state` according to `intent`
pub fn move_player(state: &mut GameState, intent: MoveIntent) {
    let config = state.config;
    let mut field = CollisionField {
        store: &mut state.store,
        viewport: state.viewport,
        spacing: config.tile_spacing(),
        radius: config.player_radius,
    };
    state.player.pos = step_move(&mut field, state.player.pos, intent, config.player_speed);
}
