//! Visible tile window
//!
//! The camera is centred on the player. The window covers the screen plus a
//! one-tile border on every side, so anything that can touch the player (or be
//! drawn) is inside it. Positions handed out here are screen-space: world
//! position minus the camera's top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tile::TileCoord;

/// Screen dimensions the camera covers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Screen position of the player (always the centre)
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Window of tiles around a player at `focus`
    pub fn window(&self, focus: Vec2, spacing: f32) -> TileWindow {
        let camera = focus - self.center();
        TileWindow {
            camera,
            start: TileCoord::containing(camera, spacing),
            offset: Vec2::new(camera.x.rem_euclid(spacing), camera.y.rem_euclid(spacing)),
            cols: (self.width / spacing).ceil() as i32 + 2,
            rows: (self.height / spacing).ceil() as i32 + 2,
            spacing,
        }
    }
}

/// A tile inside the window, with its screen-space origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleTile {
    pub coord: TileCoord,
    pub screen_origin: Vec2,
}

/// Tiles overlapping the screen (plus border) for one camera position
#[derive(Debug, Clone, Copy)]
pub struct TileWindow {
    /// World position of the screen's top-left corner
    pub camera: Vec2,
    start: TileCoord,
    offset: Vec2,
    cols: i32,
    rows: i32,
    spacing: f32,
}

impl TileWindow {
    /// Visible tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = VisibleTile> + '_ {
        (-1..self.rows).flat_map(move |row| {
            (-1..self.cols).map(move |col| VisibleTile {
                coord: self.start.offset(col, row),
                screen_origin: Vec2::new(
                    col as f32 * self.spacing - self.offset.x,
                    row as f32 * self.spacing - self.offset.y,
                ),
            })
        })
    }

    /// Number of tiles [`Self::tiles`] yields
    pub fn len(&self) -> usize {
        ((self.cols + 1) * (self.rows + 1)) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_dimensions() {
        let viewport = Viewport::new(800.0, 600.0);
        let window = viewport.window(Vec2::ZERO, 250.0);
        // ceil(800/250)+2 = 6 columns, ceil(600/250)+2 = 5 rows, plus the -1 border
        assert_eq!(window.len(), 7 * 6);
        assert_eq!(window.tiles().count(), window.len());
    }

    #[test]
    fn test_screen_origin_matches_world_translation() {
        let viewport = Viewport::new(800.0, 600.0);
        let focus = Vec2::new(28.0, 80.0);
        let window = viewport.window(focus, 250.0);
        for tile in window.tiles() {
            let expected = tile.coord.world_origin(250.0) - window.camera;
            assert!((tile.screen_origin - expected).length() < 1e-3);
        }
        // The player is drawn at the centre
        assert_eq!(focus - window.camera, viewport.center());
    }

    #[test]
    fn test_window_covers_player_neighbourhood() {
        let viewport = Viewport::new(800.0, 600.0);
        let focus = Vec2::new(-1234.0, 5678.0);
        let window = viewport.window(focus, 250.0);
        let here = TileCoord::containing(focus, 250.0);
        let coords: Vec<TileCoord> = window.tiles().map(|tile| tile.coord).collect();
        for dc in -1..=1 {
            for dr in -1..=1 {
                assert!(coords.contains(&here.offset(dc, dr)));
            }
        }
        assert!(!coords.contains(&here.offset(50, 0)));
    }
}
