//! Tile grid data model
//!
//! Tiles are squares of `tile_size` laid on an infinite grid with `gap`
//! between them. Tile `(col, row)` has its world origin (top-left corner) at
//! `(col * spacing, row * spacing)`. Features are stored in tile-local space.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Cell of the infinite tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileCoord {
    pub col: i32,
    pub row: i32,
}

impl TileCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Tile containing (or owning the gap after) a world position
    pub fn containing(pos: Vec2, spacing: f32) -> Self {
        Self {
            col: (pos.x / spacing).floor() as i32,
            row: (pos.y / spacing).floor() as i32,
        }
    }

    /// World position of the tile's top-left corner
    #[inline]
    pub fn world_origin(&self, spacing: f32) -> Vec2 {
        Vec2::new(self.col as f32 * spacing, self.row as f32 * spacing)
    }

    #[inline]
    pub fn offset(&self, dcol: i32, drow: i32) -> Self {
        Self::new(self.col + dcol, self.row + drow)
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Axis-aligned obstacle, local to its tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleRect {
    /// Local offset of the top-left corner
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ObstacleRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Whether the bounding box of a circle strictly overlaps this rect.
    ///
    /// `origin` translates the rect into the circle's frame.
    #[inline]
    pub fn overlaps_circle_box(&self, origin: Vec2, center: Vec2, radius: f32) -> bool {
        circle_box_overlap(center, radius, origin + self.min(), self.size())
    }
}

/// Expanded-rect test: the circle's bounding box against a rect at `min` of `size`
#[inline]
pub fn circle_box_overlap(center: Vec2, radius: f32, min: Vec2, size: Vec2) -> bool {
    center.x + radius > min.x
        && center.x - radius < min.x + size.x
        && center.y + radius > min.y
        && center.y - radius < min.y + size.y
}

/// A collectible key, local to its tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyPickup {
    pub pos: Vec2,
    collected: bool,
}

impl KeyPickup {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            collected: false,
        }
    }

    #[inline]
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Mark the key collected. Returns false if it already was.
    pub fn collect(&mut self) -> bool {
        !std::mem::replace(&mut self.collected, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containing_negative_coords() {
        assert_eq!(TileCoord::containing(Vec2::new(-1.0, 10.0), 250.0), TileCoord::new(-1, 0));
        assert_eq!(TileCoord::containing(Vec2::new(249.0, -250.0), 250.0), TileCoord::new(0, -1));
        assert_eq!(TileCoord::containing(Vec2::new(-251.0, 0.0), 250.0), TileCoord::new(-2, 0));
    }

    #[test]
    fn test_circle_box_overlap_edges() {
        let min = Vec2::new(40.0, 40.0);
        let size = Vec2::new(80.0, 80.0);
        // Touching exactly is not an overlap
        assert!(!circle_box_overlap(Vec2::new(28.0, 80.0), 12.0, min, size));
        assert!(circle_box_overlap(Vec2::new(29.0, 80.0), 12.0, min, size));
        // Corner region counts (box test, not true circle test)
        assert!(circle_box_overlap(Vec2::new(30.0, 30.0), 12.0, min, size));
        assert!(!circle_box_overlap(Vec2::new(200.0, 80.0), 12.0, min, size));
    }

    #[test]
    fn test_obstacle_origin_translation() {
        let rect = ObstacleRect::new(40.0, 40.0, 80.0, 80.0);
        let origin = Vec2::new(250.0, 0.0);
        assert!(rect.overlaps_circle_box(origin, Vec2::new(330.0, 80.0), 8.0));
        assert!(!rect.overlaps_circle_box(origin, Vec2::new(80.0, 80.0), 8.0));
    }

    #[test]
    fn test_key_collect_is_one_way() {
        let mut key = KeyPickup::new(Vec2::new(10.0, 10.0));
        assert!(!key.is_collected());
        assert!(key.collect());
        assert!(key.is_collected());
        assert!(!key.collect());
        assert!(key.is_collected());
    }
}
