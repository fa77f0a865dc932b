//! Lazily generated, memoized tile features
//!
//! A tile's obstacles and keys are generated the first time they are asked
//! for and then kept for the rest of the run. Entries are never evicted, so
//! the store grows with the explored area.

use std::collections::HashMap;

use glam::Vec2;

use super::rng::RandomSource;
use super::tile::{KeyPickup, ObstacleRect, TileCoord};
use crate::config::GameConfig;

/// Generation parameters, copied out of [`GameConfig`]
#[derive(Debug, Clone, Copy)]
struct GenParams {
    tile_size: f32,
    obstacle_count: u32,
    obstacle_size: Vec2,
    obstacle_jitter: f32,
    key_radius: f32,
    key_spawn_chance: f32,
    key_placement_attempts: u32,
}

impl From<&GameConfig> for GenParams {
    fn from(config: &GameConfig) -> Self {
        Self {
            tile_size: config.tile_size,
            obstacle_count: config.obstacle_count,
            obstacle_size: Vec2::new(config.obstacle_width, config.obstacle_height),
            obstacle_jitter: config.obstacle_jitter,
            key_radius: config.key_radius,
            key_spawn_chance: config.key_spawn_chance,
            key_placement_attempts: config.key_placement_attempts,
        }
    }
}

/// Memoized per-tile obstacle and key layouts
pub struct TileFeatureStore {
    params: GenParams,
    rng: Box<dyn RandomSource>,
    obstacles: HashMap<TileCoord, Vec<ObstacleRect>>,
    keys: HashMap<TileCoord, Vec<KeyPickup>>,
}

impl std::fmt::Debug for TileFeatureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileFeatureStore")
            .field("obstacle_tiles", &self.obstacles.len())
            .field("key_tiles", &self.keys.len())
            .finish()
    }
}

impl TileFeatureStore {
    pub fn new(config: &GameConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            params: GenParams::from(config),
            rng,
            obstacles: HashMap::new(),
            keys: HashMap::new(),
        }
    }

    /// Obstacles of a tile, generating them on first access
    pub fn obstacles(&mut self, coord: TileCoord) -> &[ObstacleRect] {
        let Self {
            params,
            rng,
            obstacles,
            ..
        } = self;
        obstacles
            .entry(coord)
            .or_insert_with(|| generate_obstacles(params, rng.as_mut(), coord))
    }

    /// Keys of a tile, generating them (and the obstacles they avoid) on first access
    pub fn keys(&mut self, coord: TileCoord) -> &[KeyPickup] {
        self.keys_mut(coord)
    }

    /// Mutable keys of a tile, for pickup
    pub fn keys_mut(&mut self, coord: TileCoord) -> &mut [KeyPickup] {
        if !self.keys.contains_key(&coord) {
            let generated = self.generate_keys(coord);
            self.keys.insert(coord, generated);
        }
        self.keys.entry(coord).or_default()
    }

    /// Number of tiles with generated obstacles
    pub fn tile_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether a tile's obstacles exist yet (no generation)
    pub fn is_generated(&self, coord: TileCoord) -> bool {
        self.obstacles.contains_key(&coord)
    }

    /// Install a fixed obstacle layout for a tile not generated yet.
    ///
    /// Returns false (and changes nothing) if the tile already has obstacles.
    pub fn seed_obstacles(&mut self, coord: TileCoord, layout: Vec<ObstacleRect>) -> bool {
        if self.obstacles.contains_key(&coord) {
            return false;
        }
        self.obstacles.insert(coord, layout);
        true
    }

    /// Install a fixed key layout for a tile not generated yet.
    pub fn seed_keys(&mut self, coord: TileCoord, keys: Vec<KeyPickup>) -> bool {
        if self.keys.contains_key(&coord) {
            return false;
        }
        self.keys.insert(coord, keys);
        true
    }

    fn generate_keys(&mut self, coord: TileCoord) -> Vec<KeyPickup> {
        let params = self.params;
        let mut keys = Vec::new();

        // The roll is spent even when no free spot is found below
        if self.rng.next_f32() >= params.key_spawn_chance {
            return keys;
        }

        // Generate obstacles first so the key can avoid them
        self.obstacles(coord);
        let Some(obstacles) = self.obstacles.get(&coord) else {
            return keys;
        };

        for _ in 0..params.key_placement_attempts {
            let pos = Vec2::new(
                self.rng.next_f32() * params.tile_size,
                self.rng.next_f32() * params.tile_size,
            );
            let blocked = obstacles
                .iter()
                .any(|rect| rect.overlaps_circle_box(Vec2::ZERO, pos, params.key_radius));
            if !blocked {
                keys.push(KeyPickup::new(pos));
                break;
            }
        }

        if keys.is_empty() {
            log::trace!("Tile {} rolled a key but found no free spot", coord);
        }
        keys
    }
}

fn generate_obstacles(
    params: &GenParams,
    rng: &mut dyn RandomSource,
    coord: TileCoord,
) -> Vec<ObstacleRect> {
    let size = params.obstacle_size;
    let layout = (0..params.obstacle_count)
        .map(|_| {
            let jitter_x = (rng.next_f32() - 0.5) * params.obstacle_jitter;
            let jitter_y = (rng.next_f32() - 0.5) * params.obstacle_jitter;
            ObstacleRect::new(size.x / 2.0 + jitter_x, size.y / 2.0 + jitter_y, size.x, size.y)
        })
        .collect();
    log::trace!("Generated obstacles for tile {}", coord);
    layout
}
