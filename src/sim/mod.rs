//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Time comes in as a wall-clock value per frame
//! - Randomness comes from an injected [`RandomSource`]
//! - Input comes in as [`Command`]s

pub mod collision;
pub mod hazard;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod tick;
pub mod tile;
pub mod viewport;

pub use collision::{CollisionField, MoveIntent, move_player, step_move};
pub use hazard::{SweepCone, sweep_angle, sweep_damage};
pub use rng::{FixedSequence, RandomSource, SeededSource};
pub use snapshot::{FrameOutcome, GameOverSnapshot, HudReadout, RenderSnapshot, TileView};
pub use state::{GameOverCause, GamePhase, GameState, Meter, Player};
pub use store::TileFeatureStore;
pub use tick::{Command, Direction, apply_command, frame};
pub use tile::{KeyPickup, ObstacleRect, TileCoord, circle_box_overlap};
pub use viewport::{TileWindow, Viewport, VisibleTile};
