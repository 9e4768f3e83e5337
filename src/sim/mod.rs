//! Simulation module
//!
//! All gameplay logic lives here. It is single-threaded and frame-driven:
//! - `tick` is the only mutator of the game state
//! - Stable iteration order (balls and bricks keep their collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Collision, Direction, ball_collision, circle_aabb, vector_direction};
pub use level::{Level, LevelSource, PALETTE, TileGrid, build_bricks, parse_tiles, tile_color};
pub use state::{Ball, BallCounts, BallState, Brick, Entity, GameEvent, GameState, Paddle};
pub use tick::{TickInput, tick};
