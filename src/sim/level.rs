//! Tile-map levels
//!
//! A level file is a grid of whitespace-separated tile codes, one row per
//! line. Code 0 is an empty cell, 1-6 pick a palette color, anything else is
//! a white brick. The grid is stretched over the level's target area.

use std::fs;
use std::path::PathBuf;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::state::{Brick, Entity};
use crate::error::{LevelError, LevelResult};

/// Brick colors for tile codes 1 through 6
pub const PALETTE: [Vec3; 6] = [
    Vec3::new(0.7, 0.3, 0.2),
    Vec3::new(0.8, 0.4, 0.2),
    Vec3::new(0.7, 0.5, 0.2),
    Vec3::new(0.7, 0.7, 0.2),
    Vec3::new(0.2, 0.7, 0.2),
    Vec3::new(0.2, 0.3, 0.7),
];

/// Rows of tile codes
pub type TileGrid = Vec<Vec<u32>>;

/// Color for a tile code; unknown codes are white
pub fn tile_color(tile: u32) -> Vec3 {
    match tile {
        1..=6 => PALETTE[(tile - 1) as usize],
        _ => Vec3::ONE,
    }
}

/// Parse a rectangular grid of tile codes.
///
/// Blank lines are skipped. Every row must be as wide as the first.
pub fn parse_tiles(text: &str) -> LevelResult<TileGrid> {
    let mut grid: TileGrid = Vec::new();

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let row_index = grid.len();
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(col, token)| {
                token.parse::<u32>().map_err(|_| LevelError::InvalidTile {
                    row: row_index,
                    col,
                    token: token.to_string(),
                })
            })
            .collect::<LevelResult<Vec<u32>>>()?;

        if let Some(first) = grid.first() {
            if row.len() != first.len() {
                return Err(LevelError::RaggedRow {
                    row: row_index,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        grid.push(row);
    }

    if grid.is_empty() {
        return Err(LevelError::Empty);
    }
    Ok(grid)
}

/// Turn a tile grid into bricks covering `size`, row-major
pub fn build_bricks(grid: &[Vec<u32>], size: Vec2) -> Vec<Brick> {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let tile = Vec2::new(size.x / cols as f32, size.y / rows as f32);

    let mut bricks = Vec::with_capacity(rows * cols);
    for (y, row) in grid.iter().enumerate() {
        for (x, &code) in row.iter().enumerate() {
            let pos = Vec2::new(tile.x * x as f32, tile.y * y as f32);
            let mut body = Entity::new(pos, tile, tile_color(code));
            body.destroyed = code == 0;
            bricks.push(Brick { body, tile: code });
        }
    }
    bricks
}

/// Where a level's tile grid comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LevelSource {
    File(PathBuf),
    /// Grid held in memory
    Text(String),
}

impl LevelSource {
    pub fn read(&self) -> LevelResult<String> {
        match self {
            LevelSource::File(path) => fs::read_to_string(path).map_err(|source| LevelError::Io {
                path: path.clone(),
                source,
            }),
            LevelSource::Text(text) => Ok(text.clone()),
        }
    }
}

/// A level: its source, target area and the bricks built from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub source: LevelSource,
    /// Area the grid is stretched over
    pub size: Vec2,
    pub bricks: Vec<Brick>,
}

impl Level {
    /// An unloaded level
    pub fn new(source: LevelSource, size: Vec2) -> Self {
        Self {
            source,
            size,
            bricks: Vec::new(),
        }
    }

    /// Rebuild the bricks from the source, returning how many were built.
    ///
    /// Previous bricks are dropped first, so a failed load leaves the level
    /// empty.
    pub fn try_load(&mut self) -> LevelResult<usize> {
        self.bricks.clear();
        let text = self.source.read()?;
        let grid = parse_tiles(&text)?;
        self.bricks = build_bricks(&grid, self.size);
        Ok(self.bricks.len())
    }

    /// Like `try_load`, but a failure only logs a warning and leaves the
    /// level blank so the round can still be played.
    pub fn load(&mut self) -> usize {
        match self.try_load() {
            Ok(count) => {
                log::info!(
                    "Loaded level: {} tiles, {} bricks",
                    count,
                    self.remaining()
                );
                count
            }
            Err(e) => {
                log::warn!("Level failed to load, continuing with no bricks: {}", e);
                0
            }
        }
    }

    /// Bricks that are drawn and collide
    pub fn visible_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| !b.body.destroyed)
    }

    /// Number of bricks still standing
    pub fn remaining(&self) -> usize {
        self.visible_bricks().count()
    }
}
