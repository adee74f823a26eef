//! Map tile grid

use crate::coords::{CellPos, PixelPos, WorldPos, CELL_SIZE};
use serde::{Deserialize, Serialize};

/// The set of addressable tiles of a map
pub trait TileGrid {
    /// Whether the cell is an addressable tile
    fn contains(&self, cell: CellPos) -> bool;
}

/// A rectangular map grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapGrid {
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
    /// Size of one cell in world pixels
    pub tile_size: u32,
}

impl Default for MapGrid {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            tile_size: 24,
        }
    }
}

impl MapGrid {
    pub fn new(width: u32, height: u32, tile_size: u32) -> Self {
        Self {
            width,
            height,
            tile_size,
        }
    }

    /// World position of a cell's center on the ground plane
    pub fn center_of_cell(&self, cell: CellPos) -> WorldPos {
        WorldPos::new(
            cell.x * CELL_SIZE + CELL_SIZE / 2,
            cell.y * CELL_SIZE + CELL_SIZE / 2,
            0,
        )
    }

    /// Project a world position to world pixels. Height raises the position on screen.
    pub fn world_px(&self, pos: WorldPos) -> PixelPos {
        let ts = self.tile_size as i64;
        let cs = CELL_SIZE as i64;
        PixelPos::new(
            (pos.x as i64 * ts).div_euclid(cs) as i32,
            ((pos.y - pos.z) as i64 * ts).div_euclid(cs) as i32,
        )
    }

    /// The cell containing a world pixel
    pub fn cell_at_world_px(&self, px: PixelPos) -> CellPos {
        let ts = self.tile_size.max(1) as i32;
        CellPos::new(px.x.div_euclid(ts), px.y.div_euclid(ts))
    }

    /// Total map size in world pixels
    pub fn size_px(&self) -> (u32, u32) {
        (self.width * self.tile_size, self.height * self.tile_size)
    }
}

impl TileGrid for MapGrid {
    fn contains(&self, cell: CellPos) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }
}
