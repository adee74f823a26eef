//! Coordinate types for cells, world positions and pixels
//!
//! Three spaces are in play while painting:
//! - cell space (`CellPos`, `CellOffset`) addressing grid tiles
//! - world space (`WorldPos`, `WorldOffset`) with `CELL_SIZE` units per cell and a height axis
//! - pixel space (`PixelPos`, `PixelRect`), used for both world pixels and view (screen) pixels

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub};

/// World units spanned by one grid cell along each horizontal axis
pub const CELL_SIZE: i32 = 1024;

/// A grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub const ZERO: CellPos = CellPos { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A relative cell vector (footprint entries, location offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellOffset {
    pub x: i32,
    pub y: i32,
}

impl CellOffset {
    pub const ZERO: CellOffset = CellOffset { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<CellOffset> for CellPos {
    type Output = CellPos;

    fn add(self, rhs: CellOffset) -> CellPos {
        CellPos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for CellPos {
    type Output = CellOffset;

    fn sub(self, rhs: CellPos) -> CellOffset {
        CellOffset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for CellOffset {
    type Output = CellOffset;

    fn neg(self) -> CellOffset {
        CellOffset::new(-self.x, -self.y)
    }
}

/// A position in world units; `z` is height above the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl WorldPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// A relative world vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WorldOffset {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl WorldOffset {
    pub const ZERO: WorldOffset = WorldOffset { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl Add<WorldOffset> for WorldPos {
    type Output = WorldPos;

    fn add(self, rhs: WorldOffset) -> WorldPos {
        WorldPos::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add for WorldOffset {
    type Output = WorldOffset;

    fn add(self, rhs: WorldOffset) -> WorldOffset {
        WorldOffset::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for WorldOffset {
    fn add_assign(&mut self, rhs: WorldOffset) {
        *self = *self + rhs;
    }
}

impl Sub for WorldPos {
    type Output = WorldOffset;

    fn sub(self, rhs: WorldPos) -> WorldOffset {
        WorldOffset::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// An integer pixel position (world pixels or view pixels depending on context)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub const ZERO: PixelPos = PixelPos { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance, exact in integer arithmetic
    pub fn distance_squared(self, other: PixelPos) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }
}

/// An axis-aligned pixel rectangle with a top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point (rounded toward the origin for odd sizes)
    pub fn center(&self) -> PixelPos {
        PixelPos::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Whether the pixel lies inside (right and bottom edges excluded)
    pub fn contains(&self, p: PixelPos) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.x + self.width && p.y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_arithmetic() {
        let cell = CellPos::new(3, 4) + CellOffset::new(-1, 2);
        assert_eq!(cell, CellPos::new(2, 6));
        assert_eq!(cell - CellPos::new(2, 2), CellOffset::new(0, 4));
        assert_eq!(-CellOffset::new(1, -2), CellOffset::new(-1, 2));
    }

    #[test]
    fn test_rect_contains_excludes_far_edges() {
        let rect = PixelRect::new(10, 10, 4, 4);
        assert!(rect.contains(PixelPos::new(10, 10)));
        assert!(rect.contains(PixelPos::new(13, 13)));
        assert!(!rect.contains(PixelPos::new(14, 12)));
        assert!(!rect.contains(PixelPos::new(9, 12)));
        assert_eq!(rect.center(), PixelPos::new(12, 12));
    }

    #[test]
    fn test_distance_squared() {
        let a = PixelPos::new(0, 0);
        assert_eq!(a.distance_squared(PixelPos::new(3, 4)), 25);
        assert_eq!(PixelPos::new(-3, -4).distance_squared(a), 25);

        // The difference does not fit in i32
        let far = PixelPos::new(i32::MAX, 0);
        let near = PixelPos::new(-1, 0);
        assert_eq!(far.distance_squared(near), 1_i64 << 62);
    }
}
