//! Footprint validation against the map grid

use crate::coords::{CellOffset, CellPos};
use crate::grid::TileGrid;

/// Whether a footprint anchored at `anchor` lies entirely inside the grid.
///
/// The anchor cell itself is always checked, so an empty footprint is legal
/// exactly where the anchor is addressable.
pub fn footprint_fits(footprint: &[CellOffset], anchor: CellPos, grid: &dyn TileGrid) -> bool {
    grid.contains(anchor) && footprint.iter().all(|&offset| grid.contains(anchor + offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MapGrid;

    #[test]
    fn test_empty_footprint_follows_anchor() {
        let grid = MapGrid::new(4, 4, 24);
        for x in -2..6 {
            for y in -2..6 {
                let anchor = CellPos::new(x, y);
                assert_eq!(footprint_fits(&[], anchor, &grid), grid.contains(anchor));
            }
        }
    }

    #[test]
    fn test_footprint_rejected_at_right_edge() {
        let grid = MapGrid::new(8, 8, 24);
        let footprint = [CellOffset::new(0, 0), CellOffset::new(1, 0)];

        assert!(footprint_fits(&footprint, CellPos::new(6, 3), &grid));
        assert!(!footprint_fits(&footprint, CellPos::new(7, 3), &grid));
    }

    #[test]
    fn test_every_offset_must_be_addressable() {
        let grid = MapGrid::new(8, 8, 24);
        let footprint = [
            CellOffset::new(0, 0),
            CellOffset::new(1, 0),
            CellOffset::new(0, 1),
            CellOffset::new(1, 1),
        ];

        for x in -1..9 {
            for y in -1..9 {
                let anchor = CellPos::new(x, y);
                let expected = footprint.iter().all(|&o| grid.contains(anchor + o));
                assert_eq!(footprint_fits(&footprint, anchor, &grid), expected);
            }
        }
    }

    #[test]
    fn test_anchor_checked_even_when_offsets_skip_it() {
        let grid = MapGrid::new(8, 8, 24);
        // Offsets all inside, anchor outside
        let footprint = [CellOffset::new(1, 0)];
        assert!(!footprint_fits(&footprint, CellPos::new(-1, 0), &grid));
    }
}
