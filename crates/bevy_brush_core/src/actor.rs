//! Placement requests handed to the actor layer

use crate::coords::{CellPos, WorldOffset, CELL_SIZE};
use crate::owner::PlayerReference;
use serde::{Deserialize, Serialize};

/// Default body and turret facing for newly placed actors
pub const DEFAULT_FACING: i32 = 92;

/// Number of sub-cells available in a shared cell
pub const DEFAULT_SUB_CELLS: u8 = 5;

/// A sub-position inside one cell. Index 0 is the full cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubCell(pub u8);

impl SubCell {
    pub const FULL_CELL: SubCell = SubCell(0);

    /// World offset of the sub-cell from the cell center
    pub fn offset(self) -> WorldOffset {
        let q = CELL_SIZE / 4;
        match self.0 {
            1 => WorldOffset::new(-q, -q, 0),
            2 => WorldOffset::new(q, -q, 0),
            3 => WorldOffset::new(0, 0, 0),
            4 => WorldOffset::new(-q, q, 0),
            5 => WorldOffset::new(q, q, 0),
            _ => WorldOffset::ZERO,
        }
    }
}

/// One stamp: what to place, for whom and where
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    /// Template name
    pub template: String,
    pub owner: PlayerReference,
    /// Anchor cell after the template's location offset was applied
    pub location: CellPos,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turret_facing: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_cell: Option<SubCell>,
}

impl PlacementRequest {
    pub fn new(template: impl Into<String>, owner: PlayerReference, location: CellPos) -> Self {
        Self {
            template: template.into(),
            owner,
            location,
            facing: None,
            turret_facing: None,
            sub_cell: None,
        }
    }
}
