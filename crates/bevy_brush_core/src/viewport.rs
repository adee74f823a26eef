//! Camera capability consumed by editor tools

use crate::coords::{CellPos, PixelPos, WorldPos};

/// Read-only view of the editor camera.
///
/// "View" pixels are screen pixels relative to the viewport's top-left
/// corner; "world" pixels are unzoomed map pixels.
pub trait GridTransform {
    /// Cell under a view pixel
    fn pixel_to_cell(&self, view_px: PixelPos) -> CellPos;

    /// World pixel under a view pixel
    fn view_to_world_px(&self, view_px: PixelPos) -> PixelPos;

    /// Center of a cell in world units
    fn cell_center_world(&self, cell: CellPos) -> WorldPos;

    /// View pixel a world position is drawn at
    fn world_to_screen(&self, pos: WorldPos) -> PixelPos;

    /// Current zoom factor (view pixels per world pixel)
    fn zoom(&self) -> f32;

    /// Most recent pointer position in view pixels
    fn last_pointer_pixel(&self) -> PixelPos;
}
