//! Editor camera over the map canvas

use bevy::prelude::*;
use bevy_brush_core::{CellPos, GridTransform, MapGrid, PixelPos, WorldPos};

const MIN_ZOOM: f32 = 0.25;
const MAX_ZOOM: f32 = 4.0;

/// Pan and zoom state of the map canvas.
///
/// `center` is the world pixel shown at the middle of the view.
#[derive(Resource, Debug, Clone)]
pub struct EditorViewport {
    pub map: MapGrid,
    pub center: Vec2,
    pub zoom: f32,
    /// View size in screen pixels
    pub size: Vec2,
    /// Cursor in view pixels, if it is over the window
    pub cursor: Option<Vec2>,
    pub last_pointer: Vec2,
}

impl EditorViewport {
    pub fn new(map: MapGrid) -> Self {
        let mut viewport = Self {
            map,
            center: Vec2::ZERO,
            zoom: 1.0,
            size: Vec2::new(1280.0, 720.0),
            cursor: None,
            last_pointer: Vec2::ZERO,
        };
        viewport.center_on_map();
        viewport
    }

    /// Put the middle of the map at the middle of the view
    pub fn center_on_map(&mut self) {
        let (w, h) = self.map.size_px();
        self.center = Vec2::new(w as f32, h as f32) / 2.0;
    }

    /// Multiply the zoom, clamped to the supported range
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Move the view by a screen-pixel delta (content follows the cursor)
    pub fn pan(&mut self, screen_delta: Vec2) {
        self.center -= screen_delta / self.zoom;
    }

    pub fn view_to_world(&self, view: Vec2) -> Vec2 {
        self.center + (view - self.size / 2.0) / self.zoom
    }

    pub fn world_to_view(&self, world: Vec2) -> Vec2 {
        (world - self.center) * self.zoom + self.size / 2.0
    }
}

impl Default for EditorViewport {
    fn default() -> Self {
        Self::new(MapGrid::default())
    }
}

fn to_pixel(v: Vec2) -> PixelPos {
    PixelPos::new(v.x.floor() as i32, v.y.floor() as i32)
}

impl GridTransform for EditorViewport {
    fn pixel_to_cell(&self, view_px: PixelPos) -> CellPos {
        self.map.cell_at_world_px(self.view_to_world_px(view_px))
    }

    fn view_to_world_px(&self, view_px: PixelPos) -> PixelPos {
        to_pixel(self.view_to_world(Vec2::new(view_px.x as f32, view_px.y as f32)))
    }

    fn cell_center_world(&self, cell: CellPos) -> WorldPos {
        self.map.center_of_cell(cell)
    }

    fn world_to_screen(&self, pos: WorldPos) -> PixelPos {
        let px = self.map.world_px(pos);
        to_pixel(self.world_to_view(Vec2::new(px.x as f32, px.y as f32)))
    }

    fn zoom(&self) -> f32 {
        self.zoom
    }

    fn last_pointer_pixel(&self) -> PixelPos {
        to_pixel(self.last_pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> EditorViewport {
        let mut viewport = EditorViewport::new(MapGrid::new(10, 10, 24));
        viewport.size = Vec2::new(240.0, 240.0);
        viewport
    }

    #[test]
    fn test_centered_map_fills_view_at_unit_zoom() {
        let viewport = viewport();
        assert_eq!(viewport.center, Vec2::new(120.0, 120.0));
        assert_eq!(viewport.pixel_to_cell(PixelPos::new(0, 0)), CellPos::new(0, 0));
        assert_eq!(viewport.pixel_to_cell(PixelPos::new(239, 239)), CellPos::new(9, 9));
    }

    #[test]
    fn test_world_to_screen_inverts_view_to_world() {
        let mut viewport = viewport();
        viewport.zoom = 2.0;
        let screen = viewport.world_to_screen(viewport.cell_center_world(CellPos::new(5, 5)));
        // Cell (5, 5) center is world pixel (132, 132); 12 pixels from center at zoom 2
        assert_eq!(screen, PixelPos::new(144, 144));
        assert_eq!(viewport.pixel_to_cell(screen), CellPos::new(5, 5));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut viewport = viewport();
        viewport.zoom_by(100.0);
        assert_eq!(viewport.zoom, MAX_ZOOM);
        viewport.zoom_by(0.0001);
        assert_eq!(viewport.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_pan_moves_content_with_cursor() {
        let mut viewport = viewport();
        let before = viewport.pixel_to_cell(PixelPos::new(60, 60));
        viewport.pan(Vec2::new(24.0, 0.0));
        let after = viewport.pixel_to_cell(PixelPos::new(60, 60));
        assert_eq!(after, CellPos::new(before.x - 1, before.y));
    }

    #[test]
    fn test_offscreen_pixels_map_outside_grid() {
        let viewport = viewport();
        assert_eq!(viewport.pixel_to_cell(PixelPos::new(-1, 5)), CellPos::new(-1, 0));
    }
}
