//! Floating actor preview that follows the cursor and the camera

use bevy::prelude::*;
use bevy_brush_core::{
    ActorTemplate, CellPos, GridTransform, PixelPos, PixelRect, PlayerReference, WorldOffset,
};

/// Inits the preview is rendered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewInits {
    pub owner: PlayerReference,
    pub facing: i32,
    pub turret_facing: i32,
}

/// Template bound to the preview by the active brush
#[derive(Debug, Clone, PartialEq, Eq)]
struct PreviewBinding {
    template: String,
    inits: PreviewInits,
}

/// Screen-space preview widget state
#[derive(Resource, Debug, Clone, Default)]
pub struct ActorPreview {
    /// Bounds in view pixels, recomputed every tick
    pub bounds: PixelRect,
    /// Image size in pixels at zoom 1
    pub ideal_size: [i32; 2],
    /// Image offset in pixels at zoom 1
    pub preview_offset: [i32; 2],
    /// Render scale, follows the camera zoom
    pub scale: f32,
    binding: Option<PreviewBinding>,
}

impl ActorPreview {
    /// Bind a template to the preview
    pub fn set_preview(&mut self, template: &ActorTemplate, inits: PreviewInits) {
        self.ideal_size = template.preview_size;
        self.preview_offset = template.preview_offset;
        self.binding = Some(PreviewBinding {
            template: template.name.clone(),
            inits,
        });
    }

    /// Release the binding; the preview stops drawing
    pub fn clear(&mut self) {
        self.binding = None;
    }

    /// Visible while a brush has it bound
    pub fn is_visible(&self) -> bool {
        self.binding.is_some()
    }

    pub fn template(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.template.as_str())
    }

    pub fn inits(&self) -> Option<&PreviewInits> {
        self.binding.as_ref().map(|b| &b.inits)
    }
}

/// Screen rectangle of a preview whose anchor projects to `origin`
pub fn preview_bounds(origin: PixelPos, zoom: f32, size: [i32; 2], offset: [i32; 2]) -> PixelRect {
    let [sx, sy] = size;
    let [ox, oy] = offset;
    PixelRect::new(
        origin.x - (zoom * (ox + sx / 2) as f32) as i32,
        origin.y - (zoom * (oy + sy / 2) as f32) as i32,
        (zoom * sx as f32) as i32,
        (zoom * sy as f32) as i32,
    )
}

/// Position and scale the preview for an anchor cell under the current camera
pub fn sync_preview(
    anchor: CellPos,
    center_offset: WorldOffset,
    viewport: &dyn GridTransform,
    preview: &mut ActorPreview,
) {
    let pos = viewport.cell_center_world(anchor) + center_offset;
    let origin = viewport.world_to_screen(pos);
    let zoom = viewport.zoom();

    preview.scale = zoom;
    preview.bounds = preview_bounds(origin, zoom, preview.ideal_size, preview.preview_offset);
}
