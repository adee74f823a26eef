//! Actor brush - stamps actor templates while the primary button is held
//!
//! The brush is idle until the primary button goes down, then stamps on the
//! press, on every drag move and on the release. Drag moves never stamp on
//! top of an actor already under the cursor and may swap in a similar
//! decoration variant. Releasing the secondary button hands control back to
//! the host.

use bevy::log::{debug, info};
use bevy_brush_core::{
    footprint_fits, ActorRegistry, ActorTemplate, CellOffset, CellPos, GridTransform,
    PixelPos, PlacementRequest, PlayerReference, SimilarityGroups, TemplateCatalog, TileGrid,
    WorldOffset, DEFAULT_FACING,
};
use std::sync::Arc;

use super::input::{PointerButton, PointerEvent, PointerInput};
use super::preview::{sync_preview, ActorPreview, PreviewInits};
use super::priority::{actor_under_cursor, DepthTieBreak};
use super::substitution::{FastRandSource, RandomSource, SubstitutionPicker};

/// Brush construction errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrushError {
    /// The template is not in the catalog
    UnknownTemplate(String),
    /// The template is an abstract base definition
    HiddenTemplate(String),
}

impl std::fmt::Display for BrushError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrushError::UnknownTemplate(name) => write!(f, "Unknown actor template: {}", name),
            BrushError::HiddenTemplate(name) => {
                write!(f, "Actor template '{}' is not paintable", name)
            }
        }
    }
}

impl std::error::Error for BrushError {}

/// What the host should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushResponse {
    /// Not for this brush; route it elsewhere
    Unhandled,
    /// Consumed, whether or not anything was placed
    Handled,
    /// Consumed; the host should drop this brush
    Deselect,
}

impl BrushResponse {
    pub fn is_handled(self) -> bool {
        self != BrushResponse::Unhandled
    }
}

/// Tunables read when the brush is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushSettings {
    /// Facing for placed actors and the preview
    pub facing: i32,
    pub tie_break: DepthTieBreak,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            facing: DEFAULT_FACING,
            tie_break: DepthTieBreak::default(),
        }
    }
}

/// Mutable interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushState {
    pub facing: i32,
    /// Primary button is down and stamping
    pub painting: bool,
    /// Last pointer position seen, in view pixels
    pub last_pointer: PixelPos,
}

/// Collaborators a brush reads while it is being created
pub struct BrushSetup<'a> {
    pub catalog: &'a dyn TemplateCatalog,
    pub groups: &'a SimilarityGroups,
    pub viewport: &'a dyn GridTransform,
    pub preview: &'a mut ActorPreview,
}

/// Collaborators a brush uses while handling an event
pub struct BrushContext<'a> {
    pub viewport: &'a dyn GridTransform,
    pub map: &'a dyn TileGrid,
    pub actors: &'a mut dyn ActorRegistry,
}

/// Brush that paints one actor template
#[derive(Debug)]
pub struct ActorBrush {
    template: Arc<ActorTemplate>,
    owner: PlayerReference,
    footprint: Vec<CellOffset>,
    location_offset: CellOffset,
    preview_offset: WorldOffset,
    tie_break: DepthTieBreak,
    substitutions: SubstitutionPicker,
    state: BrushState,
}

impl ActorBrush {
    /// Create a brush with a freshly seeded random source
    pub fn new(
        template: &str,
        owner: PlayerReference,
        settings: BrushSettings,
        setup: BrushSetup<'_>,
    ) -> Result<Self, BrushError> {
        Self::with_random_source(template, owner, settings, setup, Box::new(FastRandSource::new()))
    }

    /// Create a brush drawing substitutions from `rng`.
    ///
    /// Binds the preview and positions it once so the first frame draws correctly.
    pub fn with_random_source(
        template: &str,
        owner: PlayerReference,
        settings: BrushSettings,
        setup: BrushSetup<'_>,
        rng: Box<dyn RandomSource + Send + Sync>,
    ) -> Result<Self, BrushError> {
        let template = setup
            .catalog
            .template(template)
            .ok_or_else(|| BrushError::UnknownTemplate(template.to_string()))?;
        if template.is_hidden() {
            return Err(BrushError::HiddenTemplate(template.name.clone()));
        }

        let substitutions = SubstitutionPicker::new(&template, setup.groups, setup.catalog, rng);

        setup.preview.set_preview(
            &template,
            PreviewInits {
                owner: owner.clone(),
                facing: settings.facing,
                turret_facing: settings.facing,
            },
        );

        let mut brush = Self {
            footprint: template.occupied_offsets(),
            location_offset: template.location_offset(),
            preview_offset: template.center_offset(),
            template,
            owner,
            tie_break: settings.tie_break,
            substitutions,
            state: BrushState {
                facing: settings.facing,
                painting: false,
                last_pointer: setup.viewport.last_pointer_pixel(),
            },
        };
        brush.tick(setup.viewport, setup.preview);

        info!(
            "Actor brush: {} for {} ({} substitutes)",
            brush.template.name,
            brush.owner.name,
            brush.substitutions.candidates().len()
        );
        Ok(brush)
    }

    pub fn template(&self) -> &ActorTemplate {
        &self.template
    }

    pub fn owner(&self) -> &PlayerReference {
        &self.owner
    }

    pub fn state(&self) -> &BrushState {
        &self.state
    }

    pub fn is_painting(&self) -> bool {
        self.state.painting
    }

    /// Handle one pointer event
    pub fn handle_pointer_input(
        &mut self,
        input: &PointerInput,
        ctx: &mut BrushContext<'_>,
    ) -> BrushResponse {
        self.state.last_pointer = input.location;

        match input.button {
            PointerButton::Primary => {}
            PointerButton::Secondary => {
                if input.event == PointerEvent::Up {
                    return BrushResponse::Deselect;
                }
                return BrushResponse::Unhandled;
            }
            PointerButton::Middle | PointerButton::None => return BrushResponse::Unhandled,
        }

        match input.event {
            PointerEvent::Down => self.state.painting = true,
            PointerEvent::Up => self.state.painting = false,
            PointerEvent::Move if !self.state.painting => return BrushResponse::Handled,
            PointerEvent::Move => {}
        }

        let cell = ctx.viewport.pixel_to_cell(input.location) + self.location_offset;
        if !footprint_fits(&self.footprint, cell, ctx.map) {
            debug!("{} does not fit at {:?}", self.template.name, cell);
            return BrushResponse::Handled;
        }

        let mut template = Arc::clone(&self.template);
        if input.event == PointerEvent::Move {
            let world_px = ctx.viewport.view_to_world_px(input.location);
            let previews = ctx.actors.previews_at(world_px);
            if let Some(under) = actor_under_cursor(world_px, &previews, self.tie_break) {
                debug!("{} already under cursor at {:?}", under.template, world_px);
                return BrushResponse::Handled;
            }

            if let Some(substitute) = self.substitutions.pick() {
                template = substitute;
            }
        }

        let request = self.placement_request(&template, cell, &*ctx.actors);
        let id = ctx.actors.add(request);
        debug!("Placed {} at {:?} ({})", template.name, cell, id);

        BrushResponse::Handled
    }

    fn placement_request(
        &self,
        template: &ActorTemplate,
        cell: CellPos,
        actors: &dyn ActorRegistry,
    ) -> PlacementRequest {
        let mut request = PlacementRequest::new(template.name.clone(), self.owner.clone(), cell);

        if template.shares_cell {
            request.sub_cell = actors.free_sub_cell_at(cell);
        }
        if template.facing {
            request.facing = Some(self.state.facing);
        }
        if template.turret {
            request.turret_facing = Some(self.state.facing);
        }

        request
    }

    /// Move the preview under the last pointer position for the current camera
    pub fn tick(&mut self, viewport: &dyn GridTransform, preview: &mut ActorPreview) {
        let cell = viewport.pixel_to_cell(self.state.last_pointer) + self.location_offset;
        sync_preview(cell, self.preview_offset, viewport, preview);
    }

    /// Release the preview binding when the brush is dropped
    pub fn release(&self, preview: &mut ActorPreview) {
        preview.clear();
        info!("Actor brush released: {}", self.template.name);
    }
}
