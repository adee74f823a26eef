//! Core data structures for the actor placement brush
//!
//! This crate provides the Bevy-independent pieces the brush works with:
//! - Coordinates for cells, world units and pixels
//! - `MapGrid` and footprint validation
//! - `ActorTemplate` and the `TemplateRules` catalog
//! - `SimilarityGroups` of interchangeable decorations
//! - `EditorActorLayer`, the registry of placed actors
//! - `GridTransform`, the camera capability tools read from

mod actor;
mod coords;
mod footprint;
mod grid;
mod layer;
mod owner;
mod similarity;
mod template;
mod viewport;

pub use actor::{PlacementRequest, SubCell, DEFAULT_FACING, DEFAULT_SUB_CELLS};
pub use coords::{CellOffset, CellPos, PixelPos, PixelRect, WorldOffset, WorldPos, CELL_SIZE};
pub use footprint::footprint_fits;
pub use grid::{MapGrid, TileGrid};
pub use layer::{ActorRegistry, EditorActorLayer, EditorActorPreview};
pub use owner::PlayerReference;
pub use similarity::SimilarityGroups;
pub use template::{
    ActorTemplate, BuildingInfo, RulesError, TemplateCatalog, TemplateRules, HIDDEN_MARKER,
};
pub use viewport::GridTransform;
