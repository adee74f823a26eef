//! Actor layer: placed actors of the edited map
//!
//! The layer is the registry the brush writes into. It answers the two
//! spatial questions the brush asks (which actors are rendered under a
//! pixel, which sub-cell of a cell is still free) and stores new actors.

use crate::actor::{PlacementRequest, SubCell, DEFAULT_SUB_CELLS};
use crate::coords::{CellPos, PixelPos, PixelRect, WorldOffset, WorldPos};
use crate::grid::MapGrid;
use crate::owner::PlayerReference;
use crate::template::{ActorTemplate, TemplateCatalog, TemplateRules};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Storage and spatial queries for placed actors
pub trait ActorRegistry {
    /// Actors whose rendered bounds contain the world pixel, in placement order
    fn previews_at(&self, world_px: PixelPos) -> Vec<&EditorActorPreview>;

    /// A sub-cell of `cell` no actor occupies, if any
    fn free_sub_cell_at(&self, cell: CellPos) -> Option<SubCell>;

    /// Store a new actor and return its id
    fn add(&mut self, request: PlacementRequest) -> Uuid;
}

/// A placed actor as the editor renders it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorActorPreview {
    pub id: Uuid,
    pub template: String,
    pub owner: PlayerReference,
    pub location: CellPos,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_cell: Option<SubCell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing: Option<i32>,
    /// Visual center in world units (z is the actor's height)
    pub center_position: WorldPos,
    /// Rendered bounds in world pixels
    pub bounds: PixelRect,
    /// Cells blocked by this actor
    pub occupied: Vec<CellPos>,
    /// Placed from a template that shares cells with other actors
    #[serde(default)]
    pub shares_cell: bool,
}

impl EditorActorPreview {
    /// Whether this actor takes a whole cell rather than one sub-cell.
    ///
    /// A cell-sharing actor placed without a free sub-cell blocks nothing.
    pub fn is_full_cell(&self) -> bool {
        match self.sub_cell {
            Some(s) => s == SubCell::FULL_CELL,
            None => !self.shares_cell,
        }
    }
}

/// The editor's actor layer for one map
#[derive(Debug, Clone)]
pub struct EditorActorLayer {
    map: MapGrid,
    rules: Arc<TemplateRules>,
    sub_cell_count: u8,
    actors: Vec<EditorActorPreview>,
}

impl EditorActorLayer {
    pub fn new(map: MapGrid, rules: Arc<TemplateRules>) -> Self {
        Self {
            map,
            rules,
            sub_cell_count: DEFAULT_SUB_CELLS,
            actors: Vec::new(),
        }
    }

    /// Override the number of sub-cells per shared cell
    pub fn with_sub_cells(mut self, count: u8) -> Self {
        self.sub_cell_count = count;
        self
    }

    pub fn map(&self) -> &MapGrid {
        &self.map
    }

    pub fn actors(&self) -> &[EditorActorPreview] {
        &self.actors
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&EditorActorPreview> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// Actors blocking the cell
    pub fn actors_in_cell(&self, cell: CellPos) -> impl Iterator<Item = &EditorActorPreview> {
        self.actors.iter().filter(move |a| a.occupied.contains(&cell))
    }

    fn build_preview(&self, request: PlacementRequest, template: &ActorTemplate) -> EditorActorPreview {
        let sub_offset = request.sub_cell.map_or(WorldOffset::ZERO, SubCell::offset);
        let center = self.map.center_of_cell(request.location)
            + template.center_offset()
            + sub_offset
            + WorldOffset::new(0, 0, template.altitude);

        let px = self.map.world_px(center);
        let [sw, sh] = template.preview_size;
        let [ox, oy] = template.preview_offset;
        let bounds = PixelRect::new(px.x - (ox + sw / 2), px.y - (oy + sh / 2), sw, sh);

        let offsets = template.occupied_offsets();
        let occupied = if offsets.is_empty() {
            vec![request.location]
        } else {
            offsets.into_iter().map(|o| request.location + o).collect()
        };

        EditorActorPreview {
            id: Uuid::new_v4(),
            template: request.template,
            owner: request.owner,
            location: request.location,
            sub_cell: request.sub_cell,
            facing: request.facing,
            center_position: center,
            bounds,
            occupied,
            shares_cell: template.shares_cell,
        }
    }
}

impl ActorRegistry for EditorActorLayer {
    fn previews_at(&self, world_px: PixelPos) -> Vec<&EditorActorPreview> {
        self.actors
            .iter()
            .filter(|a| a.bounds.contains(world_px))
            .collect()
    }

    fn free_sub_cell_at(&self, cell: CellPos) -> Option<SubCell> {
        let mut taken = Vec::new();
        for actor in self.actors_in_cell(cell) {
            if actor.is_full_cell() {
                return None;
            }
            taken.extend(actor.sub_cell);
        }

        (1..=self.sub_cell_count)
            .map(SubCell)
            .find(|s| !taken.contains(s))
    }

    fn add(&mut self, request: PlacementRequest) -> Uuid {
        let template = self
            .rules
            .template(&request.template)
            .unwrap_or_else(|| Arc::new(ActorTemplate::new(request.template.clone())));
        let preview = self.build_preview(request, &template);
        let id = preview.id;
        self.actors.push(preview);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer() -> EditorActorLayer {
        let rules = TemplateRules::from_templates([
            ActorTemplate::new("t01"),
            ActorTemplate::new("e1").with_shared_cells().with_preview([12, 12], [0, 0]),
            ActorTemplate::new("fact").with_building(3, 2).with_preview([72, 48], [0, 0]),
        ])
        .unwrap();
        EditorActorLayer::new(MapGrid::new(16, 16, 24), Arc::new(rules))
    }

    fn request(template: &str, x: i32, y: i32) -> PlacementRequest {
        PlacementRequest::new(template, PlayerReference::neutral(), CellPos::new(x, y))
    }

    #[test]
    fn test_add_computes_bounds_around_cell_center() {
        let mut layer = layer();
        let id = layer.add(request("t01", 2, 3));

        let actor = layer.get(id).unwrap();
        assert_eq!(actor.bounds, PixelRect::new(48, 72, 24, 24));
        assert_eq!(actor.occupied, vec![CellPos::new(2, 3)]);
        assert_eq!(layer.previews_at(PixelPos::new(60, 84)).len(), 1);
        assert!(layer.previews_at(PixelPos::new(72, 84)).is_empty());
    }

    #[test]
    fn test_building_occupies_dimensions() {
        let mut layer = layer();
        let id = layer.add(request("fact", 4, 4));

        let actor = layer.get(id).unwrap();
        assert_eq!(actor.occupied.len(), 6);
        assert!(actor.occupied.contains(&CellPos::new(6, 5)));
        // Centered on the middle of the 3x2 footprint
        assert_eq!(layer.map().world_px(actor.center_position), PixelPos::new(132, 120));
    }

    #[test]
    fn test_sub_cells_fill_up() {
        let mut layer = layer().with_sub_cells(2);
        let cell = CellPos::new(1, 1);
        assert_eq!(layer.free_sub_cell_at(cell), Some(SubCell(1)));

        let mut first = request("e1", 1, 1);
        first.sub_cell = Some(SubCell(1));
        layer.add(first);
        assert_eq!(layer.free_sub_cell_at(cell), Some(SubCell(2)));

        let mut second = request("e1", 1, 1);
        second.sub_cell = Some(SubCell(2));
        layer.add(second);
        assert_eq!(layer.free_sub_cell_at(cell), None);
    }

    #[test]
    fn test_full_cell_actor_blocks_sub_cells() {
        let mut layer = layer();
        layer.add(request("t01", 5, 5));
        assert_eq!(layer.free_sub_cell_at(CellPos::new(5, 5)), None);
        assert_eq!(layer.free_sub_cell_at(CellPos::new(5, 6)), Some(SubCell(1)));
    }

    #[test]
    fn test_shared_actor_without_sub_cell_does_not_block_cell() {
        let mut layer = layer().with_sub_cells(2);
        let cell = CellPos::new(3, 3);
        let id = layer.add(request("e1", 3, 3));

        let actor = layer.get(id).unwrap();
        assert_eq!(actor.sub_cell, None);
        assert!(actor.shares_cell);
        assert!(!actor.is_full_cell());
        assert_eq!(layer.free_sub_cell_at(cell), Some(SubCell(1)));
        assert_eq!(layer.len(), 1);
    }
}
