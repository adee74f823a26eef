//! Actor templates and the read-only template catalog

use crate::coords::{CellOffset, WorldOffset, CELL_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Names containing this marker are abstract base definitions and never painted
pub const HIDDEN_MARKER: char = '^';

/// Building-specific layout information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingInfo {
    /// Footprint extent in cells (width, height)
    pub dimensions: CellOffset,
    /// Additional offset of the visual center in world units
    #[serde(default)]
    pub local_center_offset: WorldOffset,
}

impl BuildingInfo {
    /// Offset from the cursor cell to the top-left footprint cell, so the
    /// building is centered under the cursor
    pub fn location_offset(&self) -> CellOffset {
        let dim = self.dimensions;
        let y = if dim.y > 1 { (dim.y + 1) / 2 } else { 0 };
        -CellOffset::new(dim.x / 2, y)
    }

    /// Offset from the top-left cell center to the footprint's visual center
    pub fn center_offset(&self) -> WorldOffset {
        let dim = self.dimensions;
        let half = WorldOffset::new(
            (dim.x - 1) * CELL_SIZE / 2,
            (dim.y - 1) * CELL_SIZE / 2,
            0,
        );
        half + self.local_center_offset
    }

    /// Every cell of the dimensions rectangle
    pub fn rect_footprint(&self) -> Vec<CellOffset> {
        let dim = self.dimensions;
        (0..dim.y.max(0))
            .flat_map(|y| (0..dim.x.max(0)).map(move |x| CellOffset::new(x, y)))
            .collect()
    }
}

/// An immutable template that the brush stamps into the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorTemplate {
    /// Unique identifier, e.g. "t01" or "fact"
    pub name: String,
    /// Occupied cells relative to the anchor; empty for plain single-cell actors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub footprint: Vec<CellOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<BuildingInfo>,
    /// Has a body facing
    #[serde(default)]
    pub facing: bool,
    /// Has a turret with its own facing
    #[serde(default)]
    pub turret: bool,
    /// Several instances may share one cell on distinct sub-cells
    #[serde(default)]
    pub shares_cell: bool,
    /// Height of placed instances above the ground, in world units
    #[serde(default)]
    pub altitude: i32,
    /// Preview image size in pixels at zoom 1
    #[serde(default = "default_preview_size")]
    pub preview_size: [i32; 2],
    /// Preview image offset in pixels at zoom 1
    #[serde(default)]
    pub preview_offset: [i32; 2],
}

fn default_preview_size() -> [i32; 2] {
    [24, 24]
}

impl ActorTemplate {
    /// Create a plain single-cell template with default preview settings
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            footprint: Vec::new(),
            building: None,
            facing: false,
            turret: false,
            shares_cell: false,
            altitude: 0,
            preview_size: default_preview_size(),
            preview_offset: [0, 0],
        }
    }

    pub fn with_footprint(mut self, footprint: Vec<CellOffset>) -> Self {
        self.footprint = footprint;
        self
    }

    pub fn with_building(mut self, width: i32, height: i32) -> Self {
        self.building = Some(BuildingInfo {
            dimensions: CellOffset::new(width, height),
            local_center_offset: WorldOffset::ZERO,
        });
        self
    }

    pub fn with_facing(mut self, turret: bool) -> Self {
        self.facing = true;
        self.turret = turret;
        self
    }

    pub fn with_shared_cells(mut self) -> Self {
        self.shares_cell = true;
        self
    }

    pub fn with_preview(mut self, size: [i32; 2], offset: [i32; 2]) -> Self {
        self.preview_size = size;
        self.preview_offset = offset;
        self
    }

    /// Abstract base definitions are excluded from painting
    pub fn is_hidden(&self) -> bool {
        self.name.contains(HIDDEN_MARKER)
    }

    /// Cells occupied relative to the top-left anchor
    pub fn occupied_offsets(&self) -> Vec<CellOffset> {
        if !self.footprint.is_empty() {
            return self.footprint.clone();
        }
        self.building
            .as_ref()
            .map(BuildingInfo::rect_footprint)
            .unwrap_or_default()
    }

    /// Offset applied to the cursor cell before placement
    pub fn location_offset(&self) -> CellOffset {
        self.building
            .as_ref()
            .map(BuildingInfo::location_offset)
            .unwrap_or(CellOffset::ZERO)
    }

    /// Offset from the anchor cell center to the visual center
    pub fn center_offset(&self) -> WorldOffset {
        self.building
            .as_ref()
            .map(BuildingInfo::center_offset)
            .unwrap_or(WorldOffset::ZERO)
    }
}

/// Read-only set of templates available for painting
pub trait TemplateCatalog {
    /// Look up a template by name
    fn template(&self, name: &str) -> Option<Arc<ActorTemplate>>;

    /// All non-hidden templates, ordered by name
    fn paintable(&self) -> Vec<Arc<ActorTemplate>>;
}

#[derive(Debug)]
pub enum RulesError {
    IoError(String),
    ParseError(String),
    DuplicateTemplate(String),
}

impl std::fmt::Display for RulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RulesError::IoError(e) => write!(f, "IO error: {}", e),
            RulesError::ParseError(e) => write!(f, "Parse error: {}", e),
            RulesError::DuplicateTemplate(name) => {
                write!(f, "Template '{}' is defined more than once", name)
            }
        }
    }
}

impl std::error::Error for RulesError {}

/// Template catalog backed by an ordered map
#[derive(Debug, Clone, Default)]
pub struct TemplateRules {
    templates: BTreeMap<String, Arc<ActorTemplate>>,
}

impl TemplateRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate names
    pub fn from_templates(
        templates: impl IntoIterator<Item = ActorTemplate>,
    ) -> Result<Self, RulesError> {
        let mut rules = Self::new();
        for template in templates {
            if rules.templates.contains_key(&template.name) {
                return Err(RulesError::DuplicateTemplate(template.name));
            }
            rules.insert(template);
        }
        Ok(rules)
    }

    /// Parse a JSON array of templates
    pub fn from_json(content: &str) -> Result<Self, RulesError> {
        let templates: Vec<ActorTemplate> =
            serde_json::from_str(content).map_err(|e| RulesError::ParseError(e.to_string()))?;
        Self::from_templates(templates)
    }

    /// Load a JSON array of templates from a file
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| RulesError::IoError(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Insert or replace a template
    pub fn insert(&mut self, template: ActorTemplate) {
        self.templates
            .insert(template.name.clone(), Arc::new(template));
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateCatalog for TemplateRules {
    fn template(&self, name: &str) -> Option<Arc<ActorTemplate>> {
        self.templates.get(name).cloned()
    }

    fn paintable(&self) -> Vec<Arc<ActorTemplate>> {
        self.templates
            .values()
            .filter(|t| !t.is_hidden())
            .cloned()
            .collect()
    }
}
