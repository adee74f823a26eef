//! Brush configuration
//!
//! Persisted as JSON in the platform config directory.

mod file;

pub use file::ConfigError;

use bevy::prelude::*;
use bevy_brush_core::{PlayerReference, SimilarityGroups, DEFAULT_FACING};
use serde::{Deserialize, Serialize};

use crate::tools::{BrushSettings, DepthTieBreak};

/// Settings the brush is constructed from
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Owner assigned to placed actors
    pub owner: PlayerReference,
    /// Template selected at startup
    pub initial_template: Option<String>,
    pub similarity_groups: SimilarityGroups,
    pub facing: i32,
    pub tie_break: DepthTieBreak,
    /// Owners offered in the palette
    pub players: Vec<PlayerReference>,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            owner: PlayerReference::neutral(),
            initial_template: None,
            similarity_groups: SimilarityGroups::default(),
            facing: DEFAULT_FACING,
            tie_break: DepthTieBreak::default(),
            players: vec![
                PlayerReference::neutral(),
                PlayerReference::new("Creeps", "allies"),
                PlayerReference::new("Multi0", "allies"),
                PlayerReference::new("Multi1", "soviet"),
            ],
        }
    }
}

impl BrushConfig {
    pub fn settings(&self) -> BrushSettings {
        BrushSettings {
            facing: self.facing,
            tie_break: self.tie_break,
        }
    }
}
