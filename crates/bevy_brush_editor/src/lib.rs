//! bevy_brush_editor - Actor placement brush for Bevy map editors
//!
//! This crate provides:
//! - `ActorBrush`, the stamp/drag/deselect state machine
//! - Selection priority for overlapping actors and similar-template substitution
//! - A floating preview that follows the cursor and camera
//! - `EditorViewport`, a pan/zoom camera over the map canvas
//! - An egui palette and canvas overlay
//!
//! # Usage
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use bevy_brush_core::{MapGrid, TemplateRules};
//! use bevy_brush_editor::ActorBrushPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(ActorBrushPlugin::new(MapGrid::default(), TemplateRules::new()))
//!         .run();
//! }
//! ```

pub mod config;
pub mod tools;
pub mod ui;
pub mod viewport;

pub use bevy_brush_core;

use bevy::prelude::*;
use bevy_brush_core::{ActorTemplate, EditorActorLayer, MapGrid, TemplateRules};
use bevy_egui::EguiPlugin;
use std::sync::Arc;

use config::BrushConfig;
use tools::{BrushSelection, BrushToolsPlugin, PendingBrush};
use ui::BrushUiPlugin;
use viewport::EditorViewport;

/// The edited map: template rules and placed actors
#[derive(Resource, Debug, Clone)]
pub struct EditorWorld {
    pub rules: Arc<TemplateRules>,
    pub actors: EditorActorLayer,
}

impl EditorWorld {
    pub fn new(map: MapGrid, rules: TemplateRules) -> Self {
        let rules = Arc::new(rules);
        Self {
            actors: EditorActorLayer::new(map, Arc::clone(&rules)),
            rules,
        }
    }
}

/// Main plugin: brush tools, palette and overlay for one map
pub struct ActorBrushPlugin {
    pub map: MapGrid,
    pub rules: TemplateRules,
}

impl ActorBrushPlugin {
    pub fn new(map: MapGrid, rules: TemplateRules) -> Self {
        Self { map, rules }
    }
}

impl Plugin for ActorBrushPlugin {
    fn build(&self, app: &mut App) {
        let config = BrushConfig::load();
        bevy::log::info!(
            "ActorBrushPlugin: {}x{} map, {} templates",
            self.map.width,
            self.map.height,
            self.rules.len()
        );

        let pending = PendingBrush {
            request: config.initial_template.clone().map(|template| BrushSelection {
                template,
                owner: config.owner.clone(),
            }),
        };

        app.add_plugins(EguiPlugin::default())
            .add_plugins(BrushToolsPlugin)
            .add_plugins(BrushUiPlugin)
            .insert_resource(EditorWorld::new(self.map, self.rules.clone()))
            .insert_resource(EditorViewport::new(self.map))
            .insert_resource(pending)
            .insert_resource(config)
            .add_systems(Startup, setup_editor_camera);
    }
}

fn setup_editor_camera(mut commands: Commands, camera_query: Query<&Camera2d>) {
    // Only spawn if no Camera2d exists
    if camera_query.is_empty() {
        commands.spawn(Camera2d);
    }
}

/// A small rule set for trying the brush without game data
pub fn demo_rules() -> TemplateRules {
    let mut rules = TemplateRules::new();
    for name in [
        "t01", "t02", "t05", "t06", "t07", "t08", "tc01", "tc03", "tc04", "t10", "t11", "t12",
        "t13", "t14", "t15",
    ] {
        rules.insert(ActorTemplate::new(name).with_preview([24, 36], [0, 6]));
    }
    for i in 1..=9 {
        rules.insert(ActorTemplate::new(format!("boxes0{}", i)));
    }
    rules.insert(ActorTemplate::new("^Tree"));
    rules.insert(
        ActorTemplate::new("e1")
            .with_shared_cells()
            .with_facing(false)
            .with_preview([12, 12], [0, 0]),
    );
    rules.insert(ActorTemplate::new("mtnk").with_facing(true));
    rules.insert(ActorTemplate::new("harv").with_facing(false).with_preview([30, 30], [0, 0]));
    rules.insert(ActorTemplate::new("fact").with_building(3, 2).with_preview([72, 48], [0, 0]));
    rules.insert(ActorTemplate::new("powr").with_building(2, 2).with_preview([48, 48], [0, 0]));
    rules
}
