//! Standalone actor brush editor
//!
//! Run with: actor_brush_editor [rules.json]

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_brush_core::{MapGrid, TemplateRules};
use bevy_brush_editor::{demo_rules, ActorBrushPlugin};
use std::path::PathBuf;

fn main() {
    let rules = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match TemplateRules::load(&path) {
            Ok(rules) => rules,
            Err(e) => {
                eprintln!("Failed to load rules from {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => demo_rules(),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Actor Brush Editor".to_string(),
                resolution: WindowResolution::new(1280, 720).with_scale_factor_override(1.0),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ActorBrushPlugin::new(MapGrid::default(), rules))
        .run();
}
