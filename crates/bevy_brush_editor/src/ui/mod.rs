//! egui palette and map overlay

use bevy::prelude::*;
use bevy_brush_core::{PixelRect, PlayerReference, TemplateCatalog};
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::config::BrushConfig;
use crate::tools::{ActiveBrush, ActorPreview, BrushSelection, PendingBrush};
use crate::viewport::EditorViewport;
use crate::EditorWorld;

/// Plugin for the palette panel and the canvas overlay
pub struct BrushUiPlugin;

impl Plugin for BrushUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, (render_palette, render_overlay).chain());
    }
}

fn render_palette(
    mut contexts: EguiContexts,
    world: Res<EditorWorld>,
    mut config: ResMut<BrushConfig>,
    mut pending: ResMut<PendingBrush>,
    mut active: ResMut<ActiveBrush>,
    mut preview: ResMut<ActorPreview>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    let current = active.brush.as_ref().map(|b| b.template().name.clone());
    let players = config.players.clone();
    let mut owner = config.owner.clone();
    let mut selected = None;
    let mut clear = false;
    let mut save = false;

    egui::SidePanel::left("actor_palette")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Actors");

            ui.horizontal(|ui| {
                ui.label("Owner:");
                egui::ComboBox::from_id_salt("brush_owner")
                    .selected_text(owner.name.clone())
                    .show_ui(ui, |ui| {
                        for player in &players {
                            ui.selectable_value(&mut owner, player.clone(), player.name.as_str());
                        }
                    });
            });

            ui.horizontal(|ui| {
                clear = ui.button("Clear brush").clicked();
                save = ui.button("Save settings").clicked();
            });
            ui.label(format!("Placed: {}", world.actors.len()));
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("palette_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for template in world.rules.paintable() {
                        let checked = current.as_deref() == Some(template.name.as_str());
                        if ui.selectable_label(checked, template.name.as_str()).clicked() {
                            selected = Some(template.name.clone());
                        }
                    }
                });
        });

    if owner != config.owner {
        config.owner = owner;
        // Re-create the held brush for the new owner
        if selected.is_none() {
            selected = current;
        }
    }

    if clear {
        if let Some(brush) = active.brush.take() {
            brush.release(&mut preview);
        }
    } else if let Some(template) = selected {
        pending.request = Some(BrushSelection {
            template,
            owner: config.owner.clone(),
        });
    }

    if save {
        if let Err(e) = config.save() {
            warn!("Could not save brush config: {}", e);
        }
    }
}

fn render_overlay(
    mut contexts: EguiContexts,
    world: Res<EditorWorld>,
    viewport: Res<EditorViewport>,
    preview: Res<ActorPreview>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };
    let painter = ctx.layer_painter(egui::LayerId::background());

    draw_grid(&painter, &viewport);

    for actor in world.actors.actors() {
        let rect = world_rect(&viewport, actor.bounds);
        painter.rect_filled(rect, 2.0, owner_color(&actor.owner));
        painter.rect_stroke(
            rect,
            2.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(20)),
            egui::StrokeKind::Outside,
        );
        if viewport.zoom >= 1.0 {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &actor.template,
                egui::FontId::proportional(10.0),
                egui::Color32::WHITE,
            );
        }
    }

    if preview.is_visible() {
        let b = preview.bounds;
        let rect = egui::Rect::from_min_size(
            egui::pos2(b.x as f32, b.y as f32),
            egui::vec2(b.width as f32, b.height as f32),
        );
        painter.rect_filled(rect, 2.0, egui::Color32::from_rgba_unmultiplied(255, 255, 0, 40));
        painter.rect_stroke(
            rect,
            2.0,
            egui::Stroke::new(2.0, egui::Color32::YELLOW),
            egui::StrokeKind::Outside,
        );
        if let Some(name) = preview.template() {
            painter.text(
                rect.center_top() - egui::vec2(0.0, 4.0),
                egui::Align2::CENTER_BOTTOM,
                name,
                egui::FontId::default(),
                egui::Color32::YELLOW,
            );
        }
    }
}

fn draw_grid(painter: &egui::Painter, viewport: &EditorViewport) {
    let map = viewport.map;
    let ts = map.tile_size as f32;
    let (w, h) = map.size_px();

    let min = viewport.world_to_view(Vec2::ZERO);
    let max = viewport.world_to_view(Vec2::new(w as f32, h as f32));
    painter.rect_filled(
        egui::Rect::from_min_max(egui::pos2(min.x, min.y), egui::pos2(max.x, max.y)),
        0.0,
        egui::Color32::from_rgb(30, 30, 35),
    );

    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(50));
    for x in 0..=map.width {
        let vx = viewport.world_to_view(Vec2::new(x as f32 * ts, 0.0)).x;
        painter.line_segment([egui::pos2(vx, min.y), egui::pos2(vx, max.y)], stroke);
    }
    for y in 0..=map.height {
        let vy = viewport.world_to_view(Vec2::new(0.0, y as f32 * ts)).y;
        painter.line_segment([egui::pos2(min.x, vy), egui::pos2(max.x, vy)], stroke);
    }
}

/// View rectangle of world pixel bounds
fn world_rect(viewport: &EditorViewport, bounds: PixelRect) -> egui::Rect {
    let min = viewport.world_to_view(Vec2::new(bounds.x as f32, bounds.y as f32));
    egui::Rect::from_min_size(
        egui::pos2(min.x, min.y),
        egui::vec2(bounds.width as f32, bounds.height as f32) * viewport.zoom,
    )
}

fn owner_color(owner: &PlayerReference) -> egui::Color32 {
    if *owner == PlayerReference::neutral() {
        return egui::Color32::from_rgb(90, 120, 80);
    }
    match owner.faction.as_str() {
        "soviet" => egui::Color32::from_rgb(170, 60, 50),
        "allies" => egui::Color32::from_rgb(60, 90, 170),
        _ => egui::Color32::from_gray(120),
    }
}
