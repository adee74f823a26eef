//! Editor tools - actor brush, pan/zoom
//!
//! Translates viewport input into brush pointer events.

mod actor_brush;
mod input;
mod preview;
mod priority;
mod substitution;

pub use actor_brush::{
    ActorBrush, BrushContext, BrushError, BrushResponse, BrushSettings, BrushSetup, BrushState,
};
pub use input::{PointerButton, PointerEvent, PointerInput};
pub use preview::{preview_bounds, sync_preview, ActorPreview, PreviewInits};
pub use priority::{actor_under_cursor, selection_priority, DepthTieBreak};
pub use substitution::{FastRandSource, RandomSource, SubstitutionPicker};

use bevy::input::mouse::{AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy_brush_core::{PixelPos, PlayerReference};
use bevy_egui::EguiContexts;

use crate::config::BrushConfig;
use crate::viewport::EditorViewport;
use crate::EditorWorld;

/// Plugin for the actor brush and viewport input
pub struct BrushToolsPlugin;

impl Plugin for BrushToolsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveBrush>()
            .init_resource::<PendingBrush>()
            .init_resource::<PointerTracker>()
            .init_resource::<ActorPreview>()
            .add_systems(
                Update,
                (
                    sync_viewport,
                    handle_zoom_input,
                    handle_pan_input,
                    activate_pending_brush,
                    handle_brush_input,
                    tick_active_brush,
                )
                    .chain(),
            );
    }
}

/// The brush currently receiving viewport input
#[derive(Resource, Default)]
pub struct ActiveBrush {
    pub brush: Option<ActorBrush>,
}

/// A template and owner picked in the palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrushSelection {
    pub template: String,
    pub owner: PlayerReference,
}

/// Brush selection to apply on the next update
#[derive(Resource, Default)]
pub struct PendingBrush {
    pub request: Option<BrushSelection>,
}

/// Cursor bookkeeping between frames
#[derive(Resource, Default)]
pub struct PointerTracker {
    /// Cursor position last forwarded to the brush
    pub last_cursor: Option<Vec2>,
    /// Cursor position at the previous frame of a middle-button pan
    pub pan_anchor: Option<Vec2>,
}

const BUTTONS: [(MouseButton, PointerButton); 3] = [
    (MouseButton::Left, PointerButton::Primary),
    (MouseButton::Right, PointerButton::Secondary),
    (MouseButton::Middle, PointerButton::Middle),
];

/// The pointer event for this frame, if any.
///
/// At most one event is produced per frame; a button transition takes
/// precedence over a move. A click that went down and up within one frame
/// is reported by its final state.
pub fn pointer_input(
    mouse: &ButtonInput<MouseButton>,
    location: PixelPos,
    moved: bool,
) -> Option<PointerInput> {
    for (mouse_button, button) in BUTTONS {
        let pressed = mouse.just_pressed(mouse_button);
        let released = mouse.just_released(mouse_button);
        if pressed && released {
            return Some(if mouse.pressed(mouse_button) {
                PointerInput::down(button, location)
            } else {
                PointerInput::up(button, location)
            });
        }
        if pressed {
            return Some(PointerInput::down(button, location));
        }
        if released {
            return Some(PointerInput::up(button, location));
        }
    }

    if !moved {
        return None;
    }

    let held = BUTTONS
        .iter()
        .find(|(mouse_button, _)| mouse.pressed(*mouse_button))
        .map_or(PointerButton::None, |(_, button)| *button);
    Some(PointerInput::moved(held, location))
}

/// Whether an event reaches the brush.
///
/// While egui has the pointer only the release that ends a stroke the brush
/// started gets through.
pub fn routes_to_brush(input: &PointerInput, egui_busy: bool, painting: bool) -> bool {
    if !egui_busy {
        return true;
    }
    painting && input.button == PointerButton::Primary && input.event == PointerEvent::Up
}

fn sync_viewport(windows: Query<&Window>, mut viewport: ResMut<EditorViewport>) {
    let Ok(window) = windows.single() else {
        return;
    };

    viewport.size = Vec2::new(window.width(), window.height());
    viewport.cursor = window.cursor_position();
    if let Some(cursor) = viewport.cursor {
        viewport.last_pointer = cursor;
    }
}

fn handle_zoom_input(
    mut contexts: EguiContexts,
    scroll: Res<AccumulatedMouseScroll>,
    mut viewport: ResMut<EditorViewport>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    // Let scroll areas in egui panels keep the wheel
    if ctx.is_using_pointer() || ctx.is_pointer_over_area() {
        return;
    }

    let lines = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / 20.0,
    };
    if lines != 0.0 {
        viewport.zoom_by(1.0 + lines * 0.1);
    }
}

fn handle_pan_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut tracker: ResMut<PointerTracker>,
    mut viewport: ResMut<EditorViewport>,
) {
    let cursor = viewport.cursor;
    match cursor {
        Some(cursor) if mouse_buttons.pressed(MouseButton::Middle) => {
            if let Some(anchor) = tracker.pan_anchor {
                viewport.pan(cursor - anchor);
            }
            tracker.pan_anchor = Some(cursor);
        }
        _ => tracker.pan_anchor = None,
    }
}

fn activate_pending_brush(
    mut pending: ResMut<PendingBrush>,
    mut active: ResMut<ActiveBrush>,
    mut preview: ResMut<ActorPreview>,
    world: Res<EditorWorld>,
    config: Res<BrushConfig>,
    viewport: Res<EditorViewport>,
) {
    let Some(selection) = pending.request.take() else {
        return;
    };

    if let Some(previous) = active.brush.take() {
        previous.release(&mut preview);
    }

    let setup = BrushSetup {
        catalog: world.rules.as_ref(),
        groups: &config.similarity_groups,
        viewport: &*viewport,
        preview: &mut *preview,
    };
    match ActorBrush::new(&selection.template, selection.owner, config.settings(), setup) {
        Ok(brush) => active.brush = Some(brush),
        Err(e) => warn!("Could not select brush: {}", e),
    }
}

fn handle_brush_input(
    mut contexts: EguiContexts,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut tracker: ResMut<PointerTracker>,
    viewport: Res<EditorViewport>,
    mut world: ResMut<EditorWorld>,
    mut active: ResMut<ActiveBrush>,
    mut preview: ResMut<ActorPreview>,
) {
    let Some(brush) = active.brush.as_mut() else {
        return;
    };
    let Some(cursor) = viewport.cursor else {
        return;
    };

    let moved = tracker.last_cursor != Some(cursor);
    tracker.last_cursor = Some(cursor);

    let location = PixelPos::new(cursor.x.floor() as i32, cursor.y.floor() as i32);
    let Some(input) = pointer_input(&mouse_buttons, location, moved) else {
        return;
    };

    let egui_busy = contexts
        .ctx_mut()
        .map(|ctx| ctx.is_using_pointer() || ctx.is_pointer_over_area())
        .unwrap_or(false);
    if !routes_to_brush(&input, egui_busy, brush.is_painting()) {
        return;
    }

    let map = *world.actors.map();
    let mut ctx = BrushContext {
        viewport: &*viewport,
        map: &map,
        actors: &mut world.actors,
    };

    if brush.handle_pointer_input(&input, &mut ctx) == BrushResponse::Deselect {
        if let Some(brush) = active.brush.take() {
            brush.release(&mut preview);
        }
    }
}

fn tick_active_brush(
    viewport: Res<EditorViewport>,
    mut active: ResMut<ActiveBrush>,
    mut preview: ResMut<ActorPreview>,
) {
    if let Some(brush) = active.brush.as_mut() {
        brush.tick(&*viewport, &mut preview);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: PixelPos = PixelPos::new(10, 20);

    #[test]
    fn test_no_event_without_change() {
        let mouse = ButtonInput::<MouseButton>::default();
        assert_eq!(pointer_input(&mouse, AT, false), None);
    }

    #[test]
    fn test_hover_move_has_no_button() {
        let mouse = ButtonInput::<MouseButton>::default();
        let input = pointer_input(&mouse, AT, true).unwrap();
        assert_eq!(input, PointerInput::moved(PointerButton::None, AT));
    }

    #[test]
    fn test_press_beats_move_in_same_frame() {
        let mut mouse = ButtonInput::<MouseButton>::default();
        mouse.press(MouseButton::Left);
        let input = pointer_input(&mouse, AT, true).unwrap();
        assert_eq!(input, PointerInput::down(PointerButton::Primary, AT));
    }

    #[test]
    fn test_held_button_drags() {
        let mut mouse = ButtonInput::<MouseButton>::default();
        mouse.press(MouseButton::Left);
        mouse.clear();
        let input = pointer_input(&mouse, AT, true).unwrap();
        assert_eq!(input, PointerInput::moved(PointerButton::Primary, AT));
    }

    #[test]
    fn test_secondary_release() {
        let mut mouse = ButtonInput::<MouseButton>::default();
        mouse.press(MouseButton::Right);
        mouse.clear();
        mouse.release(MouseButton::Right);
        let input = pointer_input(&mouse, AT, false).unwrap();
        assert_eq!(input, PointerInput::up(PointerButton::Secondary, AT));
    }

    #[test]
    fn test_click_within_one_frame_reports_release() {
        let mut mouse = ButtonInput::<MouseButton>::default();
        mouse.press(MouseButton::Right);
        mouse.release(MouseButton::Right);
        let input = pointer_input(&mouse, AT, true).unwrap();
        assert_eq!(input, PointerInput::up(PointerButton::Secondary, AT));

        let mut mouse = ButtonInput::<MouseButton>::default();
        mouse.press(MouseButton::Left);
        mouse.release(MouseButton::Left);
        let input = pointer_input(&mouse, AT, false).unwrap();
        assert_eq!(input, PointerInput::up(PointerButton::Primary, AT));
    }

    #[test]
    fn test_release_then_press_within_one_frame_reports_press() {
        let mut mouse = ButtonInput::<MouseButton>::default();
        mouse.press(MouseButton::Left);
        mouse.clear();
        mouse.release(MouseButton::Left);
        mouse.press(MouseButton::Left);
        let input = pointer_input(&mouse, AT, false).unwrap();
        assert_eq!(input, PointerInput::down(PointerButton::Primary, AT));
    }

    #[test]
    fn test_everything_routes_when_egui_is_idle() {
        for input in [
            PointerInput::down(PointerButton::Primary, AT),
            PointerInput::up(PointerButton::Secondary, AT),
            PointerInput::moved(PointerButton::None, AT),
        ] {
            assert!(routes_to_brush(&input, false, false));
            assert!(routes_to_brush(&input, false, true));
        }
    }

    #[test]
    fn test_release_over_egui_without_stroke_is_dropped() {
        let up = PointerInput::up(PointerButton::Primary, AT);
        assert!(!routes_to_brush(&up, true, false));
        assert!(routes_to_brush(&up, true, true));
    }

    #[test]
    fn test_only_stroke_release_passes_over_egui() {
        for input in [
            PointerInput::down(PointerButton::Primary, AT),
            PointerInput::moved(PointerButton::Primary, AT),
            PointerInput::up(PointerButton::Secondary, AT),
            PointerInput::up(PointerButton::Middle, AT),
        ] {
            assert!(!routes_to_brush(&input, true, true));
        }
    }
}
