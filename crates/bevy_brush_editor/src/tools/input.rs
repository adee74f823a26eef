//! Pointer input as seen by editor brushes

use bevy_brush_core::PixelPos;

/// Which pointer button an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// No button held (plain hover moves)
    None,
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down,
    Up,
    Move,
}

/// One pointer event in view pixels.
///
/// Move events carry the button held during the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerInput {
    pub button: PointerButton,
    pub event: PointerEvent,
    pub location: PixelPos,
}

impl PointerInput {
    pub fn new(button: PointerButton, event: PointerEvent, location: PixelPos) -> Self {
        Self {
            button,
            event,
            location,
        }
    }

    pub fn down(button: PointerButton, location: PixelPos) -> Self {
        Self::new(button, PointerEvent::Down, location)
    }

    pub fn up(button: PointerButton, location: PixelPos) -> Self {
        Self::new(button, PointerEvent::Up, location)
    }

    pub fn moved(button: PointerButton, location: PixelPos) -> Self {
        Self::new(button, PointerEvent::Move, location)
    }
}
