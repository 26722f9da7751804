//! Per-window drag/resize state machine driven by the shared pointer stream.
//!
//! Every mounted window receives every global pointer event. Only the instance whose own mode is
//! not [`InteractionMode::Idle`] reacts to a move, which keeps windows from interfering with each
//! other while they listen to the same stream.

use crate::{
    geometry::{drag_position, resize_geometry},
    model::{Coordinates, ResizeDirection, Viewport, WindowGeometry},
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Title-bar drag; `offset` is the pointer position relative to the window's top-left corner
    /// at press time.
    Dragging { offset: Coordinates },
    Resizing(ResizeDirection),
}

/// Pointer events broadcast to every mounted window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlobalPointerEvent {
    Move(Coordinates),
    Up,
}

/// Geometry and interaction mode owned by one mounted window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowInstance {
    geometry: WindowGeometry,
    mode: InteractionMode,
}

impl WindowInstance {
    pub fn new(geometry: WindowGeometry) -> Self {
        Self {
            geometry,
            mode: InteractionMode::Idle,
        }
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_idle(&self) -> bool {
        self.mode == InteractionMode::Idle
    }

    /// Moves the window without clamping. Used by the spawn animation.
    pub fn set_position(&mut self, position: Coordinates) {
        self.geometry.position = position;
    }

    /// Starts a title-bar drag. Refused while the window is maximized.
    pub fn begin_drag(&mut self, pointer: Coordinates, maximized: bool) -> bool {
        if maximized {
            return false;
        }
        self.mode = InteractionMode::Dragging {
            offset: pointer.offset_from(self.geometry.position),
        };
        true
    }

    /// Starts a handle resize. Refused while the window is maximized.
    pub fn begin_resize(&mut self, direction: ResizeDirection, maximized: bool) -> bool {
        if maximized {
            return false;
        }
        self.mode = InteractionMode::Resizing(direction);
        true
    }

    /// Drops any in-flight interaction.
    pub fn end_interaction(&mut self) {
        self.mode = InteractionMode::Idle;
    }

    /// Feeds one global pointer event through this instance.
    ///
    /// Returns `true` when geometry or mode changed and the window should re-render.
    pub fn handle_pointer(&mut self, event: GlobalPointerEvent, viewport: Viewport) -> bool {
        match (event, self.mode) {
            (GlobalPointerEvent::Up, InteractionMode::Idle) => false,
            (GlobalPointerEvent::Up, _) => {
                self.end_interaction();
                true
            }
            (GlobalPointerEvent::Move(_), InteractionMode::Idle) => false,
            (GlobalPointerEvent::Move(pointer), InteractionMode::Dragging { offset }) => {
                let position = drag_position(pointer, offset, self.geometry.size, viewport);
                let changed = position != self.geometry.position;
                self.geometry.position = position;
                changed
            }
            (GlobalPointerEvent::Move(pointer), InteractionMode::Resizing(direction)) => {
                let next = resize_geometry(self.geometry, direction, pointer, viewport);
                let changed = next != self.geometry;
                self.geometry = next;
                changed
            }
        }
    }
}
