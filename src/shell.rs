//! Drag state machine for the window shell.
//!
//! The shell owns exactly two states: idle, and dragging one window by its
//! title bar. On pointer-down it captures the pointer offset from the
//! window's top-left; every pointer-move recomputes the top-left as
//! `pointer - offset` and reports it upward. Pointer-up anywhere ends the
//! drag. Closing a window is a direct chrome action, never a drag state.

use crate::geometry::CanvasPoint;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        id: String,
        /// Pointer offset from the window's top-left at pointer-down. May be
        /// negative; the move delta is what matters, not where the grab
        /// landed.
        grab_x: i32,
        grab_y: i32,
    },
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the dragging state for `id`, capturing the grab offset.
    pub fn begin(&mut self, id: &str, pointer: CanvasPoint, window_origin: CanvasPoint) {
        self.state = DragState::Dragging {
            id: id.to_string(),
            grab_x: pointer.x - window_origin.x,
            grab_y: pointer.y - window_origin.y,
        };
    }

    /// Apply a pointer move. Returns the dragged window's id and its new
    /// top-left when a drag is in progress, `None` otherwise.
    pub fn update(&mut self, pointer: CanvasPoint) -> Option<(&str, CanvasPoint)> {
        match &self.state {
            DragState::Dragging { id, grab_x, grab_y } => Some((
                id.as_str(),
                CanvasPoint::new(pointer.x - grab_x, pointer.y - grab_y),
            )),
            DragState::Idle => None,
        }
    }

    /// Pointer released anywhere in the document: back to idle. Returns the
    /// id that was being dragged, if any.
    pub fn end(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { id, .. } => Some(id),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn dragging_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { id, .. } => Some(id.as_str()),
            DragState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_delta_is_applied_not_absolute_position() {
        let mut drag = DragController::new();
        drag.begin("w", CanvasPoint::new(50, 50), CanvasPoint::new(100, 100));
        let (id, origin) = drag.update(CanvasPoint::new(200, 200)).unwrap();
        assert_eq!(id, "w");
        assert_eq!(origin, CanvasPoint::new(250, 250));
    }

    #[test]
    fn grab_inside_title_bar_keeps_offset() {
        let mut drag = DragController::new();
        drag.begin("w", CanvasPoint::new(150, 150), CanvasPoint::new(100, 100));
        let (_, origin) = drag.update(CanvasPoint::new(200, 200)).unwrap();
        assert_eq!(origin, CanvasPoint::new(150, 150));
    }

    #[test]
    fn drag_can_report_negative_origins() {
        let mut drag = DragController::new();
        drag.begin("w", CanvasPoint::new(10, 10), CanvasPoint::new(0, 0));
        let (_, origin) = drag.update(CanvasPoint::new(2, 3)).unwrap();
        assert_eq!(origin, CanvasPoint::new(-8, -7));
    }

    #[test]
    fn end_returns_to_idle() {
        let mut drag = DragController::new();
        drag.begin("w", CanvasPoint::new(0, 0), CanvasPoint::new(0, 0));
        assert!(drag.is_dragging());
        assert_eq!(drag.end(), Some("w".to_string()));
        assert!(!drag.is_dragging());
        assert!(drag.update(CanvasPoint::new(5, 5)).is_none());
        assert!(drag.end().is_none());
    }
}
