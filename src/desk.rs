//! The desk: one explicitly-owned state container for the whole window
//! manager. It owns the registry, the canvas tracker, the drag controller,
//! and the scroll position, and is the only writer to any of them. All
//! mutations happen synchronously inside event handling, so consumers see a
//! consistent registry on every render pass.

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;

use crate::canvas::CanvasTracker;
use crate::chrome::{DefaultDecorator, HeaderAction, WindowDecorator};
use crate::constants::CHROME_ROWS;
use crate::content::WindowContent;
use crate::geometry::{CanvasPoint, CanvasRect, CanvasSize};
use crate::registry::{WindowRegistry, WindowSpec};
use crate::shell::DragController;

/// Lines scrolled per mouse-wheel tick.
const WHEEL_STEP: i32 = 3;

pub struct Desk {
    registry: WindowRegistry,
    tracker: CanvasTracker,
    drag: DragController,
    decorator: Box<dyn WindowDecorator>,
    viewport: CanvasSize,
    scroll_x: u32,
    scroll_y: u32,
    /// Screen area the desk occupied on the last render; pointer events are
    /// translated relative to it.
    area: Rect,
    closed: Vec<String>,
}

impl Default for Desk {
    fn default() -> Self {
        Self::new()
    }
}

impl Desk {
    pub fn new() -> Self {
        Self {
            registry: WindowRegistry::new(),
            tracker: CanvasTracker::new(),
            drag: DragController::new(),
            decorator: Box::new(DefaultDecorator),
            viewport: CanvasSize::default(),
            scroll_x: 0,
            scroll_y: 0,
            area: Rect::default(),
            closed: Vec::new(),
        }
    }

    pub fn set_decorator(&mut self, decorator: Box<dyn WindowDecorator>) {
        self.decorator = decorator;
    }

    /// Tell the desk how large the visible area is, in canvas units. Called
    /// on startup and on every terminal resize.
    pub fn set_viewport(&mut self, viewport: CanvasSize) {
        self.viewport = viewport;
        self.clamp_scroll();
    }

    pub fn viewport(&self) -> CanvasSize {
        self.viewport
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Open a window or raise the existing one of the same kind.
    pub fn open(&mut self, spec: WindowSpec, content: Box<dyn WindowContent>) -> String {
        let id = self.registry.open(spec, content, self.viewport);
        if let Some(record) = self.registry.get(&id) {
            self.tracker.upsert(&id, record.rect());
        }
        self.reap_closed();
        id
    }

    pub fn close(&mut self, id: &str) {
        self.registry.close(id);
        self.reap_closed();
    }

    pub fn close_by_kind(&mut self, kind: &str) {
        self.registry.close_by_kind(kind);
        self.reap_closed();
    }

    pub fn close_all(&mut self) {
        self.registry.close_all();
        self.reap_closed();
    }

    pub fn bring_to_front(&mut self, id: &str) {
        self.registry.bring_to_front(id);
    }

    pub fn toggle_minimize(&mut self, id: &str) {
        self.registry.toggle_minimize(id);
    }

    pub fn toggle_maximize(&mut self, id: &str) {
        self.registry.toggle_maximize(id);
    }

    pub fn is_kind_open(&self, kind: &str) -> bool {
        self.registry.is_kind_open(kind)
    }

    /// Ids of windows closed since the last call, in close order.
    pub fn take_closed(&mut self) -> Vec<String> {
        std::mem::take(&mut self.closed)
    }

    /// Current scrollable canvas size: the viewport when nothing is open,
    /// otherwise grown to contain every window plus the margin.
    pub fn canvas_size(&self) -> CanvasSize {
        self.tracker.canvas_size(self.viewport)
    }

    pub fn scroll_offset(&self) -> (u32, u32) {
        (self.scroll_x, self.scroll_y)
    }

    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.scroll_x = self.scroll_x.saturating_add_signed(dx);
        self.scroll_y = self.scroll_y.saturating_add_signed(dy);
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let canvas = self.canvas_size();
        self.scroll_x = self
            .scroll_x
            .min(canvas.width.saturating_sub(self.viewport.width));
        self.scroll_y = self
            .scroll_y
            .min(canvas.height.saturating_sub(self.viewport.height));
    }

    fn reap_closed(&mut self) {
        for id in self.registry.take_closed() {
            self.tracker.remove(&id);
            self.closed.push(id);
        }
        self.clamp_scroll();
    }

    /// How the window currently occupies the canvas: minimized windows
    /// collapse to their chrome, maximized windows cover the visible
    /// viewport, everything else uses the nominal rectangle.
    fn display_rect(&self, id: &str) -> Option<CanvasRect> {
        let record = self.registry.get(id)?;
        if record.is_maximized() {
            return Some(CanvasRect::new(
                self.scroll_x as i32,
                self.scroll_y as i32,
                self.viewport.width,
                self.viewport.height,
            ));
        }
        let rect = record.rect();
        if record.is_minimized() {
            return Some(CanvasRect::new(rect.x, rect.y, rect.width, CHROME_ROWS));
        }
        Some(rect)
    }

    fn pointer_to_canvas(&self, column: u16, row: u16) -> CanvasPoint {
        CanvasPoint::new(
            i32::from(column.saturating_sub(self.area.x)) + self.scroll_x as i32,
            i32::from(row.saturating_sub(self.area.y)) + self.scroll_y as i32,
        )
    }

    /// Visible part of a canvas rect, as a screen rectangle. `None` when the
    /// rect is entirely off screen.
    fn to_screen(&self, rect: CanvasRect) -> Option<Rect> {
        let view_left = i64::from(self.scroll_x);
        let view_top = i64::from(self.scroll_y);
        let view_right = view_left + i64::from(self.viewport.width);
        let view_bottom = view_top + i64::from(self.viewport.height);

        let left = i64::from(rect.x).max(view_left);
        let top = i64::from(rect.y).max(view_top);
        let right = rect.right().min(view_right);
        let bottom = rect.bottom().min(view_bottom);
        if left >= right || top >= bottom {
            return None;
        }
        Some(Rect {
            x: self.area.x.saturating_add((left - view_left) as u16),
            y: self.area.y.saturating_add((top - view_top) as u16),
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }

    /// Topmost window whose display rect contains the canvas point.
    fn window_at(&self, point: CanvasPoint) -> Option<String> {
        for id in self.registry.draw_order().into_iter().rev() {
            if let Some(rect) = self.display_rect(&id)
                && rect.contains(point.x, point.y)
            {
                return Some(id);
            }
        }
        None
    }

    /// Handle an input event. Returns true when the desk consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                self.set_viewport(CanvasSize::new(u32::from(*width), u32::from(*height)));
                true
            }
            Event::Key(_) => {
                // Keys go to the focused window's content.
                let Some(id) = self.registry.topmost().map(|record| record.id().to_string())
                else {
                    return false;
                };
                let Some(record) = self.registry.get_mut(&id) else {
                    return false;
                };
                record.content_mut().handle_event(event)
            }
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let point = self.pointer_to_canvas(mouse.column, mouse.row);
                let Some(id) = self.window_at(point) else {
                    return false;
                };
                self.registry.bring_to_front(&id);
                let Some(rect) = self.display_rect(&id) else {
                    return true;
                };
                // Resolve chrome hits in window-local coordinates so the
                // decorator never sees signed canvas positions.
                let local_col = (point.x - rect.x).clamp(0, i32::from(u16::MAX)) as u16;
                let local_row = (point.y - rect.y).clamp(0, i32::from(u16::MAX)) as u16;
                let local = Rect {
                    x: 0,
                    y: 0,
                    width: rect.width.min(u32::from(u16::MAX)) as u16,
                    height: rect.height.min(u32::from(u16::MAX)) as u16,
                };
                match self.decorator.hit_test(local, local_col, local_row) {
                    HeaderAction::Close => {
                        self.registry.close(&id);
                        self.reap_closed();
                    }
                    HeaderAction::Minimize => self.registry.toggle_minimize(&id),
                    HeaderAction::Maximize => self.registry.toggle_maximize(&id),
                    HeaderAction::Drag => {
                        let maximized = self
                            .registry
                            .get(&id)
                            .is_some_and(|record| record.is_maximized());
                        if !maximized {
                            self.drag.begin(&id, point, rect.origin());
                        }
                    }
                    HeaderAction::None => {}
                }
                true
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let point = self.pointer_to_canvas(mouse.column, mouse.row);
                let Some((id, origin)) = self
                    .drag
                    .update(point)
                    .map(|(id, origin)| (id.to_string(), origin))
                else {
                    return false;
                };
                self.registry.update_position(&id, origin);
                if let Some(record) = self.registry.get(&id) {
                    self.tracker.upsert(&id, record.rect());
                }
                true
            }
            MouseEventKind::Up(MouseButton::Left) => self.drag.end().is_some(),
            MouseEventKind::ScrollUp => {
                self.scroll_by(0, -WHEEL_STEP);
                true
            }
            MouseEventKind::ScrollDown => {
                self.scroll_by(0, WHEEL_STEP);
                true
            }
            MouseEventKind::ScrollLeft => {
                self.scroll_by(-WHEEL_STEP, 0);
                true
            }
            MouseEventKind::ScrollRight => {
                self.scroll_by(WHEEL_STEP, 0);
                true
            }
            _ => false,
        }
    }

    /// Draw every window bottom-most first; the focused (topmost) window
    /// paints last and therefore on top.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.area = area;
        self.set_viewport(CanvasSize::new(
            u32::from(area.width),
            u32::from(area.height),
        ));

        let focused = self.registry.topmost().map(|record| record.id().to_string());
        for id in self.registry.draw_order() {
            let Some(display) = self.display_rect(&id) else {
                continue;
            };
            let Some(screen) = self.to_screen(display) else {
                continue;
            };
            let Some(record) = self.registry.get(&id) else {
                continue;
            };
            let is_focused = focused.as_deref() == Some(id.as_str());
            let minimized = record.is_minimized();
            let title = record.title().to_string();

            frame.render_widget(Clear, screen);
            self.decorator
                .render_window(frame, screen, area, &title, is_focused, minimized);

            if minimized {
                continue;
            }
            // Content area: inside the side borders, below the title bar,
            // above the bottom border, clipped to the screen.
            let inner = CanvasRect::new(
                display.x.saturating_add(1),
                display.y.saturating_add(CHROME_ROWS as i32),
                display.width.saturating_sub(2),
                display.height.saturating_sub(CHROME_ROWS + 1),
            );
            let Some(inner_screen) = self.to_screen(inner) else {
                continue;
            };
            if let Some(record) = self.registry.get_mut(&id) {
                record.content_mut().render(frame, inner_screen, is_focused);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TextPanel;
    use crossterm::event::KeyModifiers;

    fn desk() -> Desk {
        let mut desk = Desk::new();
        desk.set_viewport(CanvasSize::new(1200, 800));
        desk
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    fn open(desk: &mut Desk, kind: &str, w: u32, h: u32, x: i32, y: i32) -> String {
        desk.open(
            WindowSpec::new(kind, kind).size(w, h).position(x, y),
            Box::new(TextPanel::new("")),
        )
    }

    #[test]
    fn canvas_collapses_when_all_windows_close() {
        let mut desk = desk();
        let id = open(&mut desk, "a", 400, 300, 700, 400);
        assert!(desk.canvas_size().width > 1200 || desk.canvas_size().height > 800);
        desk.close(&id);
        assert_eq!(desk.canvas_size(), CanvasSize::new(1200, 800));
        assert_eq!(desk.take_closed(), vec![id]);
    }

    #[test]
    fn title_bar_drag_moves_window_by_pointer_delta() {
        let mut desk = desk();
        let id = open(&mut desk, "a", 100, 50, 200, 300);
        // Header row sits one below the top border.
        assert!(desk.handle_event(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            210,
            301
        )));
        assert!(desk.handle_event(&mouse(
            MouseEventKind::Drag(MouseButton::Left),
            260,
            321
        )));
        let record = desk.registry().get(&id).unwrap();
        assert_eq!(record.position(), CanvasPoint::new(250, 320));
        assert!(desk.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 260, 321)));
        assert!(!desk.handle_event(&mouse(
            MouseEventKind::Drag(MouseButton::Left),
            300,
            300
        )));
    }

    #[test]
    fn click_focuses_topmost_hit_window() {
        let mut desk = desk();
        let a = open(&mut desk, "a", 200, 100, 100, 100);
        let b = open(&mut desk, "b", 200, 100, 150, 120);
        assert_eq!(desk.registry().topmost().unwrap().id(), b);
        // Click inside a's body where b does not overlap.
        assert!(desk.handle_event(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            110,
            180
        )));
        assert_eq!(desk.registry().topmost().unwrap().id(), a);
    }

    #[test]
    fn close_control_removes_window() {
        let mut desk = desk();
        let id = open(&mut desk, "a", 100, 50, 200, 300);
        // Close glyph: two cells in from the right edge, on the header row.
        assert!(desk.handle_event(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            297,
            301
        )));
        assert!(desk.registry().is_empty());
        assert_eq!(desk.take_closed(), vec![id]);
    }

    #[test]
    fn wheel_scroll_is_clamped_to_canvas() {
        let mut desk = desk();
        desk.handle_event(&mouse(MouseEventKind::ScrollDown, 0, 0));
        assert_eq!(desk.scroll_offset(), (0, 0));
        open(&mut desk, "a", 400, 300, 700, 400);
        // Canvas is now 1600x1200; vertical slack is 400 rows.
        for _ in 0..1000 {
            desk.handle_event(&mouse(MouseEventKind::ScrollDown, 0, 0));
        }
        assert_eq!(desk.scroll_offset(), (0, 400));
    }

    #[test]
    fn minimized_window_collapses_to_chrome_rows() {
        let mut desk = desk();
        let id = open(&mut desk, "a", 300, 200, 100, 100);
        desk.toggle_minimize(&id);
        let rect = desk.display_rect(&id).unwrap();
        assert_eq!(rect.height, CHROME_ROWS);
        assert_eq!(rect.width, 300);
        desk.toggle_minimize(&id);
        assert_eq!(desk.display_rect(&id).unwrap().height, 200);
    }

    #[test]
    fn maximized_window_covers_viewport() {
        let mut desk = desk();
        let id = open(&mut desk, "a", 300, 200, 100, 100);
        desk.toggle_maximize(&id);
        let rect = desk.display_rect(&id).unwrap();
        assert_eq!(rect, CanvasRect::new(0, 0, 1200, 800));
        // Nominal geometry survives the round trip.
        desk.toggle_maximize(&id);
        assert_eq!(
            desk.display_rect(&id).unwrap(),
            CanvasRect::new(100, 100, 300, 200)
        );
    }
}
