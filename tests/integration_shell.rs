use civitas_desk::content::TextPanel;
use civitas_desk::registry::WindowSpec;
use civitas_desk::shell::DragController;
use civitas_desk::{CanvasPoint, CanvasSize, Desk};
use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

#[test]
fn drag_applies_pointer_delta_not_absolute_position() {
    // Reference figures: pointer-down at (50,50) on a window at (100,100),
    // move to (200,200) => top-left (250,250).
    let mut drag = DragController::new();
    drag.begin("w", CanvasPoint::new(50, 50), CanvasPoint::new(100, 100));
    let (_, origin) = drag.update(CanvasPoint::new(200, 200)).unwrap();
    assert_eq!(origin, CanvasPoint::new(250, 250));
}

#[test]
fn pointer_up_anywhere_ends_the_drag() {
    let mut drag = DragController::new();
    drag.begin("w", CanvasPoint::new(10, 10), CanvasPoint::new(0, 0));
    assert!(drag.is_dragging());
    assert_eq!(drag.end().as_deref(), Some("w"));
    assert!(drag.update(CanvasPoint::new(999, 999)).is_none());
}

#[test]
fn desk_reports_every_drag_frame() {
    let mut desk = Desk::new();
    desk.set_viewport(CanvasSize::new(1200, 800));
    let id = desk.open(
        WindowSpec::new("a", "A").size(100, 50).position(200, 300),
        Box::new(TextPanel::new("")),
    );

    // Grab the title bar (one row below the top border).
    assert!(desk.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 220, 301)));
    for (col, row, expect) in [
        (230u16, 305u16, CanvasPoint::new(210, 304)),
        (260, 320, CanvasPoint::new(240, 319)),
        (205, 290, CanvasPoint::new(185, 289)),
    ] {
        assert!(desk.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), col, row)));
        assert_eq!(desk.registry().get(&id).unwrap().position(), expect);
    }
    assert!(desk.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 205, 290)));

    // After release, stray drags move nothing.
    assert!(!desk.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 400, 400)));
    assert_eq!(
        desk.registry().get(&id).unwrap().position(),
        CanvasPoint::new(185, 289)
    );
}

#[test]
fn dragging_grows_the_canvas_under_the_window() {
    let mut desk = Desk::new();
    desk.set_viewport(CanvasSize::new(1200, 800));
    desk.open(
        WindowSpec::new("a", "A").size(400, 300).position(100, 100),
        Box::new(TextPanel::new("")),
    );
    assert_eq!(desk.canvas_size(), CanvasSize::new(1200, 800));

    assert!(desk.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 150, 101)));
    assert!(desk.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 1150, 701)));
    // Window now at (1100, 700): right edge 1500, bottom edge 1000.
    assert_eq!(desk.canvas_size(), CanvasSize::new(2000, 1500));
}
