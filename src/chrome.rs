//! Window chrome: borders, title bar, and the header controls.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

/// What a pointer-down on the chrome means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Drag,
    Minimize,
    Maximize,
    Close,
    None,
}

/// Renders one window's chrome and resolves pointer hits on it. The content
/// area below the chrome belongs to the hosted panel, not the decorator.
pub trait WindowDecorator {
    fn render_window(
        &self,
        frame: &mut Frame,
        rect: Rect,
        bounds: Rect,
        title: &str,
        focused: bool,
        minimized: bool,
    );

    /// Resolve a pointer position against the chrome of a window occupying
    /// `rect` on screen.
    fn hit_test(&self, rect: Rect, column: u16, row: u16) -> HeaderAction;
}

/// Offsets of the header controls from the window's right edge, on the title
/// row: `[×]` innermost, then `[□]`, then `[_]`.
const CLOSE_OFFSET: u16 = 2;
const MAXIMIZE_OFFSET: u16 = 4;
const MINIMIZE_OFFSET: u16 = 6;

#[derive(Debug, Default)]
pub struct DefaultDecorator;

impl DefaultDecorator {
    fn header_row(rect: Rect) -> u16 {
        rect.y.saturating_add(1)
    }
}

impl WindowDecorator for DefaultDecorator {
    fn render_window(
        &self,
        frame: &mut Frame,
        rect: Rect,
        bounds: Rect,
        title: &str,
        focused: bool,
        minimized: bool,
    ) {
        if rect.width < 3 || rect.height < 2 {
            return;
        }
        let buffer = frame.buffer_mut();

        let header_style = if focused {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        };
        let border_style = Style::default().fg(Color::DarkGray);

        let in_bounds = |x: u16, y: u16| {
            x >= bounds.x
                && x < bounds.x.saturating_add(bounds.width)
                && y >= bounds.y
                && y < bounds.y.saturating_add(bounds.height)
        };

        let left = rect.x;
        let top = rect.y;
        let right = rect.x.saturating_add(rect.width).saturating_sub(1);
        let bottom = rect.y.saturating_add(rect.height).saturating_sub(1);
        let header_y = Self::header_row(rect);

        // Top border.
        for x in left..=right {
            if in_bounds(x, top)
                && let Some(cell) = buffer.cell_mut((x, top))
            {
                if x == left {
                    cell.set_symbol("┌");
                } else if x == right {
                    cell.set_symbol("┐");
                } else {
                    cell.set_symbol("─");
                }
                cell.set_style(border_style);
            }
        }

        // Title bar background.
        if header_y <= bottom {
            for x in left..=right {
                if in_bounds(x, header_y)
                    && let Some(cell) = buffer.cell_mut((x, header_y))
                {
                    cell.set_symbol(if x == left || x == right { "│" } else { " " });
                    cell.set_style(if x == left || x == right {
                        border_style
                    } else {
                        header_style
                    });
                }
            }
            // Title, left-aligned after the border, truncated before the
            // controls.
            let text_start = left.saturating_add(2);
            let text_end = right.saturating_sub(MINIMIZE_OFFSET.saturating_add(1));
            let mut x = text_start;
            for ch in title.chars() {
                if x >= text_end {
                    break;
                }
                if in_bounds(x, header_y)
                    && let Some(cell) = buffer.cell_mut((x, header_y))
                {
                    cell.set_symbol(&ch.to_string());
                    cell.set_style(header_style);
                }
                x = x.saturating_add(1);
            }
            // Controls.
            for (offset, glyph) in [
                (MINIMIZE_OFFSET, "_"),
                (MAXIMIZE_OFFSET, "□"),
                (CLOSE_OFFSET, "×"),
            ] {
                let x = right.saturating_sub(offset);
                if x > left
                    && in_bounds(x, header_y)
                    && let Some(cell) = buffer.cell_mut((x, header_y))
                {
                    cell.set_symbol(glyph);
                    cell.set_style(header_style);
                }
            }
        }

        if minimized {
            return;
        }

        // Bottom border.
        for x in left..=right {
            if in_bounds(x, bottom)
                && let Some(cell) = buffer.cell_mut((x, bottom))
            {
                if x == left {
                    cell.set_symbol("└");
                } else if x == right {
                    cell.set_symbol("┘");
                } else {
                    cell.set_symbol("─");
                }
                cell.set_style(border_style);
            }
        }

        // Side borders.
        for y in top.saturating_add(2)..bottom {
            for x in [left, right] {
                if in_bounds(x, y)
                    && let Some(cell) = buffer.cell_mut((x, y))
                {
                    cell.set_symbol("│");
                    cell.set_style(border_style);
                }
            }
        }
    }

    fn hit_test(&self, rect: Rect, column: u16, row: u16) -> HeaderAction {
        if rect.width < 3 || rect.height < 2 {
            return HeaderAction::None;
        }
        let right = rect.x.saturating_add(rect.width).saturating_sub(1);
        if column < rect.x || column > right {
            return HeaderAction::None;
        }
        let header_y = Self::header_row(rect);
        if row == header_y {
            if column == right.saturating_sub(CLOSE_OFFSET) {
                return HeaderAction::Close;
            }
            if column == right.saturating_sub(MAXIMIZE_OFFSET) {
                return HeaderAction::Maximize;
            }
            if column == right.saturating_sub(MINIMIZE_OFFSET) {
                return HeaderAction::Minimize;
            }
            return HeaderAction::Drag;
        }
        if row == rect.y {
            return HeaderAction::Drag;
        }
        HeaderAction::None
    }
}
