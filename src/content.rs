//! Hosted window content.
//!
//! The desk treats content as an opaque renderable: it hands the content a
//! clipped area to paint and forwards events to the focused window, but never
//! inspects what is inside. Panels that panic while rendering are the host
//! application's problem, not the manager's.

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Wrap};

/// One unit of hosted content behind a window's chrome.
pub trait WindowContent {
    /// Paint into `area`, which is already clipped to the visible screen and
    /// excludes the window chrome.
    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool);

    /// Handle an event routed to this window. Returns true when consumed.
    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }
}

/// Plain scroll-free text content, enough for data-entry placeholders and
/// integration tests.
pub struct TextPanel {
    text: String,
}

impl TextPanel {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl WindowContent for TextPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        let paragraph = Paragraph::new(Text::raw(self.text.as_str()))
            .style(style)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
