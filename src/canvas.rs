//! Position tracking and canvas sizing.
//!
//! Windows are free-floating with no bound enforcement, so the scrollable
//! canvas must grow to keep every window reachable and shrink back to the
//! viewport once the far-dragged windows are gone. The tracker is a derived
//! cache of last-reported rectangles, not authoritative window state.

use std::collections::BTreeMap;

use crate::constants::CANVAS_MARGIN;
use crate::geometry::{CanvasRect, CanvasSize};

/// Last-reported rectangle per window, plus the sizing rule derived from it.
#[derive(Debug, Default)]
pub struct CanvasTracker {
    rects: BTreeMap<String, CanvasRect>,
}

impl CanvasTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest rectangle for a window. Called on every drag frame.
    pub fn upsert(&mut self, id: &str, rect: CanvasRect) {
        self.rects.insert(id.to_string(), rect);
    }

    pub fn remove(&mut self, id: &str) {
        self.rects.remove(id);
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn get(&self, id: &str) -> Option<CanvasRect> {
        self.rects.get(id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Canvas size needed to contain every tracked window plus a margin.
    ///
    /// With no windows the canvas is exactly the viewport. Otherwise each
    /// dimension is the furthest window edge plus [`CANVAS_MARGIN`], floored
    /// at the viewport so the canvas never shrinks below the visible area.
    /// This is a full recomputation over the map, not an accumulator, which
    /// is what lets the canvas collapse after windows close.
    pub fn canvas_size(&self, viewport: CanvasSize) -> CanvasSize {
        if self.rects.is_empty() {
            return viewport;
        }
        let mut max_right: i64 = 0;
        let mut max_bottom: i64 = 0;
        for rect in self.rects.values() {
            max_right = max_right.max(rect.right());
            max_bottom = max_bottom.max(rect.bottom());
        }
        let width = (max_right + i64::from(CANVAS_MARGIN)).max(i64::from(viewport.width));
        let height = (max_bottom + i64::from(CANVAS_MARGIN)).max(i64::from(viewport.height));
        CanvasSize::new(
            width.clamp(0, i64::from(u32::MAX)) as u32,
            height.clamp(0, i64::from(u32::MAX)) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: CanvasSize = CanvasSize {
        width: 1200,
        height: 800,
    };

    #[test]
    fn empty_tracker_matches_viewport_exactly() {
        let tracker = CanvasTracker::new();
        assert_eq!(tracker.canvas_size(VIEWPORT), VIEWPORT);
    }

    #[test]
    fn canvas_grows_past_furthest_window_edge() {
        let mut tracker = CanvasTracker::new();
        tracker.upsert("a", CanvasRect::new(0, 0, 800, 600));
        tracker.upsert("b", CanvasRect::new(1000, 800, 400, 300));
        assert_eq!(tracker.canvas_size(VIEWPORT), CanvasSize::new(1900, 1900));
    }

    #[test]
    fn canvas_never_shrinks_below_viewport() {
        let mut tracker = CanvasTracker::new();
        tracker.upsert("a", CanvasRect::new(10, 10, 100, 50));
        assert_eq!(tracker.canvas_size(VIEWPORT), VIEWPORT);
    }

    #[test]
    fn removing_windows_collapses_canvas() {
        let mut tracker = CanvasTracker::new();
        tracker.upsert("a", CanvasRect::new(5000, 5000, 400, 300));
        assert_eq!(tracker.canvas_size(VIEWPORT), CanvasSize::new(5900, 5800));
        tracker.remove("a");
        assert_eq!(tracker.canvas_size(VIEWPORT), VIEWPORT);
    }

    #[test]
    fn upsert_replaces_previous_rect() {
        let mut tracker = CanvasTracker::new();
        tracker.upsert("a", CanvasRect::new(5000, 0, 400, 300));
        tracker.upsert("a", CanvasRect::new(0, 0, 400, 300));
        assert_eq!(tracker.canvas_size(VIEWPORT), VIEWPORT);
    }

    #[test]
    fn negative_origins_do_not_shrink_extent() {
        let mut tracker = CanvasTracker::new();
        tracker.upsert("a", CanvasRect::new(-600, -400, 400, 300));
        // The window is entirely off-canvas toward the origin; the canvas
        // stays at viewport size rather than going negative.
        assert_eq!(tracker.canvas_size(VIEWPORT), VIEWPORT);
    }
}
