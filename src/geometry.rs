//! Canvas geometry primitives.
//!
//! The desk canvas uses abstract integer units with a signed origin: a window
//! dragged past the left or top edge keeps a meaningful (negative) position
//! instead of being clamped, which is what lets the canvas grow under it.

/// Signed top-left point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasPoint {
    pub x: i32,
    pub y: i32,
}

impl CanvasPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Unsigned extent in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Signed rectangle: signed origin, unsigned size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CanvasRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(origin: CanvasPoint, size: CanvasSize) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> CanvasPoint {
        CanvasPoint::new(self.x, self.y)
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }

    /// One past the right-most covered column.
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// One past the bottom-most covered row.
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        i64::from(x) >= i64::from(self.x)
            && i64::from(x) < self.right()
            && i64::from(y) >= i64::from(self.y)
            && i64::from(y) < self.bottom()
    }
}

/// Clamp a window origin so the whole window fits inside the viewport.
///
/// Used once at creation time; user drags afterwards are unconstrained. When
/// the window is larger than the viewport the origin saturates to zero.
pub fn clamp_origin(origin: CanvasPoint, size: CanvasSize, viewport: CanvasSize) -> CanvasPoint {
    let max_x = viewport.width.saturating_sub(size.width) as i32;
    let max_y = viewport.height.saturating_sub(size.height) as i32;
    CanvasPoint::new(origin.x.clamp(0, max_x.max(0)), origin.y.clamp(0, max_y.max(0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_respects_signed_origin() {
        let rect = CanvasRect::new(-10, -5, 20, 10);
        assert!(rect.contains(-10, -5));
        assert!(rect.contains(9, 4));
        assert!(!rect.contains(10, 4));
        assert!(!rect.contains(-11, 0));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = CanvasRect::new(5, 5, 0, 3);
        assert!(!rect.contains(5, 5));
    }

    #[test]
    fn clamp_origin_keeps_window_inside_viewport() {
        let viewport = CanvasSize::new(1200, 800);
        let size = CanvasSize::new(800, 600);
        let clamped = clamp_origin(CanvasPoint::new(700, 500), size, viewport);
        assert_eq!(clamped, CanvasPoint::new(400, 200));
        let clamped = clamp_origin(CanvasPoint::new(-40, -40), size, viewport);
        assert_eq!(clamped, CanvasPoint::new(0, 0));
    }

    #[test]
    fn clamp_origin_saturates_when_window_exceeds_viewport() {
        let viewport = CanvasSize::new(300, 200);
        let size = CanvasSize::new(800, 600);
        let clamped = clamp_origin(CanvasPoint::new(100, 150), size, viewport);
        assert_eq!(clamped, CanvasPoint::new(0, 0));
    }
}
