//! Shared crate-wide constants.

/// Stacking value of the static application chrome (menu bars, toolbars).
/// Window z values are allocated strictly above this so a freshly opened
/// window always paints over the shell.
pub const CHROME_Z: u32 = 2000;

/// When the z allocator counter crosses this mark the registry re-ranks all
/// open windows back down to `CHROME_Z + 1 ..` while preserving their relative
/// order, bounding counter growth in long-running sessions.
pub const Z_HIGH_WATER: u32 = CHROME_Z + 1_000_000;

/// Top-left of the first window opened without an explicit position, in
/// canvas units. Sits below the chrome strip at the top of the canvas.
pub const CASCADE_BASE_X: i32 = 100;
pub const CASCADE_BASE_Y: i32 = 150;

/// Per-open diagonal offset applied to the cascade base so successive windows
/// do not stack exactly on top of each other.
pub const CASCADE_STEP: i32 = 30;

/// Extra canvas reserved past the furthest window edge so a window can still
/// be dragged beyond its current extent without being clipped.
pub const CANVAS_MARGIN: u32 = 500;

/// Rows of chrome a window always shows: the border row plus the title bar.
/// A minimized window collapses down to exactly this much.
pub const CHROME_ROWS: u32 = 2;

/// Smallest nominal size `WindowSpec` will accept, so the chrome controls
/// always have room to render.
pub const MIN_WINDOW_WIDTH: u32 = 12;
pub const MIN_WINDOW_HEIGHT: u32 = 3;
