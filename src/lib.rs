//! civitas-desk: a desktop-like MDI window manager with a terminal shell.
//!
//! The core is a window registry with single-instance-per-kind semantics, a
//! monotonic z-order allocator, and a canvas tracker that grows a scrollable
//! surface to contain every window. The [`desk::Desk`] ties them together and
//! hosts opaque [`content::WindowContent`] panels behind draggable chrome.

pub mod canvas;
pub mod chrome;
pub mod constants;
pub mod content;
pub mod desk;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod runner;
pub mod shell;
pub mod tracing_sub;
pub mod zorder;

pub use desk::Desk;
pub use error::{DeskError, DeskResult};
pub use geometry::{CanvasPoint, CanvasRect, CanvasSize};
pub use registry::{WindowRecord, WindowRegistry, WindowSpec};
