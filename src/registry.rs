//! Window registry: the single source of truth for which windows are open.
//!
//! The registry enforces single-instance-per-kind semantics: opening a kind
//! that is already on screen brings the existing window to the front instead
//! of creating a second copy. All operations are total; acting on an unknown
//! id is a silent no-op.

use std::fmt;

use crate::constants::{
    CASCADE_BASE_X, CASCADE_BASE_Y, CASCADE_STEP, CHROME_Z, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::content::WindowContent;
use crate::geometry::{CanvasPoint, CanvasRect, CanvasSize, clamp_origin};
use crate::zorder::ZOrderAllocator;

/// Open request: what a caller supplies when asking for a window.
///
/// `kind` is the logical category used for single-instance semantics, e.g.
/// `"cliente"` for the client registration panel. The id and position are
/// optional; the registry generates both when absent.
#[derive(Debug, Clone)]
pub struct WindowSpec {
    pub kind: String,
    pub title: String,
    pub size: CanvasSize,
    pub id: Option<String>,
    pub position: Option<CanvasPoint>,
}

impl WindowSpec {
    pub fn new(kind: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            title: title.into(),
            size: CanvasSize::new(800, 600),
            id: None,
            position: None,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = CanvasSize::new(width.max(MIN_WINDOW_WIDTH), height.max(MIN_WINDOW_HEIGHT));
        self
    }

    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.position = Some(CanvasPoint::new(x, y));
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// One open panel instance.
pub struct WindowRecord {
    id: String,
    kind: String,
    title: String,
    position: CanvasPoint,
    /// Nominal dimensions, fixed at creation. Minimize and maximize change
    /// how the window is displayed, never the nominal size.
    size: CanvasSize,
    z: u32,
    minimized: bool,
    maximized: bool,
    content: Box<dyn WindowContent>,
}

impl fmt::Debug for WindowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowRecord")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("z", &self.z)
            .field("minimized", &self.minimized)
            .field("maximized", &self.maximized)
            .finish_non_exhaustive()
    }
}

impl WindowRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> CanvasPoint {
        self.position
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn z(&self) -> u32 {
        self.z
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Nominal rectangle in canvas coordinates, ignoring minimize/maximize
    /// display overrides.
    pub fn rect(&self) -> CanvasRect {
        CanvasRect::from_parts(self.position, self.size)
    }

    pub fn content_mut(&mut self) -> &mut dyn WindowContent {
        self.content.as_mut()
    }
}

/// Ordered collection of open windows, keyed by id and by kind.
///
/// Records are kept in creation order; stacking is carried by each record's
/// z value. Every mutation bumps a version counter and sets a dirty flag the
/// host drains, replacing the source framework's re-render-on-change wiring
/// with explicit notification.
pub struct WindowRegistry {
    records: Vec<WindowRecord>,
    allocator: ZOrderAllocator,
    creations: u64,
    next_seq: u64,
    version: u64,
    dirty: bool,
    closed: Vec<String>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            allocator: ZOrderAllocator::new(),
            creations: 0,
            next_seq: 0,
            version: 0,
            dirty: false,
            closed: Vec::new(),
        }
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
        self.dirty = true;
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    fn index_of_kind(&self, kind: &str) -> Option<usize> {
        self.records.iter().position(|record| record.kind == kind)
    }

    fn next_z(&mut self) -> u32 {
        let z = self.allocator.next();
        if self.allocator.needs_renormalize() {
            return self.renormalize(z);
        }
        z
    }

    /// Re-rank every open window to `CHROME_Z + 1 ..` in current stacking
    /// order. `pending` is the value just issued for the window being raised;
    /// returns its replacement (the new topmost rank).
    fn renormalize(&mut self, pending: u32) -> u32 {
        let mut order: Vec<usize> = (0..self.records.len()).collect();
        order.sort_by_key(|&idx| self.records[idx].z);
        for (rank, idx) in order.iter().enumerate() {
            self.records[*idx].z = CHROME_Z + 1 + rank as u32;
        }
        let top = CHROME_Z + 1 + self.records.len() as u32;
        self.allocator.reseed(top);
        tracing::debug!(windows = self.records.len(), pending, top, "renormalized z order");
        top
    }

    fn cascade_position(&self, size: CanvasSize, viewport: CanvasSize) -> CanvasPoint {
        let step = CASCADE_STEP.saturating_mul(self.creations as i32);
        let origin = CanvasPoint::new(
            CASCADE_BASE_X.saturating_add(step),
            CASCADE_BASE_Y.saturating_add(step),
        );
        clamp_origin(origin, size, viewport)
    }

    /// Open a window, or bring the existing window of the same kind to the
    /// front. Always succeeds; returns the id of the resulting record.
    ///
    /// A duplicate open re-ranks the existing record and clears its minimized
    /// flag but never alters its position, size, or identity.
    pub fn open(
        &mut self,
        spec: WindowSpec,
        content: Box<dyn WindowContent>,
        viewport: CanvasSize,
    ) -> String {
        if let Some(idx) = self.index_of_kind(&spec.kind) {
            let z = self.next_z();
            let record = &mut self.records[idx];
            record.z = z;
            record.minimized = false;
            let id = record.id.clone();
            tracing::debug!(id = %id, kind = %spec.kind, z, "raised existing window");
            self.touch();
            return id;
        }

        let position = spec
            .position
            .map(|origin| clamp_origin(origin, spec.size, viewport))
            .unwrap_or_else(|| self.cascade_position(spec.size, viewport));
        let id = spec.id.unwrap_or_else(|| {
            self.next_seq += 1;
            format!("{}-{}", spec.kind, self.next_seq)
        });
        let z = self.next_z();
        tracing::debug!(id = %id, kind = %spec.kind, ?position, z, "opened window");
        self.records.push(WindowRecord {
            id: id.clone(),
            kind: spec.kind,
            title: spec.title,
            position,
            size: spec.size,
            z,
            minimized: false,
            maximized: false,
            content,
        });
        self.creations += 1;
        self.touch();
        id
    }

    /// Remove the window with this id. No-op when absent.
    pub fn close(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let record = self.records.remove(idx);
        tracing::debug!(id = %record.id, kind = %record.kind, "closed window");
        self.closed.push(record.id);
        self.touch();
    }

    /// Remove every window of the given kind. Given the uniqueness invariant
    /// this matches zero or one record.
    pub fn close_by_kind(&mut self, kind: &str) {
        let mut removed = false;
        let mut idx = 0;
        while idx < self.records.len() {
            if self.records[idx].kind == kind {
                let record = self.records.remove(idx);
                tracing::debug!(id = %record.id, kind = %record.kind, "closed window");
                self.closed.push(record.id);
                removed = true;
            } else {
                idx += 1;
            }
        }
        if removed {
            self.touch();
        }
    }

    /// Remove every open window.
    pub fn close_all(&mut self) {
        if self.records.is_empty() {
            return;
        }
        for record in self.records.drain(..) {
            self.closed.push(record.id);
        }
        tracing::debug!("closed all windows");
        self.touch();
    }

    /// Assign the next stacking value to this window. No-op when absent.
    pub fn bring_to_front(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let z = self.next_z();
        self.records[idx].z = z;
        self.touch();
    }

    /// Overwrite the window's position. Unconstrained: drags may move a
    /// window to negative coordinates, which is what makes the canvas grow.
    pub fn update_position(&mut self, id: &str, position: CanvasPoint) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        self.records[idx].position = position;
        self.touch();
    }

    pub fn toggle_minimize(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        self.records[idx].minimized = !self.records[idx].minimized;
        self.touch();
    }

    pub fn toggle_maximize(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        self.records[idx].maximized = !self.records[idx].maximized;
        self.touch();
    }

    pub fn is_kind_open(&self, kind: &str) -> bool {
        self.index_of_kind(kind).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&WindowRecord> {
        self.index_of(id).map(|idx| &self.records[idx])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut WindowRecord> {
        self.index_of(id).map(move |idx| &mut self.records[idx])
    }

    pub fn get_by_kind(&self, kind: &str) -> Option<&WindowRecord> {
        self.index_of_kind(kind).map(|idx| &self.records[idx])
    }

    /// Records in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.iter()
    }

    /// Ids sorted bottom-most first; render in this order and the topmost
    /// window paints last.
    pub fn draw_order(&self) -> Vec<String> {
        let mut ids: Vec<(u32, &str)> = self
            .records
            .iter()
            .map(|record| (record.z, record.id.as_str()))
            .collect();
        ids.sort_by_key(|(z, _)| *z);
        ids.into_iter().map(|(_, id)| id.to_string()).collect()
    }

    /// Id of the highest-stacked window, if any.
    pub fn topmost(&self) -> Option<&WindowRecord> {
        self.records.iter().max_by_key(|record| record.z)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counter bumped by every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Drain the dirty flag; true when anything changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Drain ids removed since the last call; the host uses this to release
    /// per-window resources it holds outside the registry.
    pub fn take_closed(&mut self) -> Vec<String> {
        std::mem::take(&mut self.closed)
    }
}
