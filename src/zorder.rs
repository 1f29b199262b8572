//! Monotonic stacking-order allocation.

use crate::constants::{CHROME_Z, Z_HIGH_WATER};

/// Issues strictly increasing z values, seeded above the static chrome so
/// windows always paint over the application shell.
///
/// Values are never reused within a session; the registry renormalizes open
/// windows and calls [`ZOrderAllocator::reseed`] once the counter crosses the
/// high-water mark.
#[derive(Debug, Clone, Copy)]
pub struct ZOrderAllocator {
    counter: u32,
}

impl Default for ZOrderAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ZOrderAllocator {
    pub fn new() -> Self {
        Self { counter: CHROME_Z }
    }

    /// Next stacking value, strictly greater than every value issued before.
    pub fn next(&mut self) -> u32 {
        self.counter = self.counter.saturating_add(1);
        self.counter
    }

    /// Whether the counter has grown far enough that the registry should
    /// re-rank open windows.
    pub fn needs_renormalize(&self) -> bool {
        self.counter >= Z_HIGH_WATER
    }

    /// Restart allocation above the given floor. The floor must be at least
    /// [`CHROME_Z`] plus the number of currently ranked windows.
    pub fn reseed(&mut self, floor: u32) {
        self.counter = floor.max(CHROME_Z);
    }
}
