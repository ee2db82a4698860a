//! Capabilities the host environment injects into the animation layer.
//!
//! The library never reaches for a runtime global. A host (browser bridge,
//! native windowing shell, test fixture) hands in read access to its current
//! layout and a scroll event stream; everything downstream is a pure
//! consumer of those, which is what makes the whole layer drivable from a
//! fake clock and fake geometry.

use std::time::Duration;

use web_time::Instant;

use crate::geometry::{Rect, Viewport};

/// Identifies one observable element within a page.
///
/// Hosts mint these however they like (DOM node ids, layout node ids, slot
/// indices); the animation layer only stores and compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Read access to the host's current layout.
///
/// Implementations answer from the live layout on every call. `element_rect`
/// returns `None` while an element is not mounted or not yet measurable;
/// consumers treat that as "skip this tick", never as an error.
pub trait GeometryReader {
    /// Current viewport and document metrics.
    fn viewport(&self) -> Viewport;

    /// Bounds of `element` in document coordinates, if it is measurable.
    fn element_rect(&self, element: ElementId) -> Option<Rect>;
}

/// Monotonic time source for looping animations.
///
/// Scroll velocity never consults a clock; it derives from the timestamps
/// carried by the samples themselves. The clock exists for idle loops
/// (pulses, drifting backgrounds) that keep moving while scrolling is still.
pub trait Clock {
    /// Time elapsed since the host's epoch.
    fn now(&self) -> Duration;
}

/// Wall clock measured from construction.
///
/// Uses `web_time` so the same code path works on native and wasm targets.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
