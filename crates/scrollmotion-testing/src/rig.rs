//! Drive-and-assert harness.

use std::rc::Rc;
use std::time::Duration;

use scrollmotion_core::{ElementId, Rect};
use scrollmotion_foundation::constants::FRAME_INTERVAL;
use scrollmotion_foundation::ScrollCoordinator;

use crate::fake_host::FakeHost;

/// A [`FakeHost`] with a [`ScrollCoordinator`] already attached.
///
/// The rig steps scroll positions the way a scripted driver steps input:
/// fixed frames, clock advanced [`FRAME_INTERVAL`] per frame, geometry and
/// samples in lockstep. Tests scroll, then assert on the coordinator.
pub struct ScrollRig {
    host: FakeHost,
    coordinator: ScrollCoordinator,
}

impl ScrollRig {
    pub fn new(width: f32, height: f32, document_height: f32) -> Self {
        let host = FakeHost::new(width, height, document_height);
        let coordinator = ScrollCoordinator::new(Rc::new(host.clone()));
        coordinator.attach(host.events());
        Self { host, coordinator }
    }

    pub fn host(&self) -> &FakeHost {
        &self.host
    }

    pub fn coordinator(&self) -> &ScrollCoordinator {
        &self.coordinator
    }

    pub fn place_element(&self, element: ElementId, rect: Rect) {
        self.host.place_element(element, rect);
    }

    /// Scrolls to `target` in `steps` evenly spaced frames.
    ///
    /// Panics if `steps` is zero; a scroll that takes no frames is a test
    /// bug, not a scenario.
    pub fn scroll_to(&self, target: f32, steps: usize) {
        assert!(steps > 0, "scroll_to needs at least one frame");
        let start = self.host.scroll_y();
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.host.clock().advance(FRAME_INTERVAL);
            self.host.scroll_to(start + (target - start) * t);
        }
    }

    /// Jumps straight to `target` in a single frame.
    pub fn jump_to(&self, target: f32) {
        self.scroll_to(target, 1);
    }

    /// One idle frame: time advances, offset stays, a fresh sample fires.
    pub fn idle_frame(&self) {
        self.host.clock().advance(FRAME_INTERVAL);
        self.host.scroll_to(self.host.scroll_y());
    }

    /// Elapsed fake time.
    pub fn now(&self) -> Duration {
        use scrollmotion_core::Clock;
        self.host.clock().now()
    }
}
