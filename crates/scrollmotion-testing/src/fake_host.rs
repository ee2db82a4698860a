//! Scriptable host environment.
//!
//! [`FakeHost`] plays the role a browser bridge or windowing shell would:
//! it owns the geometry, the scroll event hub, and the clock, all fully
//! scriptable. Tests mutate layout, advance time, and scroll; the library
//! under test cannot tell the difference from a real host.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use scrollmotion_core::{
    Clock, ElementId, GeometryReader, Rect, ScrollEvents, ScrollSample, Viewport,
};

/// Manually advanced clock.
#[derive(Clone, Default)]
pub struct TestClock {
    now: Rc<Cell<Duration>>,
}

impl TestClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for TestClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

struct FakeHostState {
    viewport: Viewport,
    rects: HashMap<ElementId, Rect>,
}

/// Fake geometry + events + clock behind cheap clones.
///
/// Scrolling through [`FakeHost::scroll_to`] keeps the two things a real
/// host keeps consistent in lockstep: the geometry snapshot and the emitted
/// sample carry the same offset, and the sample is stamped with the fake
/// clock's current time.
#[derive(Clone)]
pub struct FakeHost {
    state: Rc<RefCell<FakeHostState>>,
    events: ScrollEvents,
    clock: TestClock,
}

impl FakeHost {
    pub fn new(width: f32, height: f32, document_height: f32) -> Self {
        Self {
            state: Rc::new(RefCell::new(FakeHostState {
                viewport: Viewport::new(0.0, width, height, document_height),
                rects: HashMap::new(),
            })),
            events: ScrollEvents::new(),
            clock: TestClock::new(),
        }
    }

    pub fn events(&self) -> &ScrollEvents {
        &self.events
    }

    pub fn clock(&self) -> &TestClock {
        &self.clock
    }

    pub fn scroll_y(&self) -> f32 {
        self.state.borrow().viewport.scroll_y
    }

    /// Re-lays-out the viewport dimensions mid-test.
    pub fn set_viewport_size(&self, width: f32, height: f32) {
        let mut state = self.state.borrow_mut();
        state.viewport.width = width;
        state.viewport.height = height;
    }

    /// Grows or shrinks the document mid-test.
    pub fn set_document_height(&self, height: f32) {
        self.state.borrow_mut().viewport.document_height = height;
    }

    /// Mounts (or re-lays-out) an element.
    pub fn place_element(&self, element: ElementId, rect: Rect) {
        self.state.borrow_mut().rects.insert(element, rect);
    }

    /// Unmounts an element; its rect becomes unmeasurable.
    pub fn remove_element(&self, element: ElementId) {
        self.state.borrow_mut().rects.remove(&element);
    }

    /// Sets the scroll offset and emits the matching sample at the fake
    /// clock's current time.
    pub fn scroll_to(&self, offset_y: f32) {
        self.state.borrow_mut().viewport.scroll_y = offset_y;
        self.events
            .emit(ScrollSample::new(offset_y, self.clock.now()));
    }

    pub fn scroll_by(&self, delta_y: f32) {
        let target = self.scroll_y() + delta_y;
        self.scroll_to(target);
    }

    /// Re-emits the current offset at the current time — a duplicate event,
    /// the kind hosts produce when layout thrash re-fires a handler.
    pub fn emit_duplicate(&self) {
        self.events
            .emit(ScrollSample::new(self.scroll_y(), self.clock.now()));
    }
}

impl GeometryReader for FakeHost {
    fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    fn element_rect(&self, element: ElementId) -> Option<Rect> {
        self.state.borrow().rects.get(&element).copied()
    }
}
