//! Page-wide fan-out from a single host scroll subscription.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use scrollmotion_animation::{VisibilityConfig, VisibilityTrigger};
use scrollmotion_core::{
    ElementId, GeometryReader, ScrollEvents, ScrollSample, Subscription, Viewport,
};

use crate::parallax::Parallax;
use crate::progress::ScrollProgress;
use crate::signal::{ScrollSignal, ScrollState};

type VisibilityCallback = Rc<RefCell<dyn FnMut(bool)>>;

struct WatchEntry {
    trigger: VisibilityTrigger,
    callback: Option<VisibilityCallback>,
    alive: Rc<Cell<bool>>,
    generation: u64,
}

struct BindingEntry {
    parallax: Parallax,
    generation: u64,
}

struct CoordinatorState {
    geometry: Rc<dyn GeometryReader>,
    signal: ScrollSignal,
    progress: ScrollProgress,
    watches: FxHashMap<ElementId, WatchEntry>,
    bindings: FxHashMap<ElementId, BindingEntry>,
    next_generation: u64,
}

/// Coordinates every scroll-driven measurement for one page.
///
/// The host emits samples into a [`ScrollEvents`] hub; the coordinator holds
/// the single downstream subscription and fans each tick out synchronously:
/// signal, then progress, then parallax bindings, then visibility watches.
/// The geometry snapshot is read fresh from the injected [`GeometryReader`]
/// on every tick; the sample's own offset only feeds velocity tracking.
///
/// Sections register through RAII handles. Dropping a handle tears the
/// registration down exactly once and stops callback delivery immediately,
/// including for a dispatch already in flight. Registering an element that
/// is already registered replaces the previous entry, so mounts are
/// idempotent.
#[derive(Clone)]
pub struct ScrollCoordinator {
    state: Rc<RefCell<CoordinatorState>>,
    subscription: Rc<RefCell<Option<Subscription>>>,
}

impl ScrollCoordinator {
    pub fn new(geometry: Rc<dyn GeometryReader>) -> Self {
        Self {
            state: Rc::new(RefCell::new(CoordinatorState {
                geometry,
                signal: ScrollSignal::new(),
                progress: ScrollProgress::new(),
                watches: FxHashMap::default(),
                bindings: FxHashMap::default(),
                next_generation: 0,
            })),
            subscription: Rc::new(RefCell::new(None)),
        }
    }

    /// Subscribes to `events`, replacing any previous attachment. However
    /// many times a page runs its mount path, exactly one scroll listener
    /// is held.
    pub fn attach(&self, events: &ScrollEvents) {
        if self.subscription.borrow().is_some() {
            log::debug!("coordinator re-attach: replacing existing scroll listener");
        }
        let weak = Rc::downgrade(&self.state);
        let subscription = events.subscribe(move |sample| {
            if let Some(state) = weak.upgrade() {
                Self::dispatch(&state, *sample);
            }
        });
        *self.subscription.borrow_mut() = Some(subscription);
    }

    /// Drops the hub subscription. Registered watches and bindings stay put
    /// and resume on the next attach.
    pub fn detach(&self) {
        self.subscription.borrow_mut().take();
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    /// Feeds one sample directly, for hosts that call in without a hub.
    pub fn on_scroll(&self, sample: ScrollSample) {
        Self::dispatch(&self.state, sample);
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.state.borrow().signal.state()
    }

    pub fn progress(&self) -> f32 {
        self.state.borrow().progress.value()
    }

    /// Current geometry snapshot, as the coordinator would read it.
    pub fn viewport(&self) -> Viewport {
        let geometry = self.state.borrow().geometry.clone();
        geometry.viewport()
    }

    /// Registers a visibility watch for `element`.
    ///
    /// The watch is evaluated once immediately, mirroring observer APIs that
    /// report the initial intersection.
    pub fn watch(&self, element: ElementId, config: VisibilityConfig) -> WatchHandle {
        self.register_watch(element, config, None)
    }

    /// Like [`watch`](Self::watch), with a callback invoked on every
    /// visibility toggle (including the initial report when the element
    /// starts out visible).
    pub fn watch_with(
        &self,
        element: ElementId,
        config: VisibilityConfig,
        callback: impl FnMut(bool) + 'static,
    ) -> WatchHandle {
        self.register_watch(element, config, Some(Rc::new(RefCell::new(callback))))
    }

    /// Current trigger state for a watched element.
    pub fn visibility(&self, element: ElementId) -> Option<VisibilityTrigger> {
        self.state
            .borrow()
            .watches
            .get(&element)
            .map(|entry| entry.trigger.clone())
    }

    /// Registers a parallax binding with the default strength.
    pub fn bind_parallax(&self, element: ElementId) -> ParallaxHandle {
        self.register_binding(Parallax::new(element))
    }

    /// Registers a parallax binding with an explicit strength factor.
    pub fn bind_parallax_with(&self, element: ElementId, strength: f32) -> ParallaxHandle {
        self.register_binding(Parallax::with_strength(element, strength))
    }

    /// Last computed offset for a bound element.
    pub fn parallax_offset(&self, element: ElementId) -> Option<f32> {
        self.state
            .borrow()
            .bindings
            .get(&element)
            .map(|entry| entry.parallax.offset())
    }

    pub fn watch_count(&self) -> usize {
        self.state.borrow().watches.len()
    }

    pub fn binding_count(&self) -> usize {
        self.state.borrow().bindings.len()
    }

    fn register_watch(
        &self,
        element: ElementId,
        config: VisibilityConfig,
        callback: Option<VisibilityCallback>,
    ) -> WatchHandle {
        let alive = Rc::new(Cell::new(true));
        let generation;
        let initial;
        {
            let mut st = self.state.borrow_mut();
            st.next_generation += 1;
            generation = st.next_generation;
            let geometry = st.geometry.clone();
            let mut trigger = VisibilityTrigger::new(element, config);
            initial = trigger.evaluate(geometry.as_ref());
            let entry = WatchEntry {
                trigger,
                callback: callback.clone(),
                alive: alive.clone(),
                generation,
            };
            if st.watches.insert(element, entry).is_some() {
                log::debug!("element {element:?} watched again: previous watch replaced");
            }
        }
        if let (Some(visible), Some(callback)) = (initial, callback) {
            (callback.borrow_mut())(visible);
        }
        WatchHandle {
            state: Rc::downgrade(&self.state),
            element,
            generation,
            alive,
        }
    }

    fn register_binding(&self, mut parallax: Parallax) -> ParallaxHandle {
        let element = parallax.element();
        let generation;
        {
            let mut st = self.state.borrow_mut();
            st.next_generation += 1;
            generation = st.next_generation;
            let geometry = st.geometry.clone();
            parallax.update(geometry.as_ref());
            let entry = BindingEntry {
                parallax,
                generation,
            };
            if st.bindings.insert(element, entry).is_some() {
                log::debug!("element {element:?} bound again: previous binding replaced");
            }
        }
        ParallaxHandle {
            state: Rc::downgrade(&self.state),
            element,
            generation,
        }
    }

    fn dispatch(state: &Rc<RefCell<CoordinatorState>>, sample: ScrollSample) {
        // Measurements run under one borrow; callbacks run after it is
        // released so they can drop handles or register new ones.
        let mut pending: SmallVec<[(Rc<Cell<bool>>, VisibilityCallback, bool); 4]> =
            SmallVec::new();
        {
            let mut st = state.borrow_mut();
            let geometry = st.geometry.clone();
            let viewport = geometry.viewport();

            st.signal.on_sample(sample);
            let progress = st.progress.update(&viewport);
            log::trace!(
                "scroll tick: offset={} progress={progress:.3} velocity={:.0}px/s",
                sample.offset_y,
                st.signal.velocity()
            );

            for entry in st.bindings.values_mut() {
                entry.parallax.update(geometry.as_ref());
            }
            for entry in st.watches.values_mut() {
                if let Some(visible) = entry.trigger.evaluate(geometry.as_ref()) {
                    if let Some(callback) = &entry.callback {
                        pending.push((entry.alive.clone(), callback.clone(), visible));
                    }
                }
            }
        }
        for (alive, callback, visible) in pending {
            if alive.get() {
                (callback.borrow_mut())(visible);
            }
        }
    }
}

/// RAII guard for one visibility watch.
///
/// Dropping it releases the observation exactly once; a handle made stale by
/// a replacing registration drops as a no-op.
pub struct WatchHandle {
    state: Weak<RefCell<CoordinatorState>>,
    element: ElementId,
    generation: u64,
    alive: Rc<Cell<bool>>,
}

impl WatchHandle {
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Live trigger state, while this handle still owns the watch.
    pub fn trigger(&self) -> Option<VisibilityTrigger> {
        let state = self.state.upgrade()?;
        let st = state.borrow();
        let entry = st.watches.get(&self.element)?;
        (entry.generation == self.generation).then(|| entry.trigger.clone())
    }

    pub fn is_visible(&self) -> bool {
        self.trigger().is_some_and(|t| t.is_visible())
    }

    pub fn has_animated_once(&self) -> bool {
        self.trigger().is_some_and(|t| t.has_animated_once())
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.alive.set(false);
        if let Some(state) = self.state.upgrade() {
            let mut st = state.borrow_mut();
            let owned = st
                .watches
                .get(&self.element)
                .is_some_and(|entry| entry.generation == self.generation);
            if owned {
                st.watches.remove(&self.element);
                log::trace!("visibility watch removed for element {:?}", self.element);
            }
        }
    }
}

/// RAII guard for one parallax binding.
pub struct ParallaxHandle {
    state: Weak<RefCell<CoordinatorState>>,
    element: ElementId,
    generation: u64,
}

impl ParallaxHandle {
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Last computed offset, while this handle still owns the binding.
    pub fn offset(&self) -> Option<f32> {
        let state = self.state.upgrade()?;
        let st = state.borrow();
        let entry = st.bindings.get(&self.element)?;
        (entry.generation == self.generation).then(|| entry.parallax.offset())
    }
}

impl Drop for ParallaxHandle {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            let mut st = state.borrow_mut();
            let owned = st
                .bindings
                .get(&self.element)
                .is_some_and(|entry| entry.generation == self.generation);
            if owned {
                st.bindings.remove(&self.element);
                log::trace!("parallax binding removed for element {:?}", self.element);
            }
        }
    }
}
