//! Scroll event delivery with RAII deregistration.
//!
//! Hosts own one [`ScrollEvents`] hub per scrollable surface and call
//! [`ScrollEvents::emit`] from their native scroll callback. Consumers
//! subscribe and keep the returned [`Subscription`] alive for exactly as
//! long as they want delivery; dropping it is the teardown.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use smallvec::SmallVec;

/// One host scroll reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Vertical scroll offset in document pixels.
    pub offset_y: f32,
    /// Host-supplied timestamp, measured from the host's epoch.
    pub timestamp: Duration,
}

impl ScrollSample {
    pub fn new(offset_y: f32, timestamp: Duration) -> Self {
        Self {
            offset_y,
            timestamp,
        }
    }
}

type Listener = Rc<RefCell<dyn FnMut(&ScrollSample)>>;

struct ListenerEntry {
    id: u64,
    alive: Rc<Cell<bool>>,
    callback: Listener,
}

#[derive(Default)]
struct HubState {
    listeners: SmallVec<[ListenerEntry; 4]>,
    next_id: u64,
}

/// Host-side scroll stream with subscriber bookkeeping.
///
/// Dispatch is synchronous and single-threaded: `emit` invokes every live
/// listener before returning. Listeners may subscribe or drop subscriptions
/// reentrantly from inside a dispatch; a listener removed mid-dispatch is
/// not invoked for the remainder of that dispatch.
#[derive(Clone, Default)]
pub struct ScrollEvents {
    state: Rc<RefCell<HubState>>,
}

impl ScrollEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` and hands back its guard.
    ///
    /// Listeners subscribed during a dispatch first hear the following emit.
    pub fn subscribe(&self, listener: impl FnMut(&ScrollSample) + 'static) -> Subscription {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        let alive = Rc::new(Cell::new(true));
        state.listeners.push(ListenerEntry {
            id,
            alive: alive.clone(),
            callback: Rc::new(RefCell::new(listener)),
        });
        log::trace!("scroll listener {id} subscribed");
        Subscription {
            hub: Rc::downgrade(&self.state),
            id,
            alive,
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Delivers `sample` to every live listener in subscription order.
    pub fn emit(&self, sample: ScrollSample) {
        // Snapshot the registry so listeners can mutate it reentrantly.
        let snapshot: SmallVec<[(Rc<Cell<bool>>, Listener); 4]> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|entry| (entry.alive.clone(), entry.callback.clone()))
            .collect();
        for (alive, callback) in snapshot {
            if alive.get() {
                (callback.borrow_mut())(&sample);
            }
        }
    }
}

/// Guard for one scroll listener registration.
///
/// Dropping the guard deregisters the listener exactly once and stops
/// delivery immediately, even for a dispatch already in flight.
pub struct Subscription {
    hub: Weak<RefCell<HubState>>,
    id: u64,
    alive: Rc<Cell<bool>>,
}

impl Subscription {
    /// Listener id, stable for the registration's lifetime.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.alive.set(false);
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().listeners.retain(|entry| entry.id != self.id);
            log::trace!("scroll listener {} deregistered", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(offset: f32, millis: u64) -> ScrollSample {
        ScrollSample::new(offset, Duration::from_millis(millis))
    }

    #[test]
    fn delivers_samples_in_subscription_order() {
        let events = ScrollEvents::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = seen.clone();
        let _a = events.subscribe(move |s| first.borrow_mut().push(("a", s.offset_y)));
        let second = seen.clone();
        let _b = events.subscribe(move |s| second.borrow_mut().push(("b", s.offset_y)));

        events.emit(sample(42.0, 16));
        assert_eq!(*seen.borrow(), vec![("a", 42.0), ("b", 42.0)]);
    }

    #[test]
    fn dropping_the_guard_deregisters() {
        let events = ScrollEvents::new();
        let count = Rc::new(Cell::new(0));

        let hits = count.clone();
        let guard = events.subscribe(move |_| hits.set(hits.get() + 1));
        events.emit(sample(1.0, 1));
        assert_eq!(events.listener_count(), 1);

        drop(guard);
        assert_eq!(events.listener_count(), 0);
        events.emit(sample(2.0, 2));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn guard_dropped_mid_dispatch_suppresses_later_delivery() {
        let events = ScrollEvents::new();
        let late_hits = Rc::new(Cell::new(0));

        // First listener drops the second listener's guard during dispatch.
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let killer = slot.clone();
        let _a = events.subscribe(move |_| {
            killer.borrow_mut().take();
        });

        let hits = late_hits.clone();
        let b = events.subscribe(move |_| hits.set(hits.get() + 1));
        *slot.borrow_mut() = Some(b);

        events.emit(sample(0.0, 0));
        assert_eq!(late_hits.get(), 0, "listener ran after its teardown");
        assert_eq!(events.listener_count(), 1);
    }

    #[test]
    fn listener_may_drop_its_own_subscription() {
        let events = ScrollEvents::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let own = slot.clone();
        let guard = events.subscribe(move |_| {
            own.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(guard);

        events.emit(sample(0.0, 0));
        events.emit(sample(1.0, 1));
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn subscription_during_dispatch_starts_next_emit() {
        let events = ScrollEvents::new();
        let nested_hits = Rc::new(Cell::new(0));
        let guards: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let hub = events.clone();
        let sink = nested_hits.clone();
        let keep = guards.clone();
        let _a = events.subscribe(move |_| {
            if keep.borrow().is_empty() {
                let inner = sink.clone();
                let sub = hub.subscribe(move |_| inner.set(inner.get() + 1));
                keep.borrow_mut().push(sub);
            }
        });

        events.emit(sample(0.0, 0));
        assert_eq!(nested_hits.get(), 0, "snapshot must not include new listeners");
        events.emit(sample(1.0, 1));
        assert_eq!(nested_hits.get(), 1);
    }

    #[test]
    fn emit_without_listeners_is_a_no_op() {
        let events = ScrollEvents::new();
        events.emit(sample(10.0, 5));
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn outliving_the_hub_is_harmless() {
        let guard = {
            let events = ScrollEvents::new();
            events.subscribe(|_| {})
        };
        drop(guard);
    }
}
