//! Scroll velocity and direction sampling.

use std::cell::RefCell;
use std::rc::Rc;

use scrollmotion_core::{ScrollEvents, ScrollSample, Subscription};

use crate::constants::SUSPICIOUS_VELOCITY;

/// Direction of travel derived from the offset delta.
///
/// Defaults to `Down` — the direction reported before any movement and for
/// zero-delta samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    Up,
    #[default]
    Down,
}

impl ScrollDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollDirection::Up => "up",
            ScrollDirection::Down => "down",
        }
    }
}

/// Velocity/direction pair derived from the two most recent samples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Absolute speed in pixels per second. Never negative, never infinite.
    pub velocity: f32,
    pub direction: ScrollDirection,
}

/// Folds scroll samples into a velocity/direction reading.
///
/// Only the previous and current sample matter. A sample whose elapsed time
/// against the previous one is not strictly positive (duplicate or
/// out-of-order event) is ignored outright: state and baseline stay as they
/// were, so velocity can never divide by zero or go infinite.
#[derive(Debug, Clone, Default)]
pub struct ScrollSignal {
    previous: Option<ScrollSample>,
    state: ScrollState,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn velocity(&self) -> f32 {
        self.state.velocity
    }

    pub fn direction(&self) -> ScrollDirection {
        self.state.direction
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Folds one sample into the signal.
    ///
    /// The first sample only establishes the baseline; the default state
    /// (zero velocity, `Down`) stands until a second sample arrives.
    pub fn on_sample(&mut self, sample: ScrollSample) {
        let Some(previous) = self.previous else {
            self.previous = Some(sample);
            return;
        };
        let Some(elapsed) = sample.timestamp.checked_sub(previous.timestamp) else {
            return;
        };
        if elapsed.is_zero() {
            return;
        }

        let delta = sample.offset_y - previous.offset_y;
        let velocity = delta.abs() / elapsed.as_secs_f32();
        if velocity > SUSPICIOUS_VELOCITY {
            log::debug!(
                "implausible scroll velocity {velocity:.0}px/s over {}µs",
                elapsed.as_micros()
            );
        }
        self.state = ScrollState {
            velocity,
            direction: if delta < 0.0 {
                ScrollDirection::Up
            } else {
                ScrollDirection::Down
            },
        };
        self.previous = Some(sample);
    }

    /// Subscribes a fresh signal to `events`.
    ///
    /// Exactly one listener is registered for the handle's lifetime and
    /// deregistered when the handle drops.
    pub fn attach(events: &ScrollEvents) -> AttachedScrollSignal {
        let signal = Rc::new(RefCell::new(ScrollSignal::new()));
        let sink = signal.clone();
        let subscription = events.subscribe(move |sample| sink.borrow_mut().on_sample(*sample));
        AttachedScrollSignal {
            signal,
            _subscription: subscription,
        }
    }
}

/// A [`ScrollSignal`] wired to a host scroll stream.
///
/// Reads go through the handle; dropping it tears the listener down.
pub struct AttachedScrollSignal {
    signal: Rc<RefCell<ScrollSignal>>,
    _subscription: Subscription,
}

impl AttachedScrollSignal {
    pub fn velocity(&self) -> f32 {
        self.signal.borrow().velocity()
    }

    pub fn direction(&self) -> ScrollDirection {
        self.signal.borrow().direction()
    }

    pub fn state(&self) -> ScrollState {
        self.signal.borrow().state()
    }
}
