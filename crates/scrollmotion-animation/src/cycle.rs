//! Looping timebases for idle and background animations.

use std::time::Duration;

use crate::easing::Easing;

/// Infinite loop over `period`, starting after `delay`.
///
/// A cycle is a pure function of a host timestamp: query it at any `now`
/// and it answers where in the loop that instant falls. Nothing ticks, so
/// the same cycle is deterministic under a fake clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycle {
    period: Duration,
    delay: Duration,
}

impl Cycle {
    /// A zero period is clamped to one millisecond; a loop with no length
    /// has no meaningful phase.
    pub fn new(period: Duration) -> Self {
        let period = if period.is_zero() {
            log::warn!("cycle period of zero clamped to 1ms");
            Duration::from_millis(1)
        } else {
            period
        };
        Self {
            period,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Phase in [0, 1) at `now`, or `None` before the delay has elapsed.
    pub fn phase_at(&self, now: Duration) -> Option<f32> {
        let active = now.checked_sub(self.delay)?;
        let turns = active.as_secs_f64() / self.period.as_secs_f64();
        Some(turns.fract() as f32)
    }

    /// Triangle wave through the loop, eased: rises 0 → 1 over the first
    /// half and falls back over the second. Pulse-style keyframes (grow and
    /// settle, glow and dim) are this shape.
    pub fn pulse_at(&self, now: Duration, easing: Easing) -> Option<f32> {
        let phase = self.phase_at(now)?;
        let triangle = 1.0 - (2.0 * phase - 1.0).abs();
        Some(easing.apply(triangle))
    }
}
