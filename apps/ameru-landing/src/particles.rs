//! Background particle fields: falling coal dust and glowing embers.
//!
//! Both fields overlay the viewport and ignore scroll position entirely.
//! Placement comes from a seeded hash instead of a live RNG and each field
//! is a pure function of the host timestamp, so a frame can be re-sampled
//! at any instant and a demo replays identically.

use std::time::Duration;

use scrollmotion_animation::{Cycle, Easing};

/// Coal specks drifting up behind the page.
pub const COAL_COUNT: usize = 20;
/// Embers pulsing in place.
pub const EMBER_COUNT: usize = 10;

const COAL_MAX_DELAY: Duration = Duration::from_secs(5);
const COAL_MIN_PERIOD: Duration = Duration::from_secs(8);
const COAL_PERIOD_SPREAD: Duration = Duration::from_secs(4);

const EMBER_MAX_DELAY: Duration = Duration::from_secs(3);
const EMBER_MIN_PERIOD: Duration = Duration::from_secs(2);
const EMBER_PERIOD_SPREAD: Duration = Duration::from_secs(3);

/// A speck is fully transparent at launch and landing, peaking mid-flight.
const COAL_PEAK_OPACITY: f32 = 0.6;
/// Ember opacity breathes between these two.
const EMBER_MIN_OPACITY: f32 = 0.2;
const EMBER_MAX_OPACITY: f32 = 0.6;
/// Ember scale peaks at 1.2x natural size.
const EMBER_SCALE_GAIN: f32 = 0.2;

/// splitmix64 finalizer; the top 24 bits give a uniform float in [0, 1).
fn hash01(seed: u64, lane: u64) -> f32 {
    let mut z = seed.wrapping_add(lane.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^= z >> 31;
    (z >> 40) as f32 / (1u64 << 24) as f32
}

fn scatter(base: Duration, range: Duration, unit: f32) -> Duration {
    base + Duration::from_secs_f32(range.as_secs_f32() * unit)
}

struct CoalParticle {
    column_pct: f32,
    cycle: Cycle,
}

impl CoalParticle {
    fn sample(&self, now: Duration) -> Option<CoalFrame> {
        let phase = self.cycle.phase_at(now)?;
        let fade = 1.0 - (2.0 * phase - 1.0).abs();
        Some(CoalFrame {
            column_pct: self.column_pct,
            rise_pct: phase * 100.0,
            rotation_deg: phase * 360.0,
            opacity: COAL_PEAK_OPACITY * fade,
        })
    }
}

/// One coal speck at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoalFrame {
    /// Horizontal position as a percentage of page width.
    pub column_pct: f32,
    /// How far the flight has come: 0 at the bottom edge, 100 a full
    /// viewport above it.
    pub rise_pct: f32,
    /// Accumulated spin, one full turn per loop.
    pub rotation_deg: f32,
    pub opacity: f32,
}

/// The falling-coal field.
pub struct CoalField {
    particles: Vec<CoalParticle>,
}

impl CoalField {
    pub fn new(seed: u64) -> Self {
        let particles = (0..COAL_COUNT as u64)
            .map(|lane| CoalParticle {
                column_pct: hash01(seed, 3 * lane) * 100.0,
                cycle: Cycle::new(scatter(
                    COAL_MIN_PERIOD,
                    COAL_PERIOD_SPREAD,
                    hash01(seed, 3 * lane + 1),
                ))
                .with_delay(scatter(Duration::ZERO, COAL_MAX_DELAY, hash01(seed, 3 * lane + 2))),
            })
            .collect();
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Frames for every speck already launched at `now`.
    pub fn sample(&self, now: Duration) -> Vec<CoalFrame> {
        self.particles
            .iter()
            .filter_map(|particle| particle.sample(now))
            .collect()
    }
}

struct Ember {
    x_pct: f32,
    y_pct: f32,
    cycle: Cycle,
}

impl Ember {
    fn sample(&self, now: Duration) -> Option<EmberFrame> {
        let pulse = self.cycle.pulse_at(now, Easing::EaseInOut)?;
        Some(EmberFrame {
            x_pct: self.x_pct,
            y_pct: self.y_pct,
            scale: 1.0 + EMBER_SCALE_GAIN * pulse,
            opacity: EMBER_MIN_OPACITY + (EMBER_MAX_OPACITY - EMBER_MIN_OPACITY) * pulse,
        })
    }
}

/// One ember at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmberFrame {
    pub x_pct: f32,
    pub y_pct: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// The pulsing-ember field.
pub struct EmberField {
    embers: Vec<Ember>,
}

impl EmberField {
    pub fn new(seed: u64) -> Self {
        let embers = (0..EMBER_COUNT as u64)
            .map(|lane| Ember {
                x_pct: hash01(seed, 4 * lane) * 100.0,
                y_pct: hash01(seed, 4 * lane + 1) * 100.0,
                cycle: Cycle::new(scatter(
                    EMBER_MIN_PERIOD,
                    EMBER_PERIOD_SPREAD,
                    hash01(seed, 4 * lane + 2),
                ))
                .with_delay(scatter(Duration::ZERO, EMBER_MAX_DELAY, hash01(seed, 4 * lane + 3))),
            })
            .collect();
        Self { embers }
    }

    pub fn len(&self) -> usize {
        self.embers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embers.is_empty()
    }

    /// Frames for every ember already lit at `now`.
    pub fn sample(&self, now: Duration) -> Vec<EmberFrame> {
        self.embers.iter().filter_map(|ember| ember.sample(now)).collect()
    }
}

/// Both fields sampled at one instant.
#[derive(Debug, Clone)]
pub struct BackgroundFrame {
    pub coal: Vec<CoalFrame>,
    pub embers: Vec<EmberFrame>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_hash_is_stable_and_in_range() {
        assert_eq!(hash01(1, 2), hash01(1, 2));
        assert_ne!(hash01(1, 2), hash01(1, 3));
        for lane in 0..1000 {
            let value = hash01(42, lane);
            assert!((0.0..1.0).contains(&value), "hash01(42, {lane}) = {value}");
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_field() {
        let now = Duration::from_millis(12_345);
        assert_eq!(CoalField::new(7).sample(now), CoalField::new(7).sample(now));
        assert_eq!(EmberField::new(7).sample(now), EmberField::new(7).sample(now));
    }

    #[test]
    fn every_speck_is_airborne_after_the_launch_window() {
        let field = CoalField::new(3);
        // Delays scatter within [0, 5s), so by 6s the whole field flies.
        let frames = field.sample(Duration::from_secs(6));
        assert_eq!(frames.len(), COAL_COUNT);
        for frame in frames {
            assert!((0.0..100.0).contains(&frame.column_pct));
            assert!((0.0..100.0).contains(&frame.rise_pct));
            assert!((0.0..360.0).contains(&frame.rotation_deg));
        }
    }

    #[test]
    fn coal_fades_in_and_back_out() {
        let field = CoalField::new(11);
        let mut peak: f32 = 0.0;
        for step in 0..2000u64 {
            let now = Duration::from_millis(step * 10);
            for frame in field.sample(now) {
                assert!(
                    (0.0..=COAL_PEAK_OPACITY + 1e-4).contains(&frame.opacity),
                    "opacity {} outside the fade envelope",
                    frame.opacity
                );
                peak = peak.max(frame.opacity);
            }
        }
        assert!(peak > 0.55, "no speck approached its mid-flight peak ({peak})");
    }

    #[test]
    fn embers_breathe_between_their_bounds() {
        let field = EmberField::new(5);
        for step in 0..500u64 {
            let now = Duration::from_millis(step * 20);
            for frame in field.sample(now) {
                assert!((EMBER_MIN_OPACITY..=EMBER_MAX_OPACITY).contains(&frame.opacity));
                assert!((1.0..=1.0 + EMBER_SCALE_GAIN).contains(&frame.scale));
            }
        }
    }
}
