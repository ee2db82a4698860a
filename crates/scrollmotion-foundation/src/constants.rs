//! Shared motion tuning constants.
//!
//! Values are in logical pixels and real time. They are deliberately plain
//! constants rather than configuration: every consumer of the crate should
//! get the same feel out of the box, and regions that need something else
//! pass explicit values at their own binding sites.

use std::time::Duration;

/// Default parallax strength factor.
///
/// Sits in the middle of the 0.15–0.5 band that reads as gentle depth:
/// below ~0.15 the drift is imperceptible, above ~0.5 the layer visibly
/// detaches from the page. 0.3 moves a layer 30px for every 100px of
/// approach.
pub const DEFAULT_PARALLAX_STRENGTH: f32 = 0.3;

/// Default per-child stagger interval for cascading groups.
///
/// 80ms keeps a three-card row readable as a sequence without making the
/// last card feel late.
pub const DEFAULT_STAGGER_INTERVAL: Duration = Duration::from_millis(80);

/// Velocity above which a sample pair is treated as suspicious, in logical
/// pixels per second.
///
/// Real input tops out well below this; readings past it almost always mean
/// the host delivered a stale or duplicated timestamp. The signal still
/// reports the value (it is finite and correct for the data it was given),
/// it just logs the pair for diagnosis.
pub const SUSPICIOUS_VELOCITY: f32 = 20_000.0;

/// Frame interval used by scripted drivers and simulations (~60fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
