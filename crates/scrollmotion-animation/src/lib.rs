//! Declarative scroll-linked animation for Scrollmotion: easing curves,
//! transition descriptions as data, area-threshold visibility triggering,
//! and the phase director that ties them together.
//!
//! Nothing in this crate interpolates pixels or runs timers. Regions
//! describe their named states ({initial, animate, exit}) once; visibility
//! reports resolve to a phase; the visual layer receives plain data
//! (property sets, durations, delays, curves) and does the drawing.

pub mod cycle;
pub mod director;
pub mod easing;
pub mod transition;
pub mod visibility;

pub use cycle::Cycle;
pub use director::{stagger_delay, AnimationDirector, TransitionFrame};
pub use easing::Easing;
pub use transition::{
    PropertySet, TransitionPhase, TransitionSpec, TransitionTiming, VisualProperty,
};
pub use visibility::{VisibilityConfig, VisibilityTrigger, DEFAULT_THRESHOLD, MIN_THRESHOLD};
