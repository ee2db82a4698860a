//! Testing utilities and harness for Scrollmotion.
//!
//! Everything the animation layer needs from a host is injected, so tests
//! swap the real host for [`FakeHost`] and drive it by hand: script the
//! layout, advance [`TestClock`], scroll, assert. [`ScrollRig`] bundles the
//! common wiring (fake host + attached coordinator + frame-paced scrolling)
//! for end-to-end scenarios.

pub mod fake_host;
pub mod rig;

pub use fake_host::{FakeHost, TestClock};
pub use rig::ScrollRig;

pub mod prelude {
    pub use crate::fake_host::{FakeHost, TestClock};
    pub use crate::rig::ScrollRig;
}
