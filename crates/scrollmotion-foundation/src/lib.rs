//! Stateful scroll measurement for Scrollmotion: velocity/direction
//! sampling, normalized progress, parallax bindings, and the page-wide
//! coordinator that fans one host subscription out to all of them.
//!
//! Everything here is single-threaded and synchronous. State objects are
//! cheap plain structs fed by the host's scroll samples; the coordinator
//! adds registry bookkeeping with RAII teardown so sections can mount and
//! unmount without leaking callbacks.

pub mod constants;
pub mod coordinator;
pub mod parallax;
pub mod progress;
pub mod signal;

pub use coordinator::{ParallaxHandle, ScrollCoordinator, WatchHandle};
pub use parallax::Parallax;
pub use progress::ScrollProgress;
pub use signal::{AttachedScrollSignal, ScrollDirection, ScrollSignal, ScrollState};
