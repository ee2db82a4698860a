//! Host capabilities and document geometry for Scrollmotion.
//!
//! This crate defines the boundary between a host environment and the
//! scroll-driven animation layer: document-space geometry ([`Rect`],
//! [`Viewport`]), the injected layout capability ([`GeometryReader`]), the
//! scroll event stream ([`ScrollEvents`]) with RAII teardown, and a
//! [`Clock`] for looping animations. Higher crates never touch a global;
//! they run against whatever host is plugged in here, real or fake.

pub mod events;
pub mod geometry;
pub mod host;

pub use events::{ScrollEvents, ScrollSample, Subscription};
pub use geometry::{Rect, Viewport};
pub use host::{Clock, ElementId, GeometryReader, SystemClock};
