//! The Ameru coal-trading landing page, assembled on the Scrollmotion
//! crates.
//!
//! `content` holds the copy, `page` lays the document out and wires every
//! section's motion, `particles` renders the coal-and-ember backdrop, and
//! `runner` plays a scripted visitor journey through the whole thing.

pub mod content;
pub mod page;
pub mod particles;
pub mod runner;
