//! Scripted visitor journey through the landing page.
//!
//! Plays the scroll a visitor would perform: load at the top, read the
//! hero, glide down through about and services to the quote form, then
//! return to the top. Frames are paced at [`FRAME_INTERVAL`] so velocities
//! come out the way a 60fps host would report them, and the whole run is
//! deterministic: same script, same reports, every time.

use std::time::Duration;

use anyhow::{ensure, Context, Result};

use scrollmotion_animation::TransitionPhase;
use scrollmotion_foundation::constants::FRAME_INTERVAL;

use crate::page::LandingPage;

/// Frames spent gliding between stops (~1s at 60fps).
const GLIDE_FRAMES: usize = 60;
/// Frames spent reading at each stop before moving on.
const DWELL_FRAMES: usize = 30;

/// The journey's stops as document offsets. The footer stop overshoots on
/// purpose; the page clamps it to the scrollable range.
const STOPS: [(&str, f32); 4] = [
    ("about", 1000.0),
    ("services", 1900.0),
    ("footer", 3000.0),
    ("back-to-top", 0.0),
];

/// Snapshot of the page at one stop.
#[derive(Debug, Clone)]
pub struct StopReport {
    pub label: &'static str,
    pub offset: f32,
    pub progress: f32,
    /// Velocity over the stop's final glide frame, in px/s.
    pub velocity: f32,
    pub hero_drift: f32,
    pub drill_drift: f32,
    /// Sections currently resolved to the animate phase.
    pub animating: Vec<&'static str>,
    pub coal_airborne: usize,
    pub embers_lit: usize,
}

/// Drives a [`LandingPage`] along the scripted journey.
pub struct Walkthrough {
    page: LandingPage,
    now: Duration,
}

impl Walkthrough {
    pub fn new() -> Self {
        Self {
            page: LandingPage::new(),
            now: Duration::ZERO,
        }
    }

    pub fn page(&self) -> &LandingPage {
        &self.page
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Glides from the current offset to `target` over `frames` evenly
    /// spaced frames, one scroll sample per frame.
    pub fn glide_to(&mut self, target: f32, frames: usize) {
        let start = self.page.viewport().scroll_y;
        for frame in 1..=frames {
            self.now += FRAME_INTERVAL;
            let t = frame as f32 / frames as f32;
            self.page.scroll_to(start + (target - start) * t, self.now);
        }
    }

    /// Holds the current offset for `frames` frames. Time keeps moving, so
    /// the background fields keep playing while the scroll is still.
    pub fn dwell(&mut self, frames: usize) {
        let offset = self.page.viewport().scroll_y;
        for _ in 0..frames {
            self.now += FRAME_INTERVAL;
            self.page.scroll_to(offset, self.now);
        }
    }

    fn report(&self, label: &'static str) -> StopReport {
        let background = self.page.background_at(self.now);
        StopReport {
            label,
            offset: self.page.viewport().scroll_y,
            progress: self.page.progress(),
            velocity: self.page.scroll_state().velocity,
            hero_drift: self.page.hero_drift(),
            drill_drift: self.page.drill_drift(),
            animating: self
                .page
                .sections()
                .iter()
                .filter(|section| section.phase() == TransitionPhase::Animate)
                .map(|section| section.name())
                .collect(),
            coal_airborne: background.coal.len(),
            embers_lit: background.embers.len(),
        }
    }

    /// Plays the whole journey and returns one report per stop, the load
    /// snapshot first. Reports are taken at the end of each glide, before
    /// the dwell settles velocity back to zero.
    pub fn play(&mut self) -> Vec<StopReport> {
        let mut reports = vec![self.report("load")];
        for (label, target) in STOPS {
            self.glide_to(target, GLIDE_FRAMES);
            reports.push(self.report(label));
            self.dwell(DWELL_FRAMES);
        }
        reports
    }
}

impl Default for Walkthrough {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the journey and prints a per-stop readout.
pub fn run() -> Result<()> {
    let mut walkthrough = Walkthrough::new();
    {
        let hero = walkthrough
            .page()
            .section("hero-cards")
            .context("hero section is not registered")?;
        ensure!(hero.is_visible(), "hero cards must sit above the fold");
    }

    println!("=== Ameru landing walkthrough ===");
    for report in walkthrough.play() {
        println!(
            "{:>12}  offset {:6.0}px  progress {:.2}  velocity {:5.0}px/s  \
             hero drift {:6.1}px  drill drift {:7.1}px  coal {:2}  embers {:2}",
            report.label,
            report.offset,
            report.progress,
            report.velocity,
            report.hero_drift,
            report.drill_drift,
            report.coal_airborne,
            report.embers_lit,
        );
        if !report.animating.is_empty() {
            println!("{:>12}  animating: {}", "", report.animating.join(", "));
        }
    }

    let page = walkthrough.page();
    ensure!(page.progress() == 0.0, "the journey ends back at the top");
    for section in page.sections() {
        ensure!(
            section.has_animated_once(),
            "section {} never entered view",
            section.name()
        );
    }
    println!("=== every section entered view at least once ===");
    Ok(())
}
