//! Static layout and motion wiring for the landing document.
//!
//! The page is a fixed-width column of four bands (hero, about, services,
//! footer) laid out once at construction. Geometry is interior-mutable so
//! the scripted driver can move the scroll position while the coordinator
//! holds a reader for the same document.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use scrollmotion_animation::{
    AnimationDirector, Cycle, Easing, TransitionFrame, TransitionPhase, TransitionSpec,
    VisibilityConfig,
};
use scrollmotion_core::{ElementId, GeometryReader, Rect, ScrollEvents, ScrollSample, Viewport};
use scrollmotion_foundation::constants::DEFAULT_STAGGER_INTERVAL;
use scrollmotion_foundation::{ParallaxHandle, ScrollCoordinator, ScrollState, WatchHandle};

use crate::content;
use crate::particles::{BackgroundFrame, CoalField, EmberField};

pub const PAGE_WIDTH: f32 = 1280.0;
pub const VIEWPORT_HEIGHT: f32 = 900.0;
pub const DOCUMENT_HEIGHT: f32 = 3600.0;

/// Entrance keyframes: 30px rise fading in over 0.8s.
const ENTRANCE_RISE: f32 = 30.0;
const ENTRANCE_DURATION: Duration = Duration::from_millis(800);

/// The hero title drifts softly; the drill panel leads the scroll.
const HERO_PARALLAX_STRENGTH: f32 = 0.15;
const DRILL_PARALLAX_STRENGTH: f32 = 0.3;

/// The drill icon bobs on a 2s loop, dipping 5px and tilting 2 degrees.
const DRILL_BOB_PERIOD: Duration = Duration::from_secs(2);
const DRILL_BOB_DIP: f32 = 5.0;
const DRILL_BOB_TILT: f32 = 2.0;

const PARTICLE_SEED: u64 = 0x414d_4552_5531;

/// Stable identities for every measured element on the page.
pub mod ids {
    use scrollmotion_core::ElementId;

    pub const HERO_TITLE: ElementId = ElementId(1);
    pub const HERO_CARDS: ElementId = ElementId(2);
    pub const ABOUT_HEADING: ElementId = ElementId(3);
    pub const VALUE_POINTS: ElementId = ElementId(4);
    pub const MINING_PANEL: ElementId = ElementId(5);
    pub const SERVICES_HEADING: ElementId = ElementId(6);
    pub const SERVICE_CARDS: ElementId = ElementId(7);
    pub const FOOTER_PANEL: ElementId = ElementId(8);
}

/// Where each element sits in the laid-out document, in absolute logical
/// pixels. Bands: hero 0..900, about 900..1860, services 1860..2760,
/// footer 2760..3600.
pub fn landing_rects() -> Vec<(ElementId, Rect)> {
    vec![
        (ids::HERO_TITLE, Rect::new(160.0, 180.0, 960.0, 260.0)),
        (ids::HERO_CARDS, Rect::new(160.0, 520.0, 960.0, 300.0)),
        (ids::ABOUT_HEADING, Rect::new(160.0, 980.0, 960.0, 90.0)),
        (ids::VALUE_POINTS, Rect::new(160.0, 1130.0, 460.0, 560.0)),
        (ids::MINING_PANEL, Rect::new(700.0, 1200.0, 420.0, 420.0)),
        (ids::SERVICES_HEADING, Rect::new(160.0, 1940.0, 960.0, 90.0)),
        (ids::SERVICE_CARDS, Rect::new(160.0, 2100.0, 960.0, 420.0)),
        (ids::FOOTER_PANEL, Rect::new(160.0, 2840.0, 960.0, 620.0)),
    ]
}

struct LayoutState {
    viewport: Viewport,
    rects: Vec<(ElementId, Rect)>,
}

/// Geometry reader over the static landing layout.
#[derive(Clone)]
pub struct PageGeometry {
    state: Rc<RefCell<LayoutState>>,
}

impl PageGeometry {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(LayoutState {
                viewport: Viewport::new(0.0, PAGE_WIDTH, VIEWPORT_HEIGHT, DOCUMENT_HEIGHT),
                rects: landing_rects(),
            })),
        }
    }

    pub fn set_scroll_y(&self, offset_y: f32) {
        self.state.borrow_mut().viewport.scroll_y = offset_y;
    }

    pub fn max_scroll(&self) -> f32 {
        self.state.borrow().viewport.scroll_range()
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryReader for PageGeometry {
    fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    fn element_rect(&self, element: ElementId) -> Option<Rect> {
        self.state
            .borrow()
            .rects
            .iter()
            .find(|(id, _)| *id == element)
            .map(|(_, rect)| *rect)
    }
}

/// One scroll-animated region: a visibility watch feeding a director.
pub struct SectionMotion {
    name: &'static str,
    director: Rc<RefCell<AnimationDirector>>,
    watch: WatchHandle,
    child_count: usize,
}

impl SectionMotion {
    fn watch(
        coordinator: &ScrollCoordinator,
        name: &'static str,
        element: ElementId,
        config: VisibilityConfig,
        spec: TransitionSpec,
        child_count: usize,
    ) -> Self {
        let director = Rc::new(RefCell::new(
            AnimationDirector::new(spec).with_trigger_once(config.trigger_once),
        ));
        let sink = Rc::clone(&director);
        let watch = coordinator.watch_with(element, config, move |visible| {
            let phase = sink.borrow_mut().on_visibility(visible);
            log::debug!("section {name}: {}", phase.as_str());
        });
        Self {
            name,
            director,
            watch,
            child_count,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn phase(&self) -> TransitionPhase {
        self.director.borrow().phase()
    }

    pub fn has_entered(&self) -> bool {
        self.director.borrow().has_entered()
    }

    pub fn is_visible(&self) -> bool {
        self.watch.is_visible()
    }

    pub fn has_animated_once(&self) -> bool {
        self.watch.has_animated_once()
    }

    /// Per-child frames for the current phase, stagger folded in.
    pub fn frames(&self) -> Vec<TransitionFrame> {
        let director = self.director.borrow();
        (0..self.child_count).map(|index| director.frame(index)).collect()
    }
}

fn cascade(spec: TransitionSpec) -> TransitionSpec {
    spec.with_stagger(DEFAULT_STAGGER_INTERVAL)
}

/// The assembled page: geometry, coordinator fan-out, section motions,
/// parallax bindings, and the background particle fields.
pub struct LandingPage {
    geometry: PageGeometry,
    events: ScrollEvents,
    coordinator: ScrollCoordinator,
    sections: Vec<SectionMotion>,
    hero_drift: ParallaxHandle,
    drill_drift: ParallaxHandle,
    drill_bob: Cycle,
    coal: CoalField,
    embers: EmberField,
}

impl LandingPage {
    pub fn new() -> Self {
        let geometry = PageGeometry::new();
        let events = ScrollEvents::new();
        let coordinator = ScrollCoordinator::new(Rc::new(geometry.clone()));
        coordinator.attach(&events);

        let hero_drift =
            coordinator.bind_parallax_with(ids::HERO_TITLE, HERO_PARALLAX_STRENGTH);
        let drill_drift =
            coordinator.bind_parallax_with(ids::MINING_PANEL, DRILL_PARALLAX_STRENGTH);

        let entrance = TransitionSpec::slide_in_up(ENTRANCE_RISE, ENTRANCE_DURATION);
        let sections = vec![
            // The hero plays once on first load and never replays.
            SectionMotion::watch(
                &coordinator,
                "hero-cards",
                ids::HERO_CARDS,
                VisibilityConfig::once(0.2),
                cascade(entrance.clone()),
                content::HERO_CARDS.len(),
            ),
            SectionMotion::watch(
                &coordinator,
                "about-heading",
                ids::ABOUT_HEADING,
                VisibilityConfig::new(0.2),
                entrance.clone(),
                1,
            ),
            SectionMotion::watch(
                &coordinator,
                "value-points",
                ids::VALUE_POINTS,
                VisibilityConfig::new(0.2),
                cascade(entrance.clone()),
                content::VALUE_POINTS.len(),
            ),
            SectionMotion::watch(
                &coordinator,
                "services-heading",
                ids::SERVICES_HEADING,
                VisibilityConfig::new(0.2),
                entrance.clone(),
                1,
            ),
            SectionMotion::watch(
                &coordinator,
                "service-cards",
                ids::SERVICE_CARDS,
                VisibilityConfig::new(0.2),
                cascade(entrance),
                content::SERVICE_CARDS.len(),
            ),
            // Contact column and quote form fade in together.
            SectionMotion::watch(
                &coordinator,
                "footer-panel",
                ids::FOOTER_PANEL,
                VisibilityConfig::new(0.2),
                TransitionSpec::fade(ENTRANCE_DURATION),
                2,
            ),
        ];

        Self {
            geometry,
            events,
            coordinator,
            sections,
            hero_drift,
            drill_drift,
            drill_bob: Cycle::new(DRILL_BOB_PERIOD),
            coal: CoalField::new(PARTICLE_SEED),
            embers: EmberField::new(PARTICLE_SEED.rotate_left(17)),
        }
    }

    /// Moves the document and emits the scroll sample, as a host would on
    /// one frame. Targets are clamped to the scrollable range.
    pub fn scroll_to(&self, offset_y: f32, at: Duration) {
        let clamped = offset_y.clamp(0.0, self.max_scroll());
        self.geometry.set_scroll_y(clamped);
        self.events.emit(ScrollSample::new(clamped, at));
    }

    pub fn max_scroll(&self) -> f32 {
        self.geometry.max_scroll()
    }

    pub fn viewport(&self) -> Viewport {
        self.coordinator.viewport()
    }

    pub fn progress(&self) -> f32 {
        self.coordinator.progress()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.coordinator.scroll_state()
    }

    pub fn sections(&self) -> &[SectionMotion] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&SectionMotion> {
        self.sections.iter().find(|section| section.name() == name)
    }

    /// Current hero title drift in pixels.
    pub fn hero_drift(&self) -> f32 {
        self.hero_drift.offset().unwrap_or(0.0)
    }

    /// Current mining panel drift in pixels.
    pub fn drill_drift(&self) -> f32 {
        self.drill_drift.offset().unwrap_or(0.0)
    }

    /// Idle bob for the drill icon at `now`: vertical dip in pixels and
    /// tilt in degrees.
    pub fn drill_bob_at(&self, now: Duration) -> (f32, f32) {
        let pulse = self
            .drill_bob
            .pulse_at(now, Easing::EaseInOut)
            .unwrap_or(0.0);
        (-DRILL_BOB_DIP * pulse, DRILL_BOB_TILT * pulse)
    }

    /// Background overlay sampled at `now`.
    pub fn background_at(&self, now: Duration) -> BackgroundFrame {
        BackgroundFrame {
            coal: self.coal.sample(now),
            embers: self.embers.sample(now),
        }
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_stays_inside_the_document() {
        let rects = landing_rects();
        assert_eq!(rects.len(), 8);
        for (id, rect) in &rects {
            assert!(rect.top >= 0.0, "{id:?} above the document");
            assert!(rect.bottom() <= DOCUMENT_HEIGHT, "{id:?} below the document");
            assert!(rect.right() <= PAGE_WIDTH, "{id:?} past the right edge");
        }
        let mut ids: Vec<_> = rects.iter().map(|(id, _)| *id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), rects.len(), "duplicate element ids in the layout");
    }

    #[test]
    fn page_mounts_with_hero_visible_and_everything_registered() {
        let page = LandingPage::new();
        assert_eq!(page.sections().len(), 6);
        assert_eq!(page.max_scroll(), DOCUMENT_HEIGHT - VIEWPORT_HEIGHT);

        let hero = page.section("hero-cards").unwrap();
        assert!(hero.is_visible(), "hero cards sit above the fold");
        assert_eq!(hero.phase(), TransitionPhase::Animate);
        assert!(hero.has_animated_once());

        let footer = page.section("footer-panel").unwrap();
        assert!(!footer.is_visible());
        assert_eq!(footer.phase(), TransitionPhase::Initial);
    }

    #[test]
    fn scroll_targets_are_clamped_to_the_range() {
        let page = LandingPage::new();
        page.scroll_to(99_999.0, Duration::ZERO);
        assert_eq!(page.viewport().scroll_y, page.max_scroll());
        assert_eq!(page.progress(), 1.0);

        page.scroll_to(-50.0, Duration::from_millis(16));
        assert_eq!(page.viewport().scroll_y, 0.0);
        assert_eq!(page.progress(), 0.0);
    }

    #[test]
    fn hero_cascade_staggers_its_three_cards() {
        let page = LandingPage::new();
        let frames = page.section("hero-cards").unwrap().frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].timing.delay, Duration::ZERO);
        assert_eq!(frames[1].timing.delay, DEFAULT_STAGGER_INTERVAL);
        assert_eq!(frames[2].timing.delay, 2 * DEFAULT_STAGGER_INTERVAL);
    }

    #[test]
    fn drill_bob_peaks_at_the_half_period() {
        let page = LandingPage::new();
        assert_eq!(page.drill_bob_at(Duration::ZERO), (0.0, 0.0));
        let (dip, tilt) = page.drill_bob_at(Duration::from_secs(1));
        assert_eq!(dip, -DRILL_BOB_DIP);
        assert_eq!(tilt, DRILL_BOB_TILT);
    }

    #[test]
    fn drill_panel_leads_the_scroll() {
        let page = LandingPage::new();
        // Mining panel top is 1200; the viewport bottom starts at 900.
        assert_eq!(page.drill_drift(), (900.0 - 1200.0) * 0.3);

        page.scroll_to(1350.0, Duration::ZERO);
        assert_eq!(page.drill_drift(), 315.0);
        assert_eq!(page.progress(), 0.5);
    }
}
