//! End-to-end scroll scenarios: the reference fixtures on a bare rig, then
//! the assembled landing page driven through the scripted journey.

use std::time::Duration;

use ameru_landing::page::{LandingPage, DOCUMENT_HEIGHT, VIEWPORT_HEIGHT};
use ameru_landing::runner::Walkthrough;
use scrollmotion_animation::{TransitionPhase, VisibilityConfig};
use scrollmotion_core::{ElementId, Rect};
use scrollmotion_testing::ScrollRig;

#[test]
fn progress_reaches_half_on_a_3000px_page() {
    // 3000px document, 1000px viewport: offset 1000 of a 2000px range.
    let rig = ScrollRig::new(1280.0, 1000.0, 3000.0);
    rig.scroll_to(1000.0, 10);
    assert_eq!(rig.coordinator().progress(), 0.5);
}

#[test]
fn parallax_reads_150px_on_the_reference_fixture() {
    // Element top 2000, strength 0.3, offset 1500, viewport 1000: the
    // viewport bottom sits at 2500, the raw delta is 500, the drift 150.
    let rig = ScrollRig::new(1280.0, 1000.0, 3000.0);
    rig.place_element(ElementId(1), Rect::new(0.0, 2000.0, 1280.0, 600.0));
    let binding = rig.coordinator().bind_parallax_with(ElementId(1), 0.3);

    rig.scroll_to(1500.0, 20);
    assert_eq!(binding.offset(), Some(150.0));
}

#[test]
fn trigger_once_latch_survives_leaving_view() {
    let rig = ScrollRig::new(1280.0, 1000.0, 3000.0);
    rig.place_element(ElementId(1), Rect::new(0.0, 1800.0, 1280.0, 400.0));
    let watch = rig
        .coordinator()
        .watch(ElementId(1), VisibilityConfig::once(0.2));

    rig.scroll_to(1600.0, 20);
    assert!(watch.is_visible());
    assert!(watch.has_animated_once());

    rig.scroll_to(0.0, 20);
    assert!(!watch.is_visible());
    assert!(watch.has_animated_once());

    rig.scroll_to(1600.0, 20);
    assert!(watch.is_visible());
    assert!(watch.has_animated_once());
}

#[test]
fn duplicate_scroll_events_leave_velocity_unchanged() {
    let page = LandingPage::new();
    page.scroll_to(0.0, Duration::ZERO);
    page.scroll_to(500.0, Duration::from_millis(100));
    assert_eq!(page.scroll_state().velocity, 5000.0);

    // Same offset, same timestamp: the kind of event layout thrash re-fires.
    page.scroll_to(500.0, Duration::from_millis(100));
    assert_eq!(page.scroll_state().velocity, 5000.0);
}

#[test]
fn mining_panel_drift_matches_the_page_geometry() {
    // Panel top 1200, strength 0.3. At offset 1350 the viewport bottom sits
    // at 1350 + 900 = 2250, so the drift is (2250 - 1200) * 0.3 = 315.
    let page = LandingPage::new();
    page.scroll_to(1350.0, Duration::ZERO);
    assert_eq!(page.drill_drift(), 315.0);
    assert_eq!(
        page.progress(),
        1350.0 / (DOCUMENT_HEIGHT - VIEWPORT_HEIGHT)
    );
}

#[test]
fn journey_latches_every_section_and_exits_the_off_screen_ones() {
    let mut walkthrough = Walkthrough::new();
    walkthrough.play();

    let page = walkthrough.page();
    for section in page.sections() {
        assert!(section.has_animated_once(), "{} never entered", section.name());
    }

    // Back at the top: hero content is in view again, the deeper sections
    // have played their exits.
    assert!(page.section("hero-cards").unwrap().is_visible());
    assert_eq!(
        page.section("hero-cards").unwrap().phase(),
        TransitionPhase::Animate
    );
    assert_eq!(
        page.section("value-points").unwrap().phase(),
        TransitionPhase::Exit
    );
    assert_eq!(
        page.section("footer-panel").unwrap().phase(),
        TransitionPhase::Exit
    );
}

#[test]
fn hero_latch_holds_for_the_whole_journey() {
    let mut walkthrough = Walkthrough::new();
    // The hero is trigger-once and visible on load.
    assert!(walkthrough.page().section("hero-cards").unwrap().has_animated_once());

    walkthrough.play();
    let hero = walkthrough.page().section("hero-cards").unwrap();
    assert!(hero.has_animated_once());
    assert!(hero.has_entered());
}

#[test]
fn hero_title_drifts_gently_from_the_first_frame() {
    let page = LandingPage::new();
    assert_eq!(page.viewport().document_height, DOCUMENT_HEIGHT);

    // Hero title top is 180 and its strength 0.15: at offset 0 the viewport
    // bottom sits at 900, so the drift is (900 - 180) * 0.15 = 108.
    assert_eq!(page.hero_drift(), 108.0);

    // Scrolling moves the drift linearly with the offset.
    page.scroll_to(400.0, Duration::ZERO);
    assert_eq!(page.hero_drift(), (400.0 + 900.0 - 180.0) * 0.15);
}
