//! Area-threshold visibility with a one-way entrance latch.

use scrollmotion_core::{ElementId, GeometryReader};

/// Smallest accepted visibility threshold. Thresholds are fractions of the
/// element's area, so zero would mark everything visible forever.
pub const MIN_THRESHOLD: f32 = 0.01;

/// Default fraction of an element that must be on screen before it counts
/// as visible. Low enough that a section starts entering as it peeks over
/// the fold, high enough to ignore one-pixel slivers.
pub const DEFAULT_THRESHOLD: f32 = 0.2;

/// Configuration for one watched element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityConfig {
    /// Fraction of the element's area required in-view, in (0, 1].
    pub threshold: f32,
    /// Replay policy recorded for the caller: when true, only the first
    /// entrance is meaningful and later exits are cosmetic.
    pub trigger_once: bool,
}

impl VisibilityConfig {
    /// Out-of-range thresholds are clamped into [`MIN_THRESHOLD`, 1.0].
    pub fn new(threshold: f32) -> Self {
        let clamped = threshold.clamp(MIN_THRESHOLD, 1.0);
        if clamped != threshold {
            log::warn!("visibility threshold {threshold} out of (0, 1], clamped to {clamped}");
        }
        Self {
            threshold: clamped,
            trigger_once: false,
        }
    }

    /// Same threshold handling, with `trigger_once` set.
    pub fn once(threshold: f32) -> Self {
        let mut config = Self::new(threshold);
        config.trigger_once = true;
        config
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Tracks whether one element currently covers enough of the viewport.
///
/// `is_visible` toggles freely as the element crosses its threshold.
/// `has_animated_once` is a one-way latch: set the first time the element
/// becomes visible and never unset, whatever intersection sequence follows.
#[derive(Debug, Clone)]
pub struct VisibilityTrigger {
    element: ElementId,
    config: VisibilityConfig,
    is_visible: bool,
    has_animated_once: bool,
}

impl VisibilityTrigger {
    pub fn new(element: ElementId, config: VisibilityConfig) -> Self {
        Self {
            element,
            config,
            is_visible: false,
            has_animated_once: false,
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn config(&self) -> VisibilityConfig {
        self.config
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn has_animated_once(&self) -> bool {
        self.has_animated_once
    }

    /// Re-evaluates against current geometry.
    ///
    /// Returns `Some(now_visible)` when the visible flag toggled, `None`
    /// when it is unchanged or the element is unmeasurable this tick
    /// (unmeasurable keeps the last state rather than failing).
    pub fn evaluate(&mut self, geometry: &dyn GeometryReader) -> Option<bool> {
        let rect = geometry.element_rect(self.element)?;
        let viewport = geometry.viewport().visible_rect();
        self.update_fraction(rect.fraction_inside(&viewport))
    }

    /// Feeds an externally computed area fraction. Hosts that already run
    /// their own intersection reporting call this instead of `evaluate`.
    pub fn update_fraction(&mut self, fraction: f32) -> Option<bool> {
        let visible = fraction >= self.config.threshold;
        if visible {
            self.has_animated_once = true;
        }
        let toggled = visible != self.is_visible;
        self.is_visible = visible;
        toggled.then_some(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollmotion_core::{Rect, Viewport};

    struct FixedGeometry {
        viewport: Viewport,
        rect: Option<Rect>,
    }

    impl GeometryReader for FixedGeometry {
        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn element_rect(&self, _element: ElementId) -> Option<Rect> {
            self.rect
        }
    }

    fn trigger(threshold: f32) -> VisibilityTrigger {
        VisibilityTrigger::new(ElementId(1), VisibilityConfig::new(threshold))
    }

    #[test]
    fn becomes_visible_at_the_area_threshold() {
        let mut t = trigger(0.5);
        assert_eq!(t.update_fraction(0.49), None);
        assert!(!t.is_visible());
        assert_eq!(t.update_fraction(0.5), Some(true));
        assert!(t.is_visible());
    }

    #[test]
    fn latch_survives_any_intersection_sequence() {
        let mut t = trigger(0.2);
        t.update_fraction(0.9);
        assert!(t.has_animated_once());
        t.update_fraction(0.0);
        assert!(!t.is_visible());
        assert!(t.has_animated_once());
        t.update_fraction(0.9);
        t.update_fraction(0.0);
        assert!(t.has_animated_once());
    }

    #[test]
    fn toggle_is_reported_only_on_change() {
        let mut t = trigger(0.2);
        assert_eq!(t.update_fraction(0.8), Some(true));
        assert_eq!(t.update_fraction(0.9), None);
        assert_eq!(t.update_fraction(0.1), Some(false));
        assert_eq!(t.update_fraction(0.05), None);
    }

    #[test]
    fn unmeasurable_element_keeps_last_state() {
        let mut t = trigger(0.2);
        let mut geometry = FixedGeometry {
            viewport: Viewport::new(0.0, 1000.0, 1000.0, 3000.0),
            rect: Some(Rect::new(0.0, 100.0, 500.0, 400.0)),
        };
        assert_eq!(t.evaluate(&geometry), Some(true));

        geometry.rect = None;
        assert_eq!(t.evaluate(&geometry), None);
        assert!(t.is_visible(), "skip must not flip state");
    }

    #[test]
    fn evaluate_uses_area_fraction_not_boundary_contact() {
        // Only 10% of the element is on screen: below a 0.3 threshold even
        // though the boundary clearly intersects the viewport.
        let mut t = trigger(0.3);
        let geometry = FixedGeometry {
            viewport: Viewport::new(0.0, 1000.0, 1000.0, 3000.0),
            rect: Some(Rect::new(0.0, 960.0, 1000.0, 400.0)),
        };
        assert_eq!(t.evaluate(&geometry), None);
        assert!(!t.is_visible());
    }

    #[test]
    fn out_of_range_thresholds_are_clamped() {
        assert_eq!(VisibilityConfig::new(0.0).threshold, MIN_THRESHOLD);
        assert_eq!(VisibilityConfig::new(-2.0).threshold, MIN_THRESHOLD);
        assert_eq!(VisibilityConfig::new(1.7).threshold, 1.0);
        assert!(VisibilityConfig::once(0.4).trigger_once);
    }

    #[test]
    fn full_containment_satisfies_a_threshold_of_one() {
        let mut t = trigger(1.0);
        let geometry = FixedGeometry {
            viewport: Viewport::new(0.0, 1000.0, 1000.0, 3000.0),
            rect: Some(Rect::new(100.0, 100.0, 300.0, 200.0)),
        };
        assert_eq!(t.evaluate(&geometry), Some(true));
    }
}
