//! Normalized page scroll progress.

use scrollmotion_core::Viewport;

/// Fraction of the scrollable range traversed, always in [0, 1].
///
/// The range (document height minus viewport height) is recomputed from the
/// snapshot on every update — never cached — so a document that grows or
/// shrinks between ticks is reflected immediately instead of serving a stale
/// denominator. A page that does not scroll reports 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollProgress {
    value: f32,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Recomputes from the current snapshot and returns the new value.
    pub fn update(&mut self, viewport: &Viewport) -> f32 {
        self.value = Self::compute(viewport);
        self.value
    }

    /// `clamp(scroll_y / (document_height − viewport_height), 0, 1)`,
    /// or 0 when the range is not positive.
    pub fn compute(viewport: &Viewport) -> f32 {
        let range = viewport.scroll_range();
        if range <= 0.0 {
            return 0.0;
        }
        (viewport.scroll_y / range).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_y: f32, height: f32, document_height: f32) -> Viewport {
        Viewport::new(scroll_y, 1280.0, height, document_height)
    }

    #[test]
    fn halfway_through_a_page() {
        // 3000px document, 1000px viewport: offset 1000 of a 2000px range.
        let value = ScrollProgress::compute(&viewport(1000.0, 1000.0, 3000.0));
        assert_eq!(value, 0.5);
    }

    #[test]
    fn clamped_to_unit_interval() {
        assert_eq!(ScrollProgress::compute(&viewport(-50.0, 1000.0, 3000.0)), 0.0);
        assert_eq!(
            ScrollProgress::compute(&viewport(99_999.0, 1000.0, 3000.0)),
            1.0
        );
    }

    #[test]
    fn short_documents_report_zero() {
        assert_eq!(ScrollProgress::compute(&viewport(100.0, 1000.0, 800.0)), 0.0);
        assert_eq!(ScrollProgress::compute(&viewport(0.0, 1000.0, 1000.0)), 0.0);
    }

    #[test]
    fn range_is_read_fresh_every_update() {
        let mut progress = ScrollProgress::new();
        progress.update(&viewport(1000.0, 1000.0, 3000.0));
        assert_eq!(progress.value(), 0.5);

        // Document grew between ticks; same offset is now a quarter.
        progress.update(&viewport(1000.0, 1000.0, 5000.0));
        assert_eq!(progress.value(), 0.25);
    }

    #[test]
    fn monotonic_in_offset_for_fixed_geometry() {
        let mut last = 0.0;
        for offset in (0..=3000).step_by(100) {
            let value = ScrollProgress::compute(&viewport(offset as f32, 1000.0, 3000.0));
            assert!(value >= last);
            assert!((0.0..=1.0).contains(&value));
            last = value;
        }
    }
}
