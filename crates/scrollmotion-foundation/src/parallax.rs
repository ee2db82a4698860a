//! Depth-scaled drift offsets.

use scrollmotion_core::{ElementId, GeometryReader};

use crate::constants::DEFAULT_PARALLAX_STRENGTH;

/// Vertical drift for one element, scaled by a strength factor.
///
/// Every tick: `offset = (scroll_y + viewport_height − element_top) ×
/// strength`. The raw delta is how far the viewport's bottom edge has
/// traveled past the element's top, so the drift grows as the element
/// approaches and passes through view. The offset is deliberately
/// unclamped — it is cosmetic drift, not a layout constraint.
#[derive(Debug, Clone)]
pub struct Parallax {
    element: ElementId,
    strength: f32,
    offset: f32,
}

impl Parallax {
    /// Binding with [`DEFAULT_PARALLAX_STRENGTH`].
    pub fn new(element: ElementId) -> Self {
        Self::with_strength(element, DEFAULT_PARALLAX_STRENGTH)
    }

    /// `strength` is typically 0.15–0.5. Negative values drift against the
    /// scroll, which some backdrops use on purpose.
    pub fn with_strength(element: ElementId, strength: f32) -> Self {
        Self {
            element,
            strength,
            offset: 0.0,
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Last computed offset in pixels.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Recomputes from current geometry.
    ///
    /// Returns the fresh offset, or `None` while the element is
    /// unmeasurable this tick — the computation is skipped and the last
    /// offset stands, so a late-mounting element never turns into an error.
    pub fn update(&mut self, geometry: &dyn GeometryReader) -> Option<f32> {
        let rect = geometry.element_rect(self.element)?;
        let viewport = geometry.viewport();
        let raw_delta = viewport.bottom_edge() - rect.top;
        self.offset = raw_delta * self.strength;
        Some(self.offset)
    }
}
