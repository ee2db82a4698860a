//! Document-space geometry shared by every measurement utility.
//!
//! All coordinates are logical pixels in document space: the origin sits at
//! the top-left corner of the page and y grows downward. Consumers re-read
//! geometry on every tick instead of caching it, so layout changes between
//! ticks are picked up on the next one.

/// Axis-aligned rectangle in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Area in square pixels. Degenerate extents count as zero.
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Fraction of this rectangle's area that lies inside `other`, in [0, 1].
    ///
    /// A zero-area rectangle reports 0.0: an unmeasurable element can never
    /// satisfy a visibility threshold.
    pub fn fraction_inside(&self, other: &Rect) -> f32 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }
        let overlap_w = span_overlap(self.left, self.right(), other.left, other.right());
        let overlap_h = span_overlap(self.top, self.bottom(), other.top, other.bottom());
        (overlap_w * overlap_h / area).clamp(0.0, 1.0)
    }
}

fn span_overlap(a_start: f32, a_end: f32, b_start: f32, b_end: f32) -> f32 {
    (a_end.min(b_end) - a_start.max(b_start)).max(0.0)
}

/// Snapshot of the scrollable document as the host currently lays it out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Vertical scroll offset in pixels from the top of the document.
    pub scroll_y: f32,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Full document height in pixels, including the off-screen part.
    pub document_height: f32,
}

impl Viewport {
    pub fn new(scroll_y: f32, width: f32, height: f32, document_height: f32) -> Self {
        Self {
            scroll_y,
            width,
            height,
            document_height,
        }
    }

    /// Total scrollable distance. Zero or negative when the document fits
    /// inside the viewport.
    pub fn scroll_range(&self) -> f32 {
        self.document_height - self.height
    }

    /// Document-space rectangle currently on screen.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.height)
    }

    /// Document-space y of the viewport's bottom edge.
    pub fn bottom_edge(&self) -> f32 {
        self.scroll_y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_one_when_fully_contained() {
        let element = Rect::new(100.0, 200.0, 300.0, 100.0);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        assert_eq!(element.fraction_inside(&viewport), 1.0);
    }

    #[test]
    fn fraction_is_zero_when_disjoint() {
        let element = Rect::new(0.0, 2000.0, 300.0, 100.0);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        assert_eq!(element.fraction_inside(&viewport), 0.0);
    }

    #[test]
    fn fraction_tracks_partial_overlap() {
        // Bottom half of the element hangs below the viewport.
        let element = Rect::new(0.0, 950.0, 100.0, 100.0);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let fraction = element.fraction_inside(&viewport);
        assert!((fraction - 0.5).abs() < 1e-6, "got {fraction}");
    }

    #[test]
    fn zero_area_element_is_never_inside() {
        let element = Rect::new(0.0, 0.0, 0.0, 100.0);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        assert_eq!(element.fraction_inside(&viewport), 0.0);
    }

    #[test]
    fn scroll_range_is_negative_for_short_documents() {
        let viewport = Viewport::new(0.0, 800.0, 1000.0, 600.0);
        assert_eq!(viewport.scroll_range(), -400.0);
    }

    #[test]
    fn visible_rect_follows_scroll_offset() {
        let viewport = Viewport::new(250.0, 800.0, 600.0, 3000.0);
        let rect = viewport.visible_rect();
        assert_eq!(rect.top, 250.0);
        assert_eq!(rect.bottom(), 850.0);
        assert_eq!(viewport.bottom_edge(), 850.0);
    }
}
