/// Integer pixel rectangle, half-open: `[x0, x1) × [y0, y1)`.
///
/// Used for clip bounds after float clip rects have been snapped to pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct PixelRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PixelRect {
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The full screen (or any `width × height` buffer) anchored at the origin.
    #[inline]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, clamp_dim(width), clamp_dim(height))
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.y1 - self.y0
    }

    /// Zero or negative extent on either axis.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Half-open containment.
    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x0 && y >= self.y0 && x < self.x1 && y < self.y1
    }

    /// Overlap of two rects, `None` when they do not share any pixel.
    #[inline]
    pub fn intersect(self, other: PixelRect) -> Option<PixelRect> {
        let r = PixelRect::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        );
        if r.is_empty() { None } else { Some(r) }
    }
}

#[inline]
fn clamp_dim(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x0: i32, y0: i32, x1: i32, y1: i32) -> PixelRect {
        PixelRect::new(x0, y0, x1, y1)
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0, 0, 10, 10).contains(0, 0));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0, 0, 10, 10).contains(10, 10));
        assert!(r(0, 0, 10, 10).contains(9, 9));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0, 0, 10, 10).contains(-1, 5));
        assert!(!r(0, 0, 10, 10).contains(5, -1));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        assert_eq!(r(0, 0, 10, 10).intersect(r(5, 5, 15, 15)), Some(r(5, 5, 10, 10)));
    }

    #[test]
    fn intersect_clamps_negative_origin() {
        let screen = PixelRect::from_size(4, 4);
        assert_eq!(r(-3, -3, 2, 2).intersect(screen), Some(r(0, 0, 2, 2)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0, 0, 10, 10).intersect(r(10, 0, 20, 10)).is_none());
    }

    #[test]
    fn intersect_disjoint_returns_none() {
        assert!(r(0, 0, 5, 5).intersect(r(20, 20, 25, 25)).is_none());
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_or_negative_size() {
        assert!(r(0, 0, 0, 5).is_empty());
        assert!(r(0, 0, 5, 0).is_empty());
        assert!(r(5, 5, 2, 8).is_empty());
        assert!(!r(0, 0, 1, 1).is_empty());
    }
}
