use super::Vec2;

/// Axis-aligned rectangle in framebuffer pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds the rectangle spanning two corners, in any order.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            origin: min,
            size: max - min,
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Grows the rectangle so that it also covers `p`.
    #[inline]
    pub fn including(self, p: Vec2) -> Self {
        Self::from_corners(self.min().min(p), self.max().max(p))
    }

    /// Returns the overlapping area, or `None` when the rectangles only touch
    /// or are disjoint.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let lo = self.min().max(other.min());
        let hi = self.max().min(other.max());

        if hi.x - lo.x <= 0.0 || hi.y - lo.y <= 0.0 {
            None
        } else {
            Some(Rect::from_corners(lo, hi))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn from_corners_orders_min_max() {
        let rect = Rect::from_corners(Vec2::new(10.0, 2.0), Vec2::new(4.0, 8.0));
        assert_eq!(rect, r(4.0, 2.0, 6.0, 6.0));
    }

    #[test]
    fn including_grows_to_cover_point() {
        let rect = r(0.0, 0.0, 1.0, 1.0).including(Vec2::new(5.0, -2.0));
        assert_eq!(rect, r(0.0, -2.0, 5.0, 3.0));
    }

    #[test]
    fn intersect_overlapping() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(b), Some(r(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
