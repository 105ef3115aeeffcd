use super::Vec2;

/// Viewport rectangle in physical framebuffer pixels.
///
/// Always anchored at the framebuffer origin; only the size follows the window.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Full-framebuffer viewport for a surface of `width` × `height` pixels.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// A zero-area viewport (minimized window) cannot be drawn into.
    #[inline]
    pub fn is_drawable(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Maps a clip-space position to framebuffer pixels (top-left origin, +Y down).
    pub fn clip_to_pixel(self, x: f32, y: f32) -> Vec2 {
        let w = self.width as f32;
        let h = self.height as f32;
        Vec2::new(
            self.x as f32 + (x + 1.0) * 0.5 * w,
            self.y as f32 + (1.0 - y) * 0.5 * h,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_size_is_anchored_at_origin() {
        let vp = Viewport::from_size(1024, 768);
        assert_eq!((vp.x, vp.y, vp.width, vp.height), (0, 0, 1024, 768));
    }

    #[test]
    fn zero_area_is_not_drawable() {
        assert!(!Viewport::from_size(0, 600).is_drawable());
        assert!(!Viewport::from_size(800, 0).is_drawable());
        assert!(Viewport::from_size(1, 1).is_drawable());
    }

    #[test]
    fn clip_corners_map_to_framebuffer_corners() {
        let vp = Viewport::from_size(800, 600);
        assert_eq!(vp.clip_to_pixel(-1.0, 1.0), Vec2::new(0.0, 0.0));
        assert_eq!(vp.clip_to_pixel(1.0, -1.0), Vec2::new(800.0, 600.0));
        assert_eq!(vp.clip_to_pixel(0.0, 0.0), Vec2::new(400.0, 300.0));
    }
}
