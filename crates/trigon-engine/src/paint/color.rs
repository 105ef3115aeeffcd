/// Straight-alpha RGBA color, components in `[0, 1]`.
///
/// Everything this crate draws is opaque, so straight and premultiplied
/// alpha coincide.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Framebuffer clear color.
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    /// Lime green.
    pub const LIME: Color = Color::rgba(0.196, 0.804, 0.196, 1.0);

    /// Neon purple.
    pub const PURPLE: Color = Color::rgba(0.58, 0.0, 0.83, 1.0);

    /// Galaxy blue.
    pub const BLUE: Color = Color::rgba(0.21, 0.22, 0.65, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Clear value for a render pass load op.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }

    /// WGSL constructor expression, e.g. `vec4<f32>(0.58, 0.0, 0.83, 1.0)`.
    ///
    /// `{:?}` always prints a decimal point, which keeps every component a
    /// float literal.
    pub fn to_wgsl(self) -> String {
        format!(
            "vec4<f32>({:?}, {:?}, {:?}, {:?})",
            self.r, self.g, self.b, self.a
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgsl_literal_keeps_float_components() {
        assert_eq!(Color::PURPLE.to_wgsl(), "vec4<f32>(0.58, 0.0, 0.83, 1.0)");
        assert_eq!(Color::LIME.to_wgsl(), "vec4<f32>(0.196, 0.804, 0.196, 1.0)");
    }

    #[test]
    fn wgpu_clear_value_matches_components() {
        let c = Color::WHITE.to_wgpu();
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn palette_is_opaque() {
        for c in [Color::WHITE, Color::LIME, Color::PURPLE, Color::BLUE] {
            assert_eq!(c.a, 1.0);
        }
    }
}
