use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Viewport};

/// Number of vertices submitted per triangle draw.
pub const VERTICES_PER_TRIANGLE: u32 = 3;

/// A single vertex: clip-space position only.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }

    /// Position stream at location 0: 3 floats, tightly packed, offset 0.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Three vertices drawn as one filled triangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Vertex; 3],
}

impl Triangle {
    #[inline]
    pub const fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { vertices: [a, b, c] }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.vertices
    }

    /// The 9 position floats in vertex order.
    #[inline]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Pixel-space bounding box under an identity transform.
    pub fn screen_bounds(&self, viewport: Viewport) -> Rect {
        let [a, b, c] = self.vertices.map(|v| viewport.clip_to_pixel(v.position[0], v.position[1]));
        Rect::from_corners(a, b).including(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Triangle {
        Triangle::new(
            Vertex::new(0.1, 0.1, 0.0),
            Vertex::new(0.6, 0.1, 0.0),
            Vertex::new(0.1, 0.6, 0.0),
        )
    }

    #[test]
    fn layout_is_single_float3_attribute() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes.len(), 1);

        let attr = layout.attributes[0];
        assert_eq!(attr.shader_location, 0);
        assert_eq!(attr.offset, 0);
        assert_eq!(attr.format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn floats_follow_vertex_order() {
        let t = tri();
        let expected: [f32; 9] = [0.1, 0.1, 0.0, 0.6, 0.1, 0.0, 0.1, 0.6, 0.0];
        assert_eq!(t.as_floats(), &expected[..]);
        assert_eq!(t.as_bytes().len(), 36);
    }

    #[test]
    fn screen_bounds_use_top_left_origin() {
        let bounds = tri().screen_bounds(Viewport::from_size(200, 100));
        // x: (0.1 + 1) * 100 = 110 .. (0.6 + 1) * 100 = 160
        // y: (1 - 0.6) * 50 = 20 .. (1 - 0.1) * 50 = 45
        assert!((bounds.min().x - 110.0).abs() < 1e-3);
        assert!((bounds.max().x - 160.0).abs() < 1e-3);
        assert!((bounds.min().y - 20.0).abs() < 1e-3);
        assert!((bounds.max().y - 45.0).abs() < 1e-3);
    }
}
