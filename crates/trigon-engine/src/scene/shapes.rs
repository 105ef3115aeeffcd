use crate::paint::Color;
use crate::render::{Triangle, Vertex};

/// Number of shapes in the scene.
pub const SHAPE_COUNT: usize = 3;

/// Right triangle, first quadrant.
pub const RIGHT: Triangle = Triangle::new(
    Vertex::new(0.1, 0.1, 0.0),
    Vertex::new(0.6, 0.1, 0.0),
    Vertex::new(0.1, 0.6, 0.0),
);

/// Equilateral-looking triangle, second quadrant.
pub const EQUILATERAL: Triangle = Triangle::new(
    Vertex::new(-0.6, 0.1, 0.0),
    Vertex::new(-0.1, 0.1, 0.0),
    Vertex::new(-0.35, 0.54, 0.0),
);

/// Isosceles triangle, third quadrant, pointing down.
pub const ISOSCELES: Triangle = Triangle::new(
    Vertex::new(-0.6, -0.1, 0.0),
    Vertex::new(-0.1, -0.1, 0.0),
    Vertex::new(-0.35, -0.5, 0.0),
);

/// One triangle and the color its program emits.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shape {
    pub name: &'static str,
    pub triangle: Triangle,
    pub color: Color,
}

/// Shapes in draw order.
pub const SHAPES: [Shape; SHAPE_COUNT] = [
    Shape { name: "right", triangle: RIGHT, color: Color::LIME },
    Shape { name: "equilateral", triangle: EQUILATERAL, color: Color::PURPLE },
    Shape { name: "isosceles", triangle: ISOSCELES, color: Color::BLUE },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;

    #[test]
    fn right_triangle_bounds_at_800x600() {
        let b = RIGHT.screen_bounds(Viewport::from_size(800, 600));
        assert!((b.min().x - 440.0).abs() < 1e-3);
        assert!((b.max().x - 640.0).abs() < 1e-3);
        assert!((b.min().y - 120.0).abs() < 1e-3);
        assert!((b.max().y - 270.0).abs() < 1e-3);
    }

    #[test]
    fn shapes_do_not_overlap_on_screen() {
        let vp = Viewport::from_size(800, 600);
        let bounds: Vec<_> = SHAPES.iter().map(|s| s.triangle.screen_bounds(vp)).collect();

        for (i, a) in bounds.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &bounds[i + 1..] {
                assert!(a.intersect(*b).is_none(), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn each_shape_sits_in_its_quadrant() {
        let quadrant = |t: &Triangle| {
            let (x, y) = t.vertices().iter().fold((0.0, 0.0), |(x, y), v| {
                (x + v.position[0], y + v.position[1])
            });
            (x > 0.0, y > 0.0)
        };

        assert_eq!(quadrant(&RIGHT), (true, true));
        assert_eq!(quadrant(&EQUILATERAL), (false, true));
        assert_eq!(quadrant(&ISOSCELES), (false, false));
    }

    #[test]
    fn first_shape_is_lime() {
        assert_eq!(SHAPES[0].color.to_array(), [0.196, 0.804, 0.196, 1.0]);
        assert_eq!(SHAPES[1].color, Color::PURPLE);
        assert_eq!(SHAPES[2].color, Color::BLUE);
    }
}
