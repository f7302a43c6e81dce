//! Slanted quadrilaterals: parallelograms and rhombi
//!
//! Both start at an anchor vertex, run `side_a` along +x, then slant down by
//! `side_b` at `angle` degrees. A rhombus is the case `side_a == side_b`.

use shapes2d_math::Vec2;

use crate::shape::sealed::VertexStore;
use crate::shape::{Shape2D, ShapeKind, describe_removed, describe_vertices};

/// Corners of a parallelogram anchored at `vertex`
pub(crate) fn slanted_vertices(vertex: Vec2, side_a: f64, side_b: f64, angle_degrees: f64) -> Vec<Vec2> {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let slant = Vec2::new(-side_b * cos, -side_b * sin);
    vec![
        vertex,
        vertex + Vec2::new(side_a, 0.0),
        vertex + Vec2::new(side_a, 0.0) + slant,
        vertex + slant,
    ]
}

fn describe_slanted(kind: ShapeKind, vertices: &[Vec2]) -> String {
    if vertices.is_empty() {
        describe_removed(kind)
    } else {
        describe_vertices(kind, vertices)
    }
}

/// A parallelogram with sides `side_a` and `side_b` meeting at `angle` degrees
#[derive(Clone, Debug, PartialEq)]
pub struct Parallelogram {
    side_a: f64,
    side_b: f64,
    angle: f64,
    vertices: Vec<Vec2>,
}

impl Parallelogram {
    pub fn new(vertex: impl Into<Vec2>, side_a: f64, side_b: f64, angle_degrees: f64) -> Self {
        let vertex = vertex.into();
        log::debug!(
            "Created parallelogram at {} with sides {} and {} at {} degrees",
            vertex, side_a, side_b, angle_degrees
        );
        Self {
            side_a,
            side_b,
            angle: angle_degrees,
            vertices: slanted_vertices(vertex, side_a, side_b, angle_degrees),
        }
    }

    #[inline]
    pub fn side_a(&self) -> f64 {
        self.side_a
    }

    #[inline]
    pub fn side_b(&self) -> f64 {
        self.side_b
    }

    /// Construction angle in degrees
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl VertexStore for Parallelogram {
    fn vertices_mut(&mut self) -> &mut [Vec2] {
        &mut self.vertices
    }

    fn clear_vertices(&mut self) {
        self.vertices.clear();
    }
}

impl Shape2D for Parallelogram {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Parallelogram
    }

    fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    fn describe(&self) -> String {
        describe_slanted(self.kind(), &self.vertices)
    }
}

/// A rhombus: four equal sides of `side_length`, slanted at `angle` degrees
#[derive(Clone, Debug, PartialEq)]
pub struct Rhombus {
    side_length: f64,
    angle: f64,
    vertices: Vec<Vec2>,
}

impl Rhombus {
    pub fn new(vertex: impl Into<Vec2>, side_length: f64, angle_degrees: f64) -> Self {
        let vertex = vertex.into();
        log::debug!(
            "Created rhombus at {} with side {} at {} degrees",
            vertex, side_length, angle_degrees
        );
        Self {
            side_length,
            angle: angle_degrees,
            vertices: slanted_vertices(vertex, side_length, side_length, angle_degrees),
        }
    }

    #[inline]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    /// Construction angle in degrees
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl VertexStore for Rhombus {
    fn vertices_mut(&mut self) -> &mut [Vec2] {
        &mut self.vertices
    }

    fn clear_vertices(&mut self) {
        self.vertices.clear();
    }
}

impl Shape2D for Rhombus {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rhombus
    }

    fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    fn describe(&self) -> String {
        describe_slanted(self.kind(), &self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_vertices(actual: &[Vec2], expected: &[Vec2]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(a.approx_eq(*e, EPSILON), "expected {}, got {}", e, a);
        }
    }

    #[test]
    fn test_parallelogram_vertices() {
        let p = Parallelogram::new((0.0, 0.0), 3.0, 2.0, 45.0);
        let h = 2.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert_vertices(
            p.vertices(),
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(3.0, 0.0),
                Vec2::new(3.0 - h, -h),
                Vec2::new(-h, -h),
            ],
        );
    }

    #[test]
    fn test_right_angle_parallelogram_is_box() {
        // cos(90) is not exactly zero, hence the tolerance
        let p = Parallelogram::new((1.0, 1.0), 2.0, 1.0, 90.0);
        assert_vertices(
            p.vertices(),
            &[
                Vec2::new(1.0, 1.0),
                Vec2::new(3.0, 1.0),
                Vec2::new(3.0, 0.0),
                Vec2::new(1.0, 0.0),
            ],
        );
    }

    #[test]
    fn test_rhombus_matches_equal_sided_parallelogram() {
        let r = Rhombus::new((0.0, 0.0), 2.0, 60.0);
        let p = Parallelogram::new((0.0, 0.0), 2.0, 2.0, 60.0);
        assert_vertices(r.vertices(), p.vertices());
    }

    #[test]
    fn test_rhombus_sides_are_equal() {
        let r = Rhombus::new((0.5, 0.5), 2.0, 60.0);
        let v = r.vertices();
        for i in 0..4 {
            let side = v[i].distance(v[(i + 1) % 4]);
            assert!((side - 2.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_describe() {
        let p = Parallelogram::new((0.0, 0.0), 1.0, 1.0, 90.0);
        let text = p.describe();
        assert!(text.starts_with("Drawing a parallelogram with vertices:\n(0, 0)\n(1, 0)\n"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_describe_removed() {
        let mut r = Rhombus::new((0.0, 0.0), 2.0, 60.0);
        r.remove();
        assert_eq!(r.describe(), "Drawing a rhombus with no vertices.");
        assert_eq!(r.side_length(), 2.0);
        assert_eq!(r.angle(), 60.0);
    }
}
