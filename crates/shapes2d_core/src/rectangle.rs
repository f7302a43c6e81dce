//! Axis-aligned rectangles hanging down-right from a top-left corner
//!
//! [`Square`], [`Rectangle`] and [`SquareParallelogram`] share the same corner
//! construction and differ only in the scalars they keep for display.

use shapes2d_math::{Vec2, format_significant, DISPLAY_SIGNIFICANT_DIGITS};

use crate::shape::sealed::VertexStore;
use crate::shape::{Shape2D, ShapeKind, describe_removed};

/// Corners of a `width` x `height` box, clockwise from `top_left`
///
/// y grows upward, so the box extends toward negative y.
pub(crate) fn box_vertices(top_left: Vec2, width: f64, height: f64) -> Vec<Vec2> {
    vec![
        top_left,
        top_left + Vec2::new(width, 0.0),
        top_left + Vec2::new(width, -height),
        top_left + Vec2::new(0.0, -height),
    ]
}

fn scalar(value: f64) -> String {
    format_significant(value, DISPLAY_SIGNIFICANT_DIGITS)
}

/// Text for a shape that reports its first vertex as the top-left corner
fn describe_box(kind: ShapeKind, dimensions: &str, vertices: &[Vec2]) -> String {
    match vertices.first() {
        Some(top_left) => format!(
            "Drawing a {} with {} and top left vertex at {}.",
            kind, dimensions, top_left
        ),
        None => describe_removed(kind),
    }
}

/// A square of side `side_length`
#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    side_length: f64,
    vertices: Vec<Vec2>,
}

impl Square {
    pub fn new(top_left: impl Into<Vec2>, side_length: f64) -> Self {
        let top_left = top_left.into();
        log::debug!("Created square with side {} at {}", side_length, top_left);
        Self {
            side_length,
            vertices: box_vertices(top_left, side_length, side_length),
        }
    }

    /// Side length given at construction
    #[inline]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }
}

impl VertexStore for Square {
    fn vertices_mut(&mut self) -> &mut [Vec2] {
        &mut self.vertices
    }

    fn clear_vertices(&mut self) {
        self.vertices.clear();
    }
}

impl Shape2D for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    fn describe(&self) -> String {
        let dimensions = format!("side length {}", scalar(self.side_length));
        describe_box(self.kind(), &dimensions, &self.vertices)
    }
}

/// A rectangle of `width` x `height`
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
    vertices: Vec<Vec2>,
}

impl Rectangle {
    pub fn new(top_left: impl Into<Vec2>, width: f64, height: f64) -> Self {
        let top_left = top_left.into();
        log::debug!("Created rectangle {}x{} at {}", width, height, top_left);
        Self {
            width,
            height,
            vertices: box_vertices(top_left, width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl VertexStore for Rectangle {
    fn vertices_mut(&mut self) -> &mut [Vec2] {
        &mut self.vertices
    }

    fn clear_vertices(&mut self) {
        self.vertices.clear();
    }
}

impl Shape2D for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    fn describe(&self) -> String {
        let dimensions = format!("width {}, height {}", scalar(self.width), scalar(self.height));
        describe_box(self.kind(), &dimensions, &self.vertices)
    }
}

/// A square viewed as the special parallelogram with right angles
///
/// Geometrically identical to `Rectangle::new(top_left, side, side)`.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareParallelogram {
    side_length: f64,
    vertices: Vec<Vec2>,
}

impl SquareParallelogram {
    pub fn new(top_left: impl Into<Vec2>, side_length: f64) -> Self {
        let top_left = top_left.into();
        log::debug!("Created square parallelogram with side {} at {}", side_length, top_left);
        Self {
            side_length,
            vertices: box_vertices(top_left, side_length, side_length),
        }
    }

    #[inline]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }
}

impl VertexStore for SquareParallelogram {
    fn vertices_mut(&mut self) -> &mut [Vec2] {
        &mut self.vertices
    }

    fn clear_vertices(&mut self) {
        self.vertices.clear();
    }
}

impl Shape2D for SquareParallelogram {
    fn kind(&self) -> ShapeKind {
        ShapeKind::SquareParallelogram
    }

    fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    fn describe(&self) -> String {
        let dimensions = format!("side length {}", scalar(self.side_length));
        describe_box(self.kind(), &dimensions, &self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_vertices() {
        let square = Square::new((0.0, 0.0), 2.0);
        assert_eq!(
            square.vertices(),
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(2.0, 0.0),
                Vec2::new(2.0, -2.0),
                Vec2::new(0.0, -2.0),
            ]
        );
    }

    #[test]
    fn test_square_describe_after_move() {
        let mut square = Square::new((0.0, 0.0), 2.0);
        square.translate(2.0, 2.0);
        assert_eq!(
            square.describe(),
            "Drawing a square with side length 2 and top left vertex at (2, 2)."
        );
    }

    #[test]
    fn test_rectangle_vertices() {
        let rect = Rectangle::new((1.0, 1.0), 3.0, 2.0);
        assert_eq!(
            rect.vertices(),
            &[
                Vec2::new(1.0, 1.0),
                Vec2::new(4.0, 1.0),
                Vec2::new(4.0, -1.0),
                Vec2::new(1.0, -1.0),
            ]
        );
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_rectangle_describe() {
        let rect = Rectangle::new((1.0, 1.0), 3.0, 2.0);
        assert_eq!(
            rect.describe(),
            "Drawing a rectangle with width 3, height 2 and top left vertex at (1, 1)."
        );
    }

    #[test]
    fn test_square_parallelogram_matches_rectangle() {
        let sp = SquareParallelogram::new((0.5, -1.0), 1.5);
        let rect = Rectangle::new((0.5, -1.0), 1.5, 1.5);
        assert_eq!(sp.vertices(), rect.vertices());
        assert_eq!(
            sp.describe(),
            "Drawing a square parallelogram with side length 1.5 and top left vertex at (0.5, -1)."
        );
    }

    #[test]
    fn test_describe_removed() {
        let mut rect = Rectangle::new((0.0, 0.0), 1.0, 1.0);
        rect.remove();
        assert_eq!(rect.describe(), "Drawing a rectangle with no vertices.");
    }

    #[test]
    fn test_describe_trims_long_values() {
        let rect = Rectangle::new((1.0 / 3.0, 0.0), 2.0 / 3.0, 1.0);
        assert_eq!(
            rect.describe(),
            "Drawing a rectangle with width 0.666667, height 1 and top left vertex at (0.333333, 0)."
        );
    }

    #[test]
    fn test_display_scalars_survive_rotation() {
        let mut square = Square::new((0.0, 0.0), 2.0);
        square.rotate(45.0).unwrap();
        assert_eq!(square.side_length(), 2.0);
    }
}
