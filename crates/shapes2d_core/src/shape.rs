//! The shape capability trait
//!
//! Every concrete shape owns its ordered vertex sequence and implements
//! [`Shape2D`]. Translation and rotation are provided once, as default methods
//! over the shared transforms in `shapes2d_math`, so each shape only has to say
//! what it is and how it describes itself.
//!
//! Write access to the vertices goes through the crate-private
//! [`VertexStore`](sealed::VertexStore) supertrait. It hands out a slice, never
//! the `Vec`, so the vertex count only changes when `remove` clears it.

use std::fmt;

use shapes2d_math::{Vec2, centroid, rotate_vertices, translate_vertices};

use crate::ShapeError;

/// The fixed set of shape kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Square,
    Rectangle,
    Parallelogram,
    Rhombus,
    SquareParallelogram,
}

impl ShapeKind {
    /// Number of vertices a freshly constructed shape of this kind has
    pub fn vertex_count(self) -> usize {
        match self {
            ShapeKind::Line => 2,
            _ => 4,
        }
    }

    /// Lowercase label used in drawn text
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Parallelogram => "parallelogram",
            ShapeKind::Rhombus => "rhombus",
            ShapeKind::SquareParallelogram => "square parallelogram",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub(crate) mod sealed {
    use shapes2d_math::Vec2;

    /// Mutable vertex access, only reachable from inside this crate
    pub trait VertexStore {
        /// The vertices as a fixed-length slice
        fn vertices_mut(&mut self) -> &mut [Vec2];

        /// Drop every vertex
        fn clear_vertices(&mut self);
    }
}

/// Capability interface shared by all shapes: draw, remove, move and rotate
///
/// Implementors supply [`kind`](Shape2D::kind), read access to their vertex
/// sequence, and a [`describe`](Shape2D::describe) text. Everything else is
/// provided. The trait is sealed: only shapes in this crate implement it.
pub trait Shape2D: sealed::VertexStore + Send + Sync {
    /// Which kind of shape this is
    fn kind(&self) -> ShapeKind;

    /// Current vertices, in winding order
    fn vertices(&self) -> &[Vec2];

    /// Human-readable description of the shape at its current position
    fn describe(&self) -> String;

    /// Print the description to standard output
    fn draw(&self) {
        println!("{}", self.describe());
    }

    /// Clear the vertex sequence, leaving the shape inert
    ///
    /// Calling this on an already removed shape changes nothing.
    fn remove(&mut self) {
        println!("Removing a {}.", self.kind());
        if !self.is_removed() {
            log::debug!("Cleared {} vertices", self.vertex_count());
        }
        self.clear_vertices();
    }

    /// Translate every vertex by `(dx, dy)`
    ///
    /// This is the shape's "move" operation.
    fn translate(&mut self, dx: f64, dy: f64) {
        translate_vertices(self.vertices_mut(), Vec2::new(dx, dy));
    }

    /// Rotate counter-clockwise by `angle_degrees` about the current centroid
    ///
    /// # Errors
    /// Returns [`ShapeError::EmptyShape`] if the shape has been removed. The
    /// shape is not modified in that case.
    fn rotate(&mut self, angle_degrees: f64) -> Result<(), ShapeError> {
        let kind = self.kind();
        match rotate_vertices(self.vertices_mut(), angle_degrees) {
            Some(pivot) => {
                log::debug!("Rotated {} by {} degrees about {}", kind, angle_degrees, pivot);
                Ok(())
            }
            None => Err(ShapeError::EmptyShape { kind }),
        }
    }

    /// Number of vertices currently held
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Whether [`remove`](Shape2D::remove) has emptied this shape
    #[inline]
    fn is_removed(&self) -> bool {
        self.vertices().is_empty()
    }

    /// Mean of the current vertices, or `None` once removed
    fn centroid(&self) -> Option<Vec2> {
        centroid(self.vertices())
    }
}

/// Rotate any shape through the trait object
pub fn rotate_shape(shape: &mut dyn Shape2D, angle_degrees: f64) -> Result<(), ShapeError> {
    shape.rotate(angle_degrees)
}

/// `Drawing a <kind> with vertices:` followed by one line per vertex
pub(crate) fn describe_vertices(kind: ShapeKind, vertices: &[Vec2]) -> String {
    let mut text = format!("Drawing a {} with vertices:", kind);
    for vertex in vertices {
        text.push('\n');
        text.push_str(&vertex.to_string());
    }
    text
}

/// Text drawn for a shape whose vertices have been removed
pub(crate) fn describe_removed(kind: ShapeKind) -> String {
    format!("Drawing a {} with no vertices.", kind)
}
