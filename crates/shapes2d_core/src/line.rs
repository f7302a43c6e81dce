//! Line segment between two points

use shapes2d_math::Vec2;

use crate::shape::sealed::VertexStore;
use crate::shape::{Shape2D, ShapeKind, describe_removed};

/// A line segment, stored as `[start, end]`
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    vertices: Vec<Vec2>,
}

impl Line {
    /// Create a line from `start` to `end`
    pub fn new(start: impl Into<Vec2>, end: impl Into<Vec2>) -> Self {
        let (start, end) = (start.into(), end.into());
        log::debug!("Created line from {} to {}", start, end);
        Self {
            vertices: vec![start, end],
        }
    }

    /// Current start point, `None` once removed
    pub fn start(&self) -> Option<Vec2> {
        self.vertices.first().copied()
    }

    /// Current end point, `None` once removed
    pub fn end(&self) -> Option<Vec2> {
        self.vertices.get(1).copied()
    }

    /// Length of the segment (zero once removed)
    pub fn length(&self) -> f64 {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => start.distance(end),
            _ => 0.0,
        }
    }
}

impl VertexStore for Line {
    fn vertices_mut(&mut self) -> &mut [Vec2] {
        &mut self.vertices
    }

    fn clear_vertices(&mut self) {
        self.vertices.clear();
    }
}

impl Shape2D for Line {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    fn describe(&self) -> String {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => format!("Drawing a line from {} to {}.", start, end),
            _ => describe_removed(self.kind()),
        }
    }
}
