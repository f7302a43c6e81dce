//! Declarative shape templates
//!
//! ShapeTemplate describes a shape by its construction parameters so that it
//! can be written in configuration files. Each variant corresponds to a shape
//! type; `create_shape` builds the boxed trait object.

use serde::{Serialize, Deserialize};
use shapes2d_math::Vec2;

use crate::{Line, Parallelogram, Rectangle, Rhombus, Shape2D, ShapeKind, Square, SquareParallelogram};

/// Construction parameters for any shape
///
/// Points are `[x, y]` pairs and angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeTemplate {
    Line {
        start: [f64; 2],
        end: [f64; 2],
    },
    Square {
        top_left: [f64; 2],
        side: f64,
    },
    Rectangle {
        top_left: [f64; 2],
        width: f64,
        height: f64,
    },
    Parallelogram {
        vertex: [f64; 2],
        side_a: f64,
        side_b: f64,
        angle: f64,
    },
    Rhombus {
        vertex: [f64; 2],
        side: f64,
        angle: f64,
    },
    SquareParallelogram {
        top_left: [f64; 2],
        side: f64,
    },
}

impl ShapeTemplate {
    /// Create the actual shape from this template
    pub fn create_shape(&self) -> Box<dyn Shape2D> {
        match *self {
            ShapeTemplate::Line { start, end } => {
                Box::new(Line::new(Vec2::from(start), Vec2::from(end)))
            }
            ShapeTemplate::Square { top_left, side } => {
                Box::new(Square::new(Vec2::from(top_left), side))
            }
            ShapeTemplate::Rectangle { top_left, width, height } => {
                Box::new(Rectangle::new(Vec2::from(top_left), width, height))
            }
            ShapeTemplate::Parallelogram { vertex, side_a, side_b, angle } => {
                Box::new(Parallelogram::new(Vec2::from(vertex), side_a, side_b, angle))
            }
            ShapeTemplate::Rhombus { vertex, side, angle } => {
                Box::new(Rhombus::new(Vec2::from(vertex), side, angle))
            }
            ShapeTemplate::SquareParallelogram { top_left, side } => {
                Box::new(SquareParallelogram::new(Vec2::from(top_left), side))
            }
        }
    }

    /// Kind of shape this template creates
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeTemplate::Line { .. } => ShapeKind::Line,
            ShapeTemplate::Square { .. } => ShapeKind::Square,
            ShapeTemplate::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeTemplate::Parallelogram { .. } => ShapeKind::Parallelogram,
            ShapeTemplate::Rhombus { .. } => ShapeKind::Rhombus,
            ShapeTemplate::SquareParallelogram { .. } => ShapeKind::SquareParallelogram,
        }
    }

    pub fn line(start: [f64; 2], end: [f64; 2]) -> Self {
        ShapeTemplate::Line { start, end }
    }

    pub fn square(top_left: [f64; 2], side: f64) -> Self {
        ShapeTemplate::Square { top_left, side }
    }

    pub fn rectangle(top_left: [f64; 2], width: f64, height: f64) -> Self {
        ShapeTemplate::Rectangle { top_left, width, height }
    }

    pub fn parallelogram(vertex: [f64; 2], side_a: f64, side_b: f64, angle: f64) -> Self {
        ShapeTemplate::Parallelogram { vertex, side_a, side_b, angle }
    }

    pub fn rhombus(vertex: [f64; 2], side: f64, angle: f64) -> Self {
        ShapeTemplate::Rhombus { vertex, side, angle }
    }

    pub fn square_parallelogram(top_left: [f64; 2], side: f64) -> Self {
        ShapeTemplate::SquareParallelogram { top_left, side }
    }
}
