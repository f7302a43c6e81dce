//! Core shape types for shapes2d
//!
//! This crate provides the concrete shapes and the trait they share:
//!
//! - [`Shape2D`] - Capability interface: draw, remove, translate, rotate
//! - [`ShapeKind`] - Which kind of shape a value is
//! - [`Line`], [`Square`], [`Rectangle`], [`SquareParallelogram`],
//!   [`Parallelogram`], [`Rhombus`] - The concrete shapes
//! - [`ShapeTemplate`] - Construction parameters, loadable from config
//! - [`ShapeError`] - Errors from operations on removed shapes

mod error;
mod shape;
mod line;
mod rectangle;
mod parallelogram;
mod shapes;

pub use error::ShapeError;
pub use shape::{Shape2D, ShapeKind, rotate_shape};
pub use line::Line;
pub use rectangle::{Square, Rectangle, SquareParallelogram};
pub use parallelogram::{Parallelogram, Rhombus};
pub use shapes::ShapeTemplate;

// Re-export the vertex type for convenience
pub use shapes2d_math::Vec2;
