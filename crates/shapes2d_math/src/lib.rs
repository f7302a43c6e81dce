//! 2D Mathematics Library
//!
//! This crate provides the vertex type and vertex-sequence transforms shared
//! by every shape in `shapes2d_core`.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components
//! - [`format_significant`] - Number formatting used by `Vec2`'s `Display`
//!
//! ## Vertex Transforms
//!
//! - [`centroid`] - Mean of a vertex sequence
//! - [`translate_vertices`] - Move every vertex by an offset
//! - [`rotate_vertices`] - Rotate every vertex about the centroid

mod vec2;
pub mod vertices;

pub use vec2::{Vec2, format_significant, DISPLAY_SIGNIFICANT_DIGITS};
pub use vertices::{centroid, translate_vertices, rotate_vertices};
