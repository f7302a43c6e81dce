//! Transforms over an ordered vertex sequence
//!
//! Every shape stores its geometry as a `Vec<Vec2>`. These free functions are
//! the single implementation of translation and rotation that all shapes share.

use crate::Vec2;

/// Arithmetic mean of all vertices
///
/// Returns `None` for an empty sequence instead of dividing by zero.
pub fn centroid(vertices: &[Vec2]) -> Option<Vec2> {
    if vertices.is_empty() {
        return None;
    }
    let sum = vertices.iter().fold(Vec2::ZERO, |acc, &v| acc + v);
    Some(sum / vertices.len() as f64)
}

/// Translate every vertex by `offset`
///
/// An empty sequence is left as is.
pub fn translate_vertices(vertices: &mut [Vec2], offset: Vec2) {
    for vertex in vertices.iter_mut() {
        *vertex += offset;
    }
}

/// Rotate every vertex counter-clockwise by `angle_degrees` about the centroid
///
/// The centroid is computed from the vertices as they are at the time of the
/// call. Returns the pivot that was used, or `None` (leaving the sequence
/// untouched) when there are no vertices.
pub fn rotate_vertices(vertices: &mut [Vec2], angle_degrees: f64) -> Option<Vec2> {
    let center = centroid(vertices)?;
    let radians = angle_degrees.to_radians();
    for vertex in vertices.iter_mut() {
        *vertex = vertex.rotated_about(center, radians);
    }
    log::trace!("Rotated {} vertices by {} degrees about {}", vertices.len(), angle_degrees, center);
    Some(center)
}
