//! Shape error types

use std::fmt;

use crate::ShapeKind;

/// Error type for shape operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    /// The operation needs a centroid but the shape has no vertices left
    EmptyShape {
        /// Kind of the removed shape
        kind: ShapeKind,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::EmptyShape { kind } => {
                write!(f, "Operation on empty shape: the {} has no vertices", kind)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_shape_display() {
        let err = ShapeError::EmptyShape { kind: ShapeKind::Rhombus };
        let msg = format!("{}", err);
        assert!(msg.contains("empty shape"));
        assert!(msg.contains("rhombus"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let err = ShapeError::EmptyShape { kind: ShapeKind::Line };
        assert!(err.source().is_none());
    }

    #[test]
    fn test_debug_format() {
        let err = ShapeError::EmptyShape { kind: ShapeKind::Square };
        let debug = format!("{:?}", err);
        assert!(debug.contains("EmptyShape"));
        assert!(debug.contains("Square"));
    }
}
