//! Demo driver
//!
//! A demo is a list of steps. Each step builds one shape from a template,
//! draws it, moves it, draws it again, optionally removes it, and optionally
//! rotates it through the trait object before drawing a final time. Rotating a
//! removed shape is reported and skipped.

use serde::{Serialize, Deserialize};
use shapes2d_core::{rotate_shape, Shape2D, ShapeError, ShapeTemplate};

/// One shape and the operations applied to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoStep {
    /// Shape to build
    pub shape: ShapeTemplate,
    /// Offset applied after the first draw [dx, dy]
    #[serde(default)]
    pub translate: [f64; 2],
    /// Remove the shape after the move
    #[serde(default)]
    pub remove: bool,
    /// Rotation in degrees applied after the move (and removal), if any
    #[serde(default)]
    pub rotate: Option<f64>,
}

impl DemoStep {
    pub fn new(shape: ShapeTemplate, translate: [f64; 2]) -> Self {
        Self { shape, translate, remove: false, rotate: None }
    }

    pub fn with_rotate(mut self, angle_degrees: f64) -> Self {
        self.rotate = Some(angle_degrees);
        self
    }

    pub fn with_remove(mut self) -> Self {
        self.remove = true;
        self
    }

    /// Build the shape and apply this step's operations, drawing as it goes
    pub fn run(&self) -> Box<dyn Shape2D> {
        let mut shape = self.shape.create_shape();
        shape.draw();

        let [dx, dy] = self.translate;
        shape.translate(dx, dy);
        shape.draw();

        if self.remove {
            shape.remove();
            shape.draw();
        }

        if let Some(angle) = self.rotate {
            if let Err(e) = rotate_and_draw(shape.as_mut(), angle) {
                log::warn!("Skipping rotation: {}", e);
            }
        }
        shape
    }
}

/// Rotate through the trait object and draw the result
fn rotate_and_draw(shape: &mut dyn Shape2D, angle_degrees: f64) -> Result<(), ShapeError> {
    rotate_shape(shape, angle_degrees)?;
    shape.draw();
    Ok(())
}

/// The steps the binary runs when configuration does not override them
pub fn default_steps() -> Vec<DemoStep> {
    vec![
        DemoStep::new(ShapeTemplate::line([0.0, 0.0], [1.0, 1.0]), [1.0, 1.0]),
        DemoStep::new(ShapeTemplate::square([0.0, 0.0], 2.0), [2.0, 2.0]),
        DemoStep::new(ShapeTemplate::parallelogram([0.0, 0.0], 3.0, 2.0, 45.0), [1.0, 1.0])
            .with_rotate(30.0),
        DemoStep::new(ShapeTemplate::rhombus([0.0, 0.0], 2.0, 60.0), [2.0, 2.0])
            .with_rotate(-45.0),
    ]
}

/// Run every step in order, optionally removing each shape at the end
///
/// Returns the shapes in their final state.
pub fn run_demo(steps: &[DemoStep], remove_at_end: bool) -> Vec<Box<dyn Shape2D>> {
    let mut shapes: Vec<Box<dyn Shape2D>> = steps.iter().map(DemoStep::run).collect();
    log::info!("Ran {} demo steps", shapes.len());

    if remove_at_end {
        for shape in shapes.iter_mut() {
            shape.remove();
            shape.draw();
        }
    }
    shapes
}
