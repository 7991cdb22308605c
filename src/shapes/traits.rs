//! Shape trait definition
//!
//! The `Shape` trait is the core abstraction for drawable shapes.
//! A shape describes its outline in pixel space; drawing maps that outline
//! into normalized device space and emits it as a closed line loop.

use crate::error::Result;
use crate::geometry::{map_xy, Viewport};
use crate::render::{Canvas, LineLoop};

/// A closed outline that can be drawn on a `Canvas`
pub trait Shape {
    /// Get the name of this shape (for logging)
    fn name(&self) -> &str;

    /// Outline vertices in pixel space, in drawing order
    ///
    /// The last vertex connects back to the first.
    fn outline(&self) -> Vec<(f32, f32)>;

    /// Emit the outline as a line loop
    ///
    /// Pixel coordinates are normalized against `screen`.
    ///
    /// # Errors
    /// `FlowerError::InvalidViewport` if `screen` has a non-positive
    /// dimension. The line loop is still closed in that case.
    fn draw(&self, canvas: &mut dyn Canvas, screen: Viewport) -> Result<()> {
        let mut line_loop = LineLoop::begin(canvas);
        for (x, y) in self.outline() {
            line_loop.vertex(map_xy(x, y, screen)?);
        }
        Ok(())
    }
}
