//! Presents recorded frames through egui
//!
//! ## Coordinate System
//!
//! Frames are recorded in normalized device space:
//! - X: -1.0 = left edge, +1.0 = right edge
//! - Y: -1.0 = bottom edge, +1.0 = top edge
//!
//! The painter stretches that square over the target rectangle, the same
//! way a GL viewport covers the whole window.

use eframe::egui::{self, Pos2, Rect, Stroke};

use super::canvas::Frame;
use crate::geometry::NormalizedPoint;

/// Paints `Frame`s onto an egui painter
#[derive(Clone, Debug)]
pub struct FramePainter {
    /// Line thickness in points
    pub line_width: f32,
}

impl Default for FramePainter {
    fn default() -> Self {
        Self { line_width: 1.0 }
    }
}

impl FramePainter {
    /// Convert a normalized device point to a position inside `rect`
    ///
    /// Y is inverted: screen Y increases downward.
    pub fn ndc_to_screen(p: NormalizedPoint, rect: Rect) -> Pos2 {
        let (x, y) = p.to_tuple();
        let norm_x = (x + 1.0) / 2.0;
        let norm_y = (y + 1.0) / 2.0;

        Pos2::new(
            rect.left() + norm_x * rect.width(),
            rect.bottom() - norm_y * rect.height(),
        )
    }

    /// Draw the frame's background and every line loop into `rect`
    pub fn paint(&self, painter: &egui::Painter, rect: Rect, frame: &Frame) {
        painter.rect_filled(rect, 0.0, frame.background);

        for primitive in &frame.primitives {
            // A loop needs two vertices before there is anything to stroke
            if primitive.vertices.len() < 2 {
                continue;
            }

            let points: Vec<Pos2> = primitive
                .vertices
                .iter()
                .map(|v| Self::ndc_to_screen(*v, rect))
                .collect();

            let stroke = Stroke::new(self.line_width, primitive.color);
            painter.add(egui::Shape::closed_line(points, stroke));
        }

        if !frame.flushed {
            log::trace!("Presenting a frame that was never flushed");
        }
    }
}
