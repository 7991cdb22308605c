//! Immediate-mode drawing surface
//!
//! Shapes draw by emitting vertices into a `Canvas`, bracketed by a
//! line-loop primitive. Every redraw records into a `FrameRecorder`, which
//! produces a `Frame` (a display list) that the painter later presents.
//!
//! ## Model-view transform
//!
//! The canvas carries a 2D rotation about the view axis that is applied to
//! every vertex as it is emitted. Like a GL matrix stack, the transform is
//! state: it survives across primitives and frames until reset with
//! `load_identity`.

use eframe::egui::Color32;
use nalgebra::{Point2, Rotation2};

use crate::geometry::NormalizedPoint;

/// A surface that accepts immediate-mode drawing commands
pub trait Canvas {
    /// Clear the frame to a solid color, discarding everything drawn so far
    fn clear(&mut self, color: Color32);

    /// Set the color used by subsequent primitives
    fn set_color(&mut self, color: Color32);

    /// Start a closed polyline; prefer `LineLoop::begin`, which always ends it
    fn begin_line_loop(&mut self);

    /// Append a vertex to the open line loop
    fn vertex(&mut self, p: NormalizedPoint);

    /// Close the open line loop
    fn end_line_loop(&mut self);

    /// Rotate the model-view transform about the view axis
    fn rotate(&mut self, degrees: f32);

    /// Reset the model-view transform to identity
    fn load_identity(&mut self);

    /// Mark the frame as complete
    fn flush(&mut self);
}

/// Scoped line-loop primitive
///
/// The loop is ended when the guard drops, so it is closed even if the code
/// emitting vertices bails out early with `?`.
pub struct LineLoop<'a> {
    canvas: &'a mut dyn Canvas,
}

impl<'a> LineLoop<'a> {
    pub fn begin(canvas: &'a mut dyn Canvas) -> Self {
        canvas.begin_line_loop();
        Self { canvas }
    }

    pub fn vertex(&mut self, p: NormalizedPoint) {
        self.canvas.vertex(p);
    }
}

impl Drop for LineLoop<'_> {
    fn drop(&mut self) {
        self.canvas.end_line_loop();
    }
}

/// One closed polyline in a recorded frame
#[derive(Clone, Debug, PartialEq)]
pub struct LineLoopPrimitive {
    pub color: Color32,
    pub vertices: Vec<NormalizedPoint>,
}

/// A recorded frame, ready to be presented
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Color the frame was cleared to
    pub background: Color32,
    /// Primitives in draw order
    pub primitives: Vec<LineLoopPrimitive>,
    /// Whether `flush` was called
    pub flushed: bool,
}

/// Canvas that records drawing commands into a `Frame`
pub struct FrameRecorder {
    frame: Frame,
    color: Color32,
    modelview: Rotation2<f32>,
    /// Vertices of the line loop currently open, if any
    open: Option<Vec<NormalizedPoint>>,
}

impl Default for FrameRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self {
            frame: Frame::default(),
            color: Color32::WHITE,
            modelview: Rotation2::identity(),
            open: None,
        }
    }

    /// Hand over the recorded frame and start a fresh one
    ///
    /// Color and model-view state carry over, as they would on a GPU context.
    pub fn take_frame(&mut self) -> Frame {
        if self.open.is_some() {
            log::warn!("Frame taken with an unterminated line loop");
            self.open = None;
        }
        std::mem::take(&mut self.frame)
    }
}

impl Canvas for FrameRecorder {
    fn clear(&mut self, color: Color32) {
        self.frame.background = color;
        self.frame.primitives.clear();
        self.frame.flushed = false;
    }

    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn begin_line_loop(&mut self) {
        if self.open.is_some() {
            log::warn!("Nested line loop ignored");
            return;
        }
        self.open = Some(Vec::new());
    }

    fn vertex(&mut self, p: NormalizedPoint) {
        let Some(vertices) = self.open.as_mut() else {
            log::warn!("Vertex outside of a line loop ignored");
            return;
        };

        let v = self.modelview * Point2::new(p.x, p.y);
        vertices.push(NormalizedPoint::new(v.x, v.y));
    }

    fn end_line_loop(&mut self) {
        match self.open.take() {
            Some(vertices) => self.frame.primitives.push(LineLoopPrimitive {
                color: self.color,
                vertices,
            }),
            None => log::warn!("Line loop ended without being started"),
        }
    }

    fn rotate(&mut self, degrees: f32) {
        self.modelview = self.modelview * Rotation2::new(degrees.to_radians());
    }

    fn load_identity(&mut self) {
        self.modelview = Rotation2::identity();
    }

    fn flush(&mut self) {
        self.frame.flushed = true;
    }
}
