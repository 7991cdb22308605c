//! Render module - drawing surface and presentation
//!
//! This module provides:
//! - `Canvas` trait with a scoped line-loop primitive
//! - `FrameRecorder` that records a frame's drawing commands
//! - `FramePainter` that presents recorded frames through egui

mod canvas;
mod painter;

pub use canvas::{Canvas, Frame, FrameRecorder, LineLoop};
pub use painter::FramePainter;
