//! Circle rasterized as a regular polygon
//!
//! ## Parametric Equation
//! ```text
//! θ = 2π * i / segments      for i in 0..segments
//! x = cx + radius * cos(θ)
//! y = cy + radius * sin(θ)
//! ```
//!
//! With the default 360 segments each edge spans one degree. Fewer segments
//! give a coarser polygon: 4 segments draw a diamond.
#![allow(dead_code)]

use std::f32::consts::TAU;

use super::traits::Shape;
use crate::geometry::PixelPoint;

/// Number of segments used unless overridden
pub const DEFAULT_SEGMENTS: usize = 360;

/// A circle in pixel space
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: PixelPoint,
    radius: i32,
    segments: usize,
}

impl Circle {
    /// Create a circle with the default segment count
    pub fn new(center: PixelPoint, radius: i32) -> Self {
        Self::with_segments(center, radius, DEFAULT_SEGMENTS)
    }

    /// Create a circle approximated by `segments` vertices
    pub fn with_segments(center: PixelPoint, radius: i32, segments: usize) -> Self {
        Self {
            center,
            radius,
            segments,
        }
    }

    pub fn center(&self) -> PixelPoint {
        self.center
    }

    pub fn set_center(&mut self, center: PixelPoint) {
        self.center = center;
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius;
    }

    pub fn segments(&self) -> usize {
        self.segments
    }
}

impl Shape for Circle {
    fn name(&self) -> &str {
        "Circle"
    }

    fn outline(&self) -> Vec<(f32, f32)> {
        let radius = self.radius as f32;
        let (cx, cy) = (self.center.x as f32, self.center.y as f32);

        (0..self.segments)
            .map(|i| {
                let theta = TAU * i as f32 / self.segments as f32;
                (radius * theta.cos() + cx, radius * theta.sin() + cy)
            })
            .collect()
    }
}
