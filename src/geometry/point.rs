//! Point types for the two coordinate spaces
//!
//! ## Pixel space
//! - Origin at the top-left corner
//! - X grows to the right, Y grows downward
//!
//! ## Normalized device space
//! - Origin at the center, both axes in [-1, 1]
//! - X grows to the right, Y grows upward

/// A position in pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A position in normalized device space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_tuple(self) -> (f32, f32) {
        (self.x, self.y)
    }
}
