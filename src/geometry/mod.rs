//! Geometry module - coordinate types and space conversion
//!
//! This module provides:
//! - `PixelPoint` for window/screen pixel positions
//! - `NormalizedPoint` for normalized device coordinates
//! - The pixel → normalized device coordinate mapper

mod mapper;
mod point;

#[allow(unused_imports)]
pub use mapper::map_to_normalized;
pub use mapper::{map_xy, screen_viewport, Viewport};
pub use point::{NormalizedPoint, PixelPoint};
