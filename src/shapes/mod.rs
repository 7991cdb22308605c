//! Shapes module - defines drawable shapes
//!
//! This module provides:
//! - `Shape` trait for abstracting over different shape types
//! - `Circle`, rasterized as a regular polygon

mod circle;
mod traits;

pub use circle::Circle;
pub use traits::Shape;
