//! Pixel → normalized device coordinate conversion
//!
//! ```text
//! nx =  2 * x / width  - 1
//! ny = -2 * y / height + 1
//! ```
//!
//! The Y axis flips because pixel rows grow downward while device space
//! grows upward.

use eframe::egui::Vec2;

use super::point::{NormalizedPoint, PixelPoint};
use crate::error::{FlowerError, Result};

/// Dimensions of the area pixel coordinates are measured against
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Fails unless both dimensions are strictly positive
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(FlowerError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Pixel position of the viewport's center
    ///
    /// Rounds toward zero: a 401-pixel-wide viewport centers at x = 200,
    /// not 200.5, since pixel points are integral.
    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.width / 2, self.height / 2)
    }
}

/// Pick the size that pixel coordinates are normalized against
///
/// The monitor size wins whenever the platform reports one, even though
/// the window is usually smaller. Without it, the window size stands in.
/// The result is not validated: a monitor that rounds to zero yields a
/// viewport that later fails with `InvalidViewport`.
pub fn screen_viewport(monitor: Option<Vec2>, window: Viewport) -> Viewport {
    match monitor {
        Some(size) => Viewport::new(size.x.round() as i32, size.y.round() as i32),
        None => window,
    }
}

/// Map an integral pixel-space point into normalized device space
///
/// Shapes never produce integral vertices, so drawing goes through
/// `map_xy`; this is the whole-pixel form of the same mapping.
///
/// # Errors
/// `FlowerError::InvalidViewport` if `width` or `height` is zero or negative.
#[allow(dead_code)]
pub fn map_to_normalized(p: PixelPoint, width: i32, height: i32) -> Result<NormalizedPoint> {
    map_xy(p.x as f32, p.y as f32, Viewport::new(width, height))
}

/// Map fractional pixel coordinates into normalized device space
///
/// This is the entry point used when drawing: rasterized shapes produce
/// vertices between pixel centers, and those go through here unrounded.
pub fn map_xy(x: f32, y: f32, viewport: Viewport) -> Result<NormalizedPoint> {
    viewport.validate()?;

    let nx = 2.0 * x / viewport.width as f32 - 1.0;
    let ny = -2.0 * y / viewport.height as f32 + 1.0;
    Ok(NormalizedPoint::new(nx, ny))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(p: NormalizedPoint, x: f32, y: f32) {
        assert!((p.x - x).abs() < 1e-6, "x: {} != {}", p.x, x);
        assert!((p.y - y).abs() < 1e-6, "y: {} != {}", p.y, y);
    }

    #[test]
    fn test_corners_and_center() {
        let top_left = map_to_normalized(PixelPoint::new(0, 0), 400, 400).unwrap();
        assert_close(top_left, -1.0, 1.0);

        let bottom_right = map_to_normalized(PixelPoint::new(400, 400), 400, 400).unwrap();
        assert_close(bottom_right, 1.0, -1.0);

        let center = map_to_normalized(PixelPoint::new(200, 200), 400, 400).unwrap();
        assert_close(center, 0.0, 0.0);
    }

    #[test]
    fn test_non_square_viewport() {
        let p = map_to_normalized(PixelPoint::new(480, 135), 1920, 1080).unwrap();
        assert_close(p, -0.5, 0.75);
    }

    #[test]
    fn test_points_inside_viewport_stay_in_range() {
        let (width, height) = (640, 360);
        for x in (0..=width).step_by(16) {
            for y in (0..=height).step_by(9) {
                let p = map_to_normalized(PixelPoint::new(x, y), width, height).unwrap();
                let visible = (-1.0..=1.0).contains(&p.x) && (-1.0..=1.0).contains(&p.y);
                assert!(visible, "({}, {}) mapped to {:?}", x, y, p);
            }
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let p = PixelPoint::new(10, 10);

        assert!(matches!(
            map_to_normalized(p, 0, 400),
            Err(FlowerError::InvalidViewport { width: 0, height: 400 })
        ));
        assert!(matches!(
            map_to_normalized(p, 400, 0),
            Err(FlowerError::InvalidViewport { width: 400, height: 0 })
        ));
    }

    #[test]
    fn test_negative_dimensions_rejected() {
        let result = map_to_normalized(PixelPoint::new(0, 0), -400, 400);
        assert!(matches!(result, Err(FlowerError::InvalidViewport { .. })));
    }

    #[test]
    fn test_fractional_coordinates() {
        let p = map_xy(100.5, 300.0, Viewport::new(201, 400)).unwrap();
        assert_close(p, 0.0, -0.5);
    }

    #[test]
    fn test_screen_viewport_prefers_monitor() {
        let window = Viewport::new(400, 400);
        let screen = screen_viewport(Some(Vec2::new(1919.6, 1080.2)), window);
        assert_eq!(screen, Viewport::new(1920, 1080));
    }

    #[test]
    fn test_screen_viewport_falls_back_to_window() {
        let window = Viewport::new(400, 300);
        assert_eq!(screen_viewport(None, window), window);
    }

    #[test]
    fn test_degenerate_monitor_fails_mapping() {
        let screen = screen_viewport(Some(Vec2::new(0.4, 1080.0)), Viewport::new(400, 400));
        assert_eq!(screen, Viewport::new(0, 1080));
        assert!(matches!(
            map_xy(10.0, 10.0, screen),
            Err(FlowerError::InvalidViewport { width: 0, height: 1080 })
        ));
    }

    #[test]
    fn test_viewport_center() {
        assert_eq!(Viewport::new(400, 400).center(), PixelPoint::new(200, 200));
        assert_eq!(Viewport::new(401, 301).center(), PixelPoint::new(200, 150));
    }
}
